//! Viewer page: resolved document with highlighting plus the bottom bar.

use super::super::*;
use super::bar_button;
use eframe::egui::{self, RichText};
use egui_extras::syntax_highlighting::{self, CodeTheme};
use ryopaste_core::keymap::Action;

impl RyoPasteApp {
    pub(crate) fn render_viewer(&mut self, ctx: &egui::Context) {
        let notice = self.active_notice().map(str::to_string);
        egui::TopBottomPanel::bottom("viewer_actions")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if bar_button(ui, "History").clicked() {
                        self.handle_action(Action::ToggleHistory);
                    }
                    if bar_button(ui, "New Paste").clicked() {
                        self.handle_action(Action::NewPaste);
                    }
                    let title = self
                        .document
                        .as_ref()
                        .map(|document| document.title.as_str())
                        .unwrap_or("Title");
                    ui.label(RichText::new(title).color(COLOR_TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if bar_button(ui, "Copy Link").clicked() {
                            self.handle_action(Action::CopyLink);
                        }
                        if bar_button(ui, "Copy Code").clicked() {
                            self.handle_action(Action::CopyCode);
                        }
                        if let Some(text) = notice.as_deref() {
                            ui.label(RichText::new(text).small().color(COLOR_ACCENT));
                        }
                    });
                });
                ui.add_space(4.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            ViewMode::Shortcut => self.render_reference(ui),
            ViewMode::History => self.render_history(ui),
            ViewMode::Code => self.render_document(ui),
        });
    }

    fn render_document(&self, ui: &mut egui::Ui) {
        let Some(document) = &self.document else {
            ui.add_space(8.0);
            ui.label(
                RichText::new("Loading...")
                    .monospace()
                    .color(COLOR_TEXT_MUTED),
            );
            return;
        };

        let hint = super::syntect_language_hint(&document.lang);
        let theme = CodeTheme::from_memory(ui.ctx(), ui.style());
        egui::ScrollArea::vertical()
            .id_salt("viewer_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                syntax_highlighting::code_view_ui(ui, &theme, &document.code, hint);
            });
    }
}
