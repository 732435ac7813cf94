//! Editor page: code area with live highlighting plus the bottom action bar.

use super::super::*;
use super::bar_button;
use eframe::egui::{self, RichText};
use egui_extras::syntax_highlighting::{self, CodeTheme};
use ryopaste_core::keymap::Action;
use ryopaste_core::models::language::catalog;

impl RyoPasteApp {
    pub(crate) fn render_editor(&mut self, ctx: &egui::Context) {
        let notice = self.active_notice().map(str::to_string);
        egui::TopBottomPanel::bottom("editor_actions")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if bar_button(ui, "History").clicked() {
                        self.handle_action(Action::ToggleHistory);
                    }
                    let selected_name = self.draft.selected_language().name.clone();
                    if bar_button(ui, &selected_name).clicked() {
                        self.language_picker_open = !self.language_picker_open;
                    }
                    ui.add(
                        egui::TextEdit::singleline(&mut self.draft.name)
                            .id(egui::Id::new(TITLE_INPUT_ID))
                            .hint_text("Title")
                            .desired_width(200.0),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let save_button = egui::Button::new(
                            RichText::new(if self.save_in_flight { "Saving..." } else { "Save" })
                                .color(COLOR_BG_SECONDARY),
                        )
                        .fill(COLOR_ACCENT)
                        .min_size(egui::vec2(90.0, 32.0));
                        if ui.add_enabled(!self.save_in_flight, save_button).clicked() {
                            self.handle_action(Action::Save);
                        }
                        if let Some(text) = notice.as_deref() {
                            ui.label(RichText::new(text).small().color(COLOR_ACCENT));
                        }
                    });
                });
                ui.add_space(4.0);
            });

        self.render_language_picker(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            ViewMode::Shortcut => self.render_reference(ui),
            ViewMode::History => self.render_history(ui),
            ViewMode::Code => self.render_code_input(ui),
        });

        if let Some(target) = self.focus_request.take() {
            let id = match target {
                FocusTarget::Code => CODE_INPUT_ID,
                FocusTarget::Title => TITLE_INPUT_ID,
            };
            ctx.memory_mut(|memory| memory.request_focus(egui::Id::new(id)));
        }
    }

    fn render_code_input(&mut self, ui: &mut egui::Ui) {
        let language = self.draft.selected_language().canonical_code();
        let hint = super::syntect_language_hint(language).to_string();
        let theme = CodeTheme::from_memory(ui.ctx(), ui.style());
        egui::ScrollArea::vertical()
            .id_salt("editor_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let mut layouter =
                    move |ui: &egui::Ui, text: &dyn egui::TextBuffer, wrap_width: f32| {
                        let mut job = syntax_highlighting::highlight(
                            ui.ctx(),
                            ui.style(),
                            &theme,
                            text.as_str(),
                            &hint,
                        );
                        job.wrap.max_width = wrap_width;
                        ui.fonts_mut(|fonts| fonts.layout_job(job))
                    };
                ui.add(
                    egui::TextEdit::multiline(&mut self.draft.code)
                        .id(egui::Id::new(CODE_INPUT_ID))
                        .code_editor()
                        .lock_focus(true)
                        .frame(false)
                        .hint_text("Paste")
                        .desired_width(f32::INFINITY)
                        .desired_rows(32)
                        .layouter(&mut layouter),
                );
            });
    }

    fn render_language_picker(&mut self, ctx: &egui::Context) {
        if !self.language_picker_open {
            return;
        }
        let mut open = true;
        egui::Window::new("Language")
            .open(&mut open)
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("language_scroll")
                    .max_height(280.0)
                    .show(ui, |ui| {
                        for (index, option) in catalog().iter().enumerate() {
                            if ui
                                .selectable_label(self.draft.selected == index, &option.name)
                                .clicked()
                            {
                                self.draft.selected = index;
                                self.language_picker_open = false;
                            }
                        }
                    });
            });
        if !open {
            self.language_picker_open = false;
        }
    }
}
