//! Panel rendering for both pages.

mod editor;
mod viewer;

use super::*;
use eframe::egui::{self, RichText};

/// Maps a stored language tag onto the extension hint syntect expects.
pub(super) fn syntect_language_hint(lang: &str) -> &str {
    match lang {
        "markdown" => "md",
        "python" => "py",
        "rust" => "rs",
        "javascript" => "js",
        "typescript" => "ts",
        "golang" => "go",
        "csharp" => "cs",
        "kotlin" => "kt",
        "ruby" => "rb",
        "shell" | "bash" => "sh",
        "text" | "plain" => "txt",
        "yaml" => "yml",
        "latex" => "tex",
        "c++" | "cc" => "cpp",
        "htm" => "html",
        other => other,
    }
}

/// A bottom-bar action button in the shared muted style.
pub(super) fn bar_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(label).color(COLOR_TEXT_SECONDARY))
            .fill(egui::Color32::TRANSPARENT)
            .min_size(egui::vec2(90.0, 32.0)),
    )
}

impl RyoPasteApp {
    /// Renders the shortcut reference for the active page.
    pub(super) fn render_reference(&self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.label(
            RichText::new(keymap::reference(self.current_view()))
                .monospace()
                .color(COLOR_TEXT_PRIMARY),
        );
    }

    /// Renders the history snapshot; clicking a row opens that paste.
    pub(super) fn render_history(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        if self.history_rows.is_empty() {
            ui.label(
                RichText::new("No pastes viewed yet")
                    .monospace()
                    .color(COLOR_TEXT_MUTED),
            );
            return;
        }

        let mut navigate: Option<String> = None;
        egui::ScrollArea::vertical()
            .id_salt("history_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for (index, entry) in self.history_rows.iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("{:>3}", index + 1))
                                .monospace()
                                .color(COLOR_TEXT_MUTED),
                        );
                        let title = if entry.title.is_empty() {
                            "Untitled"
                        } else {
                            entry.title.as_str()
                        };
                        if ui
                            .selectable_label(false, RichText::new(title).color(COLOR_TEXT_PRIMARY))
                            .clicked()
                        {
                            navigate = Some(entry.id.clone());
                        }
                        ui.label(
                            RichText::new(format!("{}/{}", self.public_url, entry.id))
                                .monospace()
                                .small()
                                .color(COLOR_TEXT_SECONDARY),
                        );
                    });
                }
            });

        if let Some(id) = navigate {
            self.open_paste(id);
        }
    }
}
