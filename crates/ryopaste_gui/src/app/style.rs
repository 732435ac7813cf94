//! Theme constants and one-time style application for the egui app.

use super::RyoPasteApp;
use eframe::egui::{self, Color32, CornerRadius, Stroke, Visuals};

pub(super) const COLOR_BG_PRIMARY: Color32 = Color32::from_rgb(0x29, 0x25, 0x24);
pub(super) const COLOR_BG_SECONDARY: Color32 = Color32::from_rgb(0x1c, 0x19, 0x17);
pub(super) const COLOR_TEXT_PRIMARY: Color32 = Color32::from_rgb(0xe7, 0xe5, 0xe4);
pub(super) const COLOR_TEXT_SECONDARY: Color32 = Color32::from_rgb(0x99, 0x99, 0x99);
pub(super) const COLOR_TEXT_MUTED: Color32 = Color32::from_rgb(0x6e, 0x6a, 0x67);
pub(super) const COLOR_ACCENT: Color32 = Color32::from_rgb(0xfc, 0xd3, 0x4d);
pub(super) const COLOR_BORDER: Color32 = Color32::from_rgb(0x44, 0x40, 0x3c);

impl RyoPasteApp {
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }

        let mut visuals = Visuals::dark();
        visuals.panel_fill = COLOR_BG_PRIMARY;
        visuals.window_fill = COLOR_BG_SECONDARY;
        visuals.extreme_bg_color = COLOR_BG_SECONDARY;
        visuals.override_text_color = Some(COLOR_TEXT_PRIMARY);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COLOR_BORDER);
        visuals.widgets.inactive.corner_radius = CornerRadius::same(2);
        visuals.widgets.hovered.corner_radius = CornerRadius::same(2);
        visuals.widgets.active.corner_radius = CornerRadius::same(2);
        visuals.selection.bg_fill = COLOR_ACCENT.linear_multiply(0.4);
        ctx.set_visuals(visuals);

        self.style_applied = true;
    }
}
