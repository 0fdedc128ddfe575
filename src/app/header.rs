//! Header bar: house title, scroll hint, settings toggle, journey progress and current event

use eframe::egui;
use crate::core::{fest_color, TimelineState};
use crate::theme::{colors, token_color};
use super::TimelineApp;

impl TimelineApp {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui, state: &TimelineState<'_>) {
        ui.horizontal(|ui| {
            let settings_text = if self.show_settings { "Settings <<<" } else { "Settings >>>" };
            if ui.button(egui::RichText::new(settings_text)).clicked() {
                self.show_settings = !self.show_settings;
            }

            ui.add_space(12.0);

            ui.label(egui::RichText::new("Gir").color(colors::GOLD).size(22.0).strong());
            ui.label(
                egui::RichText::new("House Trophy Timeline")
                    .color(colors::TEXT_PRIMARY)
                    .size(16.0),
            );
            ui.label(
                egui::RichText::new("A story of growth, breakthrough, and sustained excellence")
                    .color(colors::TEXT_MUTED),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(egui::RichText::new("Scroll to explore ↓").color(colors::TEXT_SECONDARY))
                    .clicked()
                {
                    self.scroll_target = Some(0);
                }

                ui.add_space(10.0);

                let progress = self.progress.progress();
                ui.add(
                    egui::ProgressBar::new(progress)
                        .desired_width(120.0)
                        .fill(colors::GOLD.gamma_multiply(0.6))
                        .text(format!("{:.0}%", progress * 100.0)),
                );

                ui.add_space(10.0);

                let event = state.current_event;
                ui.label(
                    egui::RichText::new(event.date_label()).color(colors::TEXT_SECONDARY),
                );
                ui.label(
                    egui::RichText::new(event.fest.name())
                        .color(token_color(fest_color(event.fest)))
                        .strong(),
                );
            });
        });
    }
}
