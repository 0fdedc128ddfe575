//! Left rail: one entry per event, click to jump to its section

use eframe::egui;
use crate::core::{Catalog, TimelineState};
use crate::theme::colors;
use super::TimelineApp;

impl TimelineApp {
    pub(crate) fn render_sidebar(&mut self, ctx: &egui::Context, state: &TimelineState<'_>) {
        egui::SidePanel::left("event_rail")
            .exact_width(120.0)
            .resizable(false)
            .frame(egui::Frame::new().fill(colors::BG_DARK).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(16.0);

                for (index, event) in Catalog::canonical().events().iter().enumerate() {
                    let is_active = index == state.current_event_index;
                    let is_past = index < state.current_event_index;

                    let color = if is_active {
                        colors::GOLD
                    } else if event.is_upcoming() {
                        colors::TEXT_MUTED
                    } else if is_past {
                        colors::TEXT_SECONDARY
                    } else {
                        colors::TEXT_PRIMARY
                    };
                    let dot = if is_active { "●" } else if event.is_upcoming() { "○" } else { "•" };

                    let text = egui::RichText::new(format!("{dot} {}", event.date_label())).color(color);
                    let text = if event.is_upcoming() { text.italics() } else { text };

                    if ui.selectable_label(is_active, text).clicked() {
                        self.scroll_target = Some(index);
                    }
                    ui.add_space(6.0);
                }
            });
    }
}
