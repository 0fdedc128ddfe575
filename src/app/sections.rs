//! Scrolling event sections
//!
//! Each event gets one card. Card tops are captured every frame and the
//! card nearest the anchor line becomes the current event.

use eframe::egui;
use crate::core::{
    container_progress, fest_color, phase_color, rank_color, rank_label, Catalog, FestEvent,
    TimelineState, DEFAULT_ANCHOR_RATIO,
};
use crate::theme::{colors, token_color};
use super::{ScrollSample, TimelineApp};

impl TimelineApp {
    pub(crate) fn render_sections(&mut self, ui: &mut egui::Ui, state: &TimelineState<'_>) {
        let scroll_target = self.scroll_target.take();
        let show_anchor = self.show_anchor;

        let output = egui::ScrollArea::vertical()
            .id_salt("sections")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let viewport = ui.clip_rect();
                let anchor_offset = viewport.height() * DEFAULT_ANCHOR_RATIO;
                let anchor_y = viewport.top() + anchor_offset;
                let gap = (viewport.height() * 0.6).max(120.0);

                ui.add_space(anchor_offset);

                let events = Catalog::canonical().events();
                let mut section_tops = Vec::with_capacity(events.len());
                let mut span: Option<egui::Rect> = None;
                for (index, event) in events.iter().enumerate() {
                    let is_active = index == state.current_event_index;
                    let rect = render_section(ui, event, is_active);

                    if scroll_target == Some(index) {
                        // Land the card on the anchor line, not the top edge
                        ui.scroll_to_rect(
                            rect.translate(egui::vec2(0.0, -anchor_offset)),
                            Some(egui::Align::TOP),
                        );
                    }
                    section_tops.push(Some(rect.top()));
                    span = Some(span.map_or(rect, |s| s.union(rect)));
                    ui.add_space(gap);
                }

                // Let the last card scroll up to the anchor
                ui.add_space(viewport.height());

                if show_anchor {
                    ui.painter().hline(
                        viewport.x_range(),
                        anchor_y,
                        egui::Stroke::new(1.0, colors::GOLD.gamma_multiply(0.5)),
                    );
                }

                // The cards, first top to last bottom, as the tracked container
                let progress = span.map_or(0.0, |span| {
                    let top = span.top() - viewport.top();
                    container_progress(top, span.height(), viewport.height(), 0.0)
                });

                ScrollSample { section_tops, anchor_y, progress }
            });

        self.observe_scroll(output.inner);
    }
}

/// Draw one event card, returning its screen rect.
fn render_section(ui: &mut egui::Ui, event: &FestEvent, is_active: bool) -> egui::Rect {
    let border = if is_active { colors::GOLD } else { colors::BORDER_SUBTLE };

    egui::Frame::new()
        .fill(colors::BG_CARD)
        .stroke(egui::Stroke::new(if is_active { 2.0 } else { 1.0 }, border))
        .corner_radius(6.0)
        .inner_margin(14.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(event.fest.name())
                        .color(token_color(fest_color(event.fest)))
                        .size(18.0)
                        .strong(),
                );
                ui.label(egui::RichText::new(event.year.to_string()).color(colors::TEXT_SECONDARY));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(rank_label(event.rank))
                            .color(token_color(rank_color(event.rank)))
                            .size(20.0)
                            .strong(),
                    );
                    if event.is_trophy_win {
                        ui.label(egui::RichText::new("🏆 House Trophy").color(colors::GOLD));
                    }
                    if event.is_upcoming() {
                        ui.label(egui::RichText::new("Upcoming").color(colors::TEXT_MUTED).italics());
                    }
                });
            });

            ui.label(
                egui::RichText::new(event.phase.label().to_uppercase())
                    .color(token_color(phase_color(event.phase)))
                    .small(),
            );
            ui.add_space(4.0);
            ui.label(egui::RichText::new(event.description).color(colors::TEXT_PRIMARY));
        })
        .response
        .rect
}
