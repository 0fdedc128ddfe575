//! Stats panel widgets
//!
//! Every widget reads snapshot fields only, plus an `animate` flag. Zero
//! states (no trophies, no streak, 0/3 cycle, unknown rank) render like any
//! other value.

use eframe::egui;
use crate::core::{
    phase_color, streak_caption, trophy_caption, CycleProgress, Fest, Phase, TimelineState,
};
use crate::theme::{colors, token_color};
use super::TimelineApp;

/// Blocks drawn by the streak meter
const STREAK_BLOCKS: usize = 4;

/// Fill animation length, in seconds
const FILL_SECS: f32 = 0.3;

impl TimelineApp {
    pub(crate) fn render_stats_panel(&self, ctx: &egui::Context, state: &TimelineState<'_>, now: f64) {
        egui::SidePanel::right("stats")
            .default_width(360.0)
            .min_width(300.0)
            .resizable(true)
            .frame(egui::Frame::new().fill(colors::BG_DARK).inner_margin(10.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().id_salt("stats_scroll").show(ui, |ui| {
                    card(ui, |ui| phase_indicator(ui, state.phase, self.phase_flash(now), self.animate));
                    card(ui, |ui| {
                        trophy_counter(ui, state.total_trophies, self.trophy_counter.value(now))
                    });
                    card(ui, |ui| streak_meter(ui, state.current_streak, self.animate));
                    card(ui, |ui| {
                        cycle_progress(
                            ui,
                            state.cycle_progress,
                            state.current_event.cycle_year(),
                            self.animate,
                        )
                    });
                    card(ui, |ui| {
                        super::chart::rank_chart(ui, state.current_event_index, self.animate)
                    });
                });
            });
    }
}

fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::new()
        .fill(colors::BG_CARD)
        .stroke(egui::Stroke::new(1.0, colors::BORDER_SUBTLE))
        .corner_radius(6.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            add_contents(ui);
        });
    ui.add_space(8.0);
}

fn widget_title(ui: &mut egui::Ui, title: &str) {
    ui.label(egui::RichText::new(title).color(colors::TEXT_MUTED).small().strong());
}

/// Animated 0..=1 fill for a boolean state, or an instant jump.
fn fill_amount(ui: &egui::Ui, id: egui::Id, filled: bool, animate: bool) -> f32 {
    if animate {
        ui.ctx().animate_bool_with_time(id, filled, FILL_SECS)
    } else if filled {
        1.0
    } else {
        0.0
    }
}

/// Three phases in order; phases up to the current one are lit.
pub(crate) fn phase_indicator(ui: &mut egui::Ui, current: Phase, flash: f32, animate: bool) {
    widget_title(ui, "PHASE");

    for phase in Phase::ALL {
        let is_active = phase.ordinal() <= current.ordinal();
        let is_current = phase == current;
        let color = token_color(phase_color(phase));

        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
            let lit = fill_amount(ui, ui.id().with(("phase", phase.ordinal())), is_active, animate);
            let painter = ui.painter();
            painter.circle_stroke(rect.center(), 6.0, egui::Stroke::new(1.5, color));
            painter.circle_filled(rect.center(), 4.0 * lit, color);
            if is_current && flash > 0.0 {
                painter.circle_stroke(
                    rect.center(),
                    6.0 + 6.0 * flash,
                    egui::Stroke::new(1.0, color.gamma_multiply(flash)),
                );
            }

            let name_color = if is_active { colors::TEXT_PRIMARY } else { colors::TEXT_MUTED };
            ui.label(egui::RichText::new(phase.label()).color(name_color).strong());
            if is_current {
                ui.label(egui::RichText::new(phase.description()).color(colors::TEXT_SECONDARY).small());
            }
        });
    }
}

/// Trophy total with up to two trophy glyphs and a champion caption.
///
/// `display` is the animated count; it equals `count` once the count-up ends.
pub(crate) fn trophy_counter(ui: &mut egui::Ui, count: usize, display: usize) {
    widget_title(ui, "HOUSE TROPHIES");

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(display.to_string())
                .color(colors::GOLD)
                .size(40.0)
                .strong(),
        );
        if count > 0 {
            ui.label(egui::RichText::new("🏆".repeat(count.min(2))).size(28.0).color(colors::GOLD));
        }
    });

    if let Some(caption) = trophy_caption(count) {
        ui.label(egui::RichText::new(caption).color(colors::TEXT_SECONDARY));
    }
}

/// Four blocks, one per consecutive #1 finish.
pub(crate) fn streak_meter(ui: &mut egui::Ui, streak: usize, animate: bool) {
    ui.horizontal(|ui| {
        widget_title(ui, "#1 STREAK");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(streak.to_string()).color(colors::GOLD).size(20.0).strong());
        });
    });

    let block_gap = 6.0;
    let width = ui.available_width();
    let block_width = (width - block_gap * (STREAK_BLOCKS as f32 - 1.0)) / STREAK_BLOCKS as f32;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 14.0), egui::Sense::hover());

    for block in 0..STREAK_BLOCKS {
        let left = rect.left() + block as f32 * (block_width + block_gap);
        let block_rect = egui::Rect::from_min_size(
            egui::pos2(left, rect.top()),
            egui::vec2(block_width, rect.height()),
        );
        let fill = fill_amount(ui, ui.id().with(("streak", block)), block < streak, animate);

        let painter = ui.painter();
        painter.rect_filled(block_rect, 3.0, colors::BG_HOVER);
        if fill > 0.0 {
            let filled = egui::Rect::from_min_size(
                block_rect.min,
                egui::vec2(block_rect.width() * fill, block_rect.height()),
            );
            painter.rect_filled(filled, 3.0, colors::GOLD);
        }
    }

    if let Some(caption) = streak_caption(streak) {
        ui.label(egui::RichText::new(caption).color(colors::TEXT_SECONDARY));
    }
}

/// One segment per fest of the cycle, filled up to `progress.completed`.
pub(crate) fn cycle_progress(
    ui: &mut egui::Ui,
    progress: CycleProgress,
    cycle_year: &str,
    animate: bool,
) {
    ui.horizontal(|ui| {
        widget_title(ui, "CYCLE PROGRESS");
        if !cycle_year.is_empty() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(format!("Paradox {cycle_year}")).color(colors::TEXT_SECONDARY));
            });
        }
    });

    ui.columns(Fest::ALL.len(), |columns| {
        for (index, (column, fest)) in columns.iter_mut().zip(Fest::ALL).enumerate() {
            let is_completed = index < progress.completed;
            let is_current = index + 1 == progress.completed;

            let width = column.available_width();
            let (rect, _) = column.allocate_exact_size(egui::vec2(width, 8.0), egui::Sense::hover());
            let fill = fill_amount(column, column.id().with(("cycle", index)), is_completed, animate);

            let painter = column.painter();
            painter.rect_filled(rect, 2.0, colors::BG_HOVER);
            if fill > 0.0 {
                let filled = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width() * fill, rect.height()));
                painter.rect_filled(filled, 2.0, colors::GOLD);
            }

            let label_color = if is_current {
                colors::GOLD
            } else if is_completed {
                colors::TEXT_PRIMARY
            } else {
                colors::TEXT_MUTED
            };
            column.label(egui::RichText::new(fest.name()).color(label_color).small());
        }
    });

    let summary = format!("{} / {} fests", progress.completed, progress.total);
    if progress.is_full() {
        ui.label(egui::RichText::new(format!("{summary} - cycle complete")).color(colors::GOLD));
    } else {
        ui.label(egui::RichText::new(summary).color(colors::TEXT_SECONDARY));
    }
}
