//! Settings sidebar: animation toggles and how the active event is picked

use eframe::egui;
use crate::core::{ProgressPolicy, DEFAULT_ANCHOR_RATIO};
use crate::theme::colors;
use super::TimelineApp;

impl TimelineApp {
    pub(crate) fn render_settings(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("settings")
            .default_width(220.0)
            .min_width(180.0)
            .resizable(true)
            .frame(egui::Frame::new().fill(colors::BG_DARK).inner_margin(8.0))
            .show(ctx, |ui| {
                let group_frame = egui::Frame::new()
                    .stroke(egui::Stroke::new(1.0, colors::BORDER_SUBTLE))
                    .corner_radius(4.0)
                    .inner_margin(6.0);

                group_frame.show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new("View:").color(colors::TEXT_MUTED));

                    ui.checkbox(&mut self.animate, "Animations");
                    ui.checkbox(&mut self.show_anchor, "Show anchor line");
                });

                ui.add_space(8.0);

                group_frame.show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new("Active event:").color(colors::TEXT_MUTED));

                    let previous = self.progress_policy;
                    ui.radio_value(&mut self.progress_policy, None, "Anchor line");
                    for policy in ProgressPolicy::ALL {
                        ui.radio_value(
                            &mut self.progress_policy,
                            Some(policy),
                            format!("{} progress", policy.label()),
                        );
                    }
                    if self.progress_policy != previous {
                        // Re-map the current layout under the new policy
                        self.last_sample = None;
                    }
                    if self.progress_policy.is_none() {
                        ui.label(
                            egui::RichText::new(format!(
                                "  Active event = section nearest {:.0}% of the view",
                                DEFAULT_ANCHOR_RATIO * 100.0
                            ))
                            .color(colors::TEXT_MUTED)
                            .small(),
                        );
                    }
                });
            });
    }
}
