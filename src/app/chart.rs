//! Rank history chart (rank 1 on top)

use eframe::egui;
use egui_plot::{Line, LineStyle, Plot, PlotPoint, PlotPoints, Points, Text};
use crate::core::{fest_color, rank_color, Catalog};
use crate::theme::{colors, token_color};

/// Reveal animation length, in seconds
const REVEAL_SECS: f32 = 0.4;

/// Plot y for a rank; ranks are negated so #1 sits at the top.
fn rank_y(rank: u8) -> f64 {
    -(rank as f64)
}

/// Points with `x <= reveal`, plus an interpolated tip toward the next point.
fn reveal_path(points: &[[f64; 2]], reveal: f64) -> Vec<[f64; 2]> {
    let mut visible: Vec<[f64; 2]> = points.iter().copied().take_while(|p| p[0] <= reveal).collect();

    if let (Some(&last), Some(&next)) = (visible.last(), points.get(visible.len())) {
        let span = next[0] - last[0];
        if span > 0.0 && reveal > last[0] {
            let t = (reveal - last[0]) / span;
            visible.push([reveal, last[1] + (next[1] - last[1]) * t]);
        }
    }
    visible
}

pub(crate) fn rank_chart(ui: &mut egui::Ui, current_index: usize, animate: bool) {
    ui.label(egui::RichText::new("RANK HISTORY").color(colors::TEXT_MUTED).small().strong());

    let catalog = Catalog::canonical();
    let events = catalog.events();

    let reveal = if animate {
        ui.ctx()
            .animate_value_with_time(ui.id().with("rank_reveal"), current_index as f32, REVEAL_SECS)
            as f64
    } else {
        current_index as f64
    };

    let completed: Vec<[f64; 2]> = events
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_completed())
        .filter_map(|(i, e)| e.rank.map(|rank| [i as f64, rank_y(rank)]))
        .collect();
    let path = reveal_path(&completed, reveal);

    // Dashed projection from the last result to the next fest, assuming #1
    let projection = catalog.last_completed_index().and_then(|last| {
        let first_upcoming = events.iter().position(|e| e.is_upcoming())?;
        let last_rank = events[last].rank?;
        (current_index >= last).then(|| {
            vec![[last as f64, rank_y(last_rank)], [first_upcoming as f64, rank_y(1)]]
        })
    });

    let last_x = events.len().saturating_sub(1) as f64;

    Plot::new("rank_chart")
        .height(180.0)
        .show_axes([false, true])
        .show_grid(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_background(false)
        .include_x(-0.5)
        .include_x(last_x + 0.5)
        .include_y(rank_y(4) - 0.5)
        .include_y(rank_y(1) + 0.7)
        .y_axis_formatter(|mark, _range| {
            let rank = -mark.value;
            if rank >= 1.0 && rank.fract() == 0.0 {
                format!("#{}", rank as i64)
            } else {
                String::new()
            }
        })
        .label_formatter(move |_name, value| {
            let index = value.x.round().max(0.0) as usize;
            events
                .get(index)
                .map(|e| e.date_label())
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            if path.len() >= 2 {
                plot_ui.line(
                    Line::new(PlotPoints::from(path))
                        .color(colors::TEXT_PRIMARY)
                        .width(2.0),
                );
            }

            if let Some(projection) = projection {
                plot_ui.line(
                    Line::new(PlotPoints::from(projection))
                        .color(colors::TEXT_MUTED)
                        .width(1.5)
                        .style(LineStyle::dashed_loose()),
                );
            }

            for (index, event) in events.iter().enumerate().take(current_index + 1) {
                let x = index as f64;
                match event.rank.filter(|_| event.is_completed()) {
                    Some(rank) => {
                        let at = vec![[x, rank_y(rank)]];
                        plot_ui.points(
                            Points::new(PlotPoints::from(at.clone()))
                                .color(token_color(fest_color(event.fest)))
                                .radius(8.0)
                                .filled(true),
                        );
                        plot_ui.points(
                            Points::new(PlotPoints::from(at))
                                .color(token_color(rank_color(event.rank)))
                                .radius(4.5)
                                .filled(true),
                        );
                        if event.is_trophy_win {
                            plot_ui.text(Text::new(
                                PlotPoint::new(x, rank_y(rank) + 0.45),
                                egui::RichText::new("🏆").color(colors::GOLD),
                            ));
                        }
                    }
                    None => {
                        // Upcoming fests sit on #1, hollow
                        plot_ui.points(
                            Points::new(PlotPoints::from(vec![[x, rank_y(1)]]))
                                .color(colors::TEXT_MUTED)
                                .radius(5.0)
                                .filled(false),
                        );
                    }
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_path_whole_points() {
        let points = [[0.0, -4.0], [1.0, -4.0], [2.0, -1.0]];
        assert_eq!(reveal_path(&points, 1.0), vec![[0.0, -4.0], [1.0, -4.0]]);
        assert_eq!(reveal_path(&points, 7.0).len(), 3);
    }

    #[test]
    fn test_reveal_path_interpolates_tip() {
        let points = [[0.0, -4.0], [1.0, -4.0], [2.0, -1.0]];
        let path = reveal_path(&points, 1.5);
        assert_eq!(path.len(), 3);
        assert_eq!(path[2], [1.5, -2.5]);
    }

    #[test]
    fn test_reveal_path_empty() {
        assert!(reveal_path(&[], 3.0).is_empty());
    }

    #[test]
    fn test_rank_one_is_highest() {
        assert!(rank_y(1) > rank_y(4));
    }
}
