//! Timeline view
//!
//! The egui app shared by the WASM build and the native window. It owns the
//! only mutable state of the timeline: the current event index, the pending
//! scroll sample and animation bookkeeping. Everything shown is derived from
//! `derive_timeline_state` each frame.

mod chart;
mod header;
mod sections;
mod settings;
mod sidebar;
mod widgets;

use eframe::egui;
use tracing::{debug, info};

use crate::core::{
    derive_timeline_state, nearest_anchor_index, Catalog, CountUp, FrameCoalescer, IndexTracker,
    Phase, ProgressPolicy, ProgressTracker, TimelineState,
};
use crate::theme::{colors, timeline_visuals};

/// Duration of the trophy count-up, in seconds
const COUNT_UP_SECS: f64 = 0.8;

/// How long a phase change stays highlighted, in seconds
const PHASE_FLASH_SECS: f64 = 1.0;

/// Smallest journey progress change worth publishing
const PROGRESS_THRESHOLD: f32 = 0.001;

/// Start-up options for the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Animate counters, meters and phase changes
    pub animate: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { animate: true }
    }
}

impl AppConfig {
    /// Native: `TIMELINE_ANIMATE=0` (or `false`) disables animations.
    #[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
    pub fn from_env() -> Self {
        let animate = std::env::var("TIMELINE_ANIMATE")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);
        Self { animate }
    }

    /// WASM: `window.__timeline_animate = false` disables animations.
    #[cfg(all(feature = "wasm", target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let animate = js_sys::eval("window.__timeline_animate")
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(true);
        Self { animate }
    }
}

#[cfg_attr(all(feature = "wasm", target_arch = "wasm32"), allow(dead_code))]
fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no")
}

/// Section offsets captured while laying out the scroll area.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScrollSample {
    pub section_tops: Vec<Option<f32>>,
    pub anchor_y: f32,
    /// How far the sections have been scrolled through, see `container_progress`
    pub progress: f32,
}

/// Timeline app - runs on both native and WASM
pub struct TimelineApp {
    /// Currently selected event
    pub(crate) index: IndexTracker,
    /// Latest scroll sample, applied once per frame
    scroll_samples: FrameCoalescer<ScrollSample>,
    /// Last sample handed to the coalescer, for change detection
    last_sample: Option<ScrollSample>,
    /// Journey progress through the sections
    pub(crate) progress: ProgressTracker,
    /// `None` follows the anchor line, otherwise map journey progress
    pub(crate) progress_policy: Option<ProgressPolicy>,
    /// Section to bring into view on the next frame
    pub(crate) scroll_target: Option<usize>,
    /// Trophy counter animation
    pub(crate) trophy_counter: CountUp,
    /// Phase shown last frame
    prev_phase: Phase,
    /// When the phase last changed (egui time)
    phase_changed_at: Option<f64>,
    /// Animate widgets
    pub(crate) animate: bool,
    /// Show settings sidebar
    pub(crate) show_settings: bool,
    /// Draw the anchor line over the sections
    pub(crate) show_anchor: bool,
}

impl TimelineApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        cc.egui_ctx.set_visuals(timeline_visuals());
        info!(animate = config.animate, "Starting timeline view");

        let now = cc.egui_ctx.input(|i| i.time);
        Self::with_config(config, now)
    }

    fn with_config(config: AppConfig, now: f64) -> Self {
        let initial = derive_timeline_state(0);

        Self {
            index: IndexTracker::default(),
            scroll_samples: FrameCoalescer::new(),
            last_sample: None,
            progress: ProgressTracker::new(PROGRESS_THRESHOLD),
            progress_policy: None,
            scroll_target: None,
            trophy_counter: CountUp::new(initial.total_trophies, COUNT_UP_SECS, now, config.animate),
            prev_phase: initial.phase,
            phase_changed_at: None,
            animate: config.animate,
            show_settings: false,
            show_anchor: false,
        }
    }

    pub(crate) fn state(&self) -> TimelineState<'static> {
        derive_timeline_state(self.index.current() as i64)
    }

    /// Queue the frame's section layout if anything in it moved.
    ///
    /// Scrolling, resizing and re-wrapping all show up as changed section
    /// tops, anchor or progress.
    pub(crate) fn observe_scroll(&mut self, sample: ScrollSample) {
        if self.last_sample.as_ref() == Some(&sample) {
            return;
        }
        self.last_sample = Some(sample.clone());
        self.scroll_samples.submit(sample);
    }

    /// Apply at most one pending scroll sample. Returns true if the index moved.
    fn apply_scroll(&mut self) -> bool {
        let Some(sample) = self.scroll_samples.take() else {
            return false;
        };
        self.progress.update(sample.progress);

        let index = match self.progress_policy {
            None => nearest_anchor_index(&sample.section_tops, sample.anchor_y),
            Some(policy) => Some(policy.index_for_progress(
                f64::from(self.progress.progress()),
                Catalog::canonical().len(),
            )),
        };
        index.and_then(|index| self.index.apply(index)).is_some()
    }

    /// Phase flash strength in `[0, 1]`, fading out after a change.
    pub(crate) fn phase_flash(&self, now: f64) -> f32 {
        match self.phase_changed_at {
            Some(at) if self.animate && now - at < PHASE_FLASH_SECS => {
                (1.0 - (now - at) / PHASE_FLASH_SECS) as f32
            }
            _ => 0.0,
        }
    }

    fn track_state(&mut self, state: &TimelineState<'_>, now: f64) {
        self.trophy_counter.set_enabled(self.animate);
        self.trophy_counter.retarget(state.total_trophies, now);

        if state.phase != self.prev_phase {
            debug!(from = ?self.prev_phase, to = ?state.phase, "Phase changed");
            self.prev_phase = state.phase;
            self.phase_changed_at = Some(now);
        }
    }
}

impl eframe::App for TimelineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        let state = self.state();
        self.track_state(&state, now);

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::new().fill(colors::BG_DARK).inner_margin(8.0))
            .show(ctx, |ui| {
                self.render_header(ui, &state);
            });

        if self.show_settings {
            self.render_settings(ctx);
        }

        self.render_sidebar(ctx, &state);
        self.render_stats_panel(ctx, &state, now);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_DARK))
            .show(ctx, |ui| {
                self.render_sections(ui, &state);
            });

        let changed = self.apply_scroll();
        let animating = !self.trophy_counter.is_finished(now) || self.phase_flash(now) > 0.0;
        if changed || animating {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(" FALSE "));
        assert!(!parse_flag("off"));
    }

    #[test]
    fn test_default_config_animates() {
        assert!(AppConfig::default().animate);
    }

    fn sample(tops: [f32; 3], anchor_y: f32, progress: f32) -> ScrollSample {
        ScrollSample {
            section_tops: tops.iter().copied().map(Some).collect(),
            anchor_y,
            progress,
        }
    }

    #[test]
    fn test_unchanged_layout_is_not_resampled() {
        let mut app = TimelineApp::with_config(AppConfig::default(), 0.0);
        app.observe_scroll(sample([100.0, 600.0, 1100.0], 200.0, 0.0));
        assert!(!app.apply_scroll());

        app.observe_scroll(sample([100.0, 600.0, 1100.0], 200.0, 0.0));
        assert!(!app.scroll_samples.is_pending());
    }

    #[test]
    fn test_relayout_at_same_offset_moves_index() {
        let mut app = TimelineApp::with_config(AppConfig::default(), 0.0);
        app.observe_scroll(sample([100.0, 600.0, 1100.0], 200.0, 0.0));
        app.apply_scroll();
        assert_eq!(app.index.current(), 0);

        // Narrower panel: cards re-wrap taller, the second card now sits nearer the anchor
        app.observe_scroll(sample([-200.0, 250.0, 900.0], 200.0, 0.0));
        assert!(app.apply_scroll());
        assert_eq!(app.index.current(), 1);
    }

    #[test]
    fn test_progress_policy_maps_journey_progress() {
        let mut app = TimelineApp::with_config(AppConfig::default(), 0.0);
        app.progress_policy = Some(ProgressPolicy::Linear);

        // Anchor says 0, progress 0.5 of 8 events says 4
        app.observe_scroll(sample([200.0, 700.0, 1200.0], 200.0, 0.5));
        assert!(app.apply_scroll());
        assert_eq!(app.progress.progress(), 0.5);
        assert_eq!(app.index.current(), 4);

        app.progress_policy = Some(ProgressPolicy::Extended);
        app.observe_scroll(sample([200.0, 700.0, 1200.0], 200.0, 0.8));
        assert!(app.apply_scroll());
        assert_eq!(app.index.current(), 7);
    }
}
