//! Scroll position to event index mapping
//!
//! Two families of input reach the timeline:
//! - a normalized progress value (0 = top of the timeline, 1 = bottom),
//!   mapped with a `ProgressPolicy`
//! - the on-screen offsets of the per-event sections, mapped by distance to
//!   a fixed anchor line
//!
//! Either way the result is always a valid catalog index. Recomputation is
//! coalesced to one sample per frame with `FrameCoalescer`.

use serde::Serialize;
use tracing::{debug, trace};

/// Fraction of the viewport height where the anchor line sits.
pub const DEFAULT_ANCHOR_RATIO: f32 = 0.28;

/// Stretch applied by `ProgressPolicy::Extended`.
pub const EXTENDED_SCALE: f64 = 1.1;

/// How a normalized progress value selects an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ProgressPolicy {
    /// `floor(progress * total)`, clamped to the last event
    #[default]
    Linear,
    /// Linear over `progress * 1.1`, so the upcoming events are reached
    /// before the very end of the scroll range
    Extended,
}

impl ProgressPolicy {
    pub const ALL: [ProgressPolicy; 2] = [ProgressPolicy::Linear, ProgressPolicy::Extended];

    pub fn label(self) -> &'static str {
        match self {
            ProgressPolicy::Linear => "Linear",
            ProgressPolicy::Extended => "Extended",
        }
    }

    pub fn index_for_progress(self, progress: f64, total: usize) -> usize {
        match self {
            ProgressPolicy::Linear => linear_index(progress, total),
            ProgressPolicy::Extended => linear_index(progress * EXTENDED_SCALE, total),
        }
    }
}

/// `floor(progress * total)` clamped into `[0, total - 1]`.
///
/// Negative and NaN progress select the first event, anything at or past the
/// end selects the last one. `total == 0` yields 0.
pub fn linear_index(progress: f64, total: usize) -> usize {
    let Some(last) = total.checked_sub(1) else {
        return 0;
    };
    if progress.is_nan() || progress <= 0.0 {
        return 0;
    }

    let raw = (progress * total as f64).floor();
    if raw >= last as f64 {
        last
    } else {
        raw as usize
    }
}

/// Index of the section whose top is closest to `anchor_y`.
///
/// Sections not laid out yet (`None`) or with non-finite offsets are skipped.
/// On an exact tie the lower index wins. Returns `None` when no section has a
/// usable offset; callers keep their current index in that case.
pub fn nearest_anchor_index(section_tops: &[Option<f32>], anchor_y: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (index, top) in section_tops.iter().enumerate() {
        let Some(top) = *top else { continue };
        let distance = (top - anchor_y).abs();
        if !distance.is_finite() {
            continue;
        }
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
}

/// How far a container has been scrolled through the viewport, in `[0, 1]`.
///
/// Tracking starts when the container top reaches `viewport_height - offset`
/// and ends when its bottom reaches `offset` below the viewport bottom.
/// Only a top strictly past the end line counts as finished, also when the
/// container is too short to leave any range (`height <= 2 * offset`).
pub fn container_progress(
    container_top: f32,
    container_height: f32,
    viewport_height: f32,
    offset: f32,
) -> f32 {
    let start = viewport_height - offset;
    let end = viewport_height + offset - container_height;
    let span = start - end;

    let raw = if container_top < end {
        1.0
    } else if span > 0.0 && container_top <= start {
        (start - container_top) / span
    } else {
        0.0
    };
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, 1.0)
    }
}

/// Holds the last published progress, ignoring changes within `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressTracker {
    progress: f32,
    threshold: f32,
}

impl ProgressTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            progress: 0.0,
            threshold: threshold.max(0.0),
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Publish `progress` if it moved more than the threshold. Returns true
    /// when the stored value changed.
    pub fn update(&mut self, progress: f32) -> bool {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        if (progress - self.progress).abs() > self.threshold {
            self.progress = progress;
            true
        } else {
            false
        }
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Keeps only the newest scroll sample until the next frame.
///
/// A sample replaced by a newer one before `take` is dropped and never
/// delivered.
#[derive(Debug)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
    superseded: u64,
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self {
            pending: None,
            superseded: 0,
        }
    }

    pub fn submit(&mut self, sample: T) {
        if self.pending.replace(sample).is_some() {
            self.superseded += 1;
            trace!(superseded = self.superseded, "Scroll sample superseded");
        }
    }

    /// Newest sample since the last frame, if any.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Samples dropped so far because a newer one arrived first
    pub fn superseded(&self) -> u64 {
        self.superseded
    }
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The single "current index" owned by the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexTracker {
    current: usize,
}

impl IndexTracker {
    pub fn current(&self) -> usize {
        self.current
    }

    /// Store `index`; returns the new value only if it differs.
    pub fn apply(&mut self, index: usize) -> Option<usize> {
        if index == self.current {
            return None;
        }
        debug!(from = self.current, to = index, "Current event changed");
        self.current = index;
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_index_endpoints() {
        assert_eq!(linear_index(0.0, 8), 0);
        assert_eq!(linear_index(0.999, 8), 7);
        assert_eq!(linear_index(1.0, 8), 7);
        assert_eq!(linear_index(0.5, 8), 4);
        assert_eq!(linear_index(0.124, 8), 0);
        assert_eq!(linear_index(0.125, 8), 1);
    }

    #[test]
    fn test_linear_index_out_of_range_input() {
        assert_eq!(linear_index(-3.0, 8), 0);
        assert_eq!(linear_index(f64::NAN, 8), 0);
        assert_eq!(linear_index(42.0, 8), 7);
        assert_eq!(linear_index(f64::INFINITY, 8), 7);
        assert_eq!(linear_index(0.5, 0), 0);
        assert_eq!(linear_index(0.5, 1), 0);
    }

    #[test]
    fn test_linear_index_monotonic() {
        let mut previous = 0;
        for step in 0..=1000 {
            let index = linear_index(step as f64 / 1000.0, 8);
            assert!(index >= previous, "step {step} went back from {previous} to {index}");
            assert!(index < 8);
            previous = index;
        }
    }

    #[test]
    fn test_extended_policy_reaches_end_early() {
        let policy = ProgressPolicy::Extended;
        assert_eq!(policy.index_for_progress(0.0, 8), 0);
        // 0.8 * 1.1 * 8 = 7.04
        assert_eq!(policy.index_for_progress(0.8, 8), 7);
        assert_eq!(ProgressPolicy::Linear.index_for_progress(0.8, 8), 6);
        assert_eq!(policy.index_for_progress(1.0, 8), 7);
    }

    #[test]
    fn test_default_policy_is_linear() {
        assert_eq!(ProgressPolicy::default(), ProgressPolicy::Linear);
        assert_eq!(ProgressPolicy::ALL[0], ProgressPolicy::default());
    }

    #[test]
    fn test_policy_serializes_lowercase() {
        assert_eq!(serde_json::to_value(ProgressPolicy::Extended).unwrap(), "extended");
        assert_eq!(ProgressPolicy::Linear.label(), "Linear");
    }

    #[test]
    fn test_nearest_anchor_index() {
        let tops = [Some(-400.0), Some(-50.0), Some(180.0), Some(600.0)];
        assert_eq!(nearest_anchor_index(&tops, 200.0), Some(2));
        assert_eq!(nearest_anchor_index(&tops, -1000.0), Some(0));
        assert_eq!(nearest_anchor_index(&tops, 5000.0), Some(3));
    }

    #[test]
    fn test_nearest_anchor_tie_keeps_first() {
        let tops = [Some(100.0), Some(300.0)];
        assert_eq!(nearest_anchor_index(&tops, 200.0), Some(0));
    }

    #[test]
    fn test_nearest_anchor_skips_unknown_sections() {
        let tops = [None, Some(f32::NAN), Some(900.0)];
        assert_eq!(nearest_anchor_index(&tops, 0.0), Some(2));
        assert_eq!(nearest_anchor_index(&[None, None], 0.0), None);
        assert_eq!(nearest_anchor_index(&[], 0.0), None);
    }

    #[test]
    fn test_container_progress() {
        // viewport 1000, container 3000 tall, no offset: start=1000, end=-2000
        assert_eq!(container_progress(1200.0, 3000.0, 1000.0, 0.0), 0.0);
        assert_eq!(container_progress(1000.0, 3000.0, 1000.0, 0.0), 0.0);
        assert_eq!(container_progress(-500.0, 3000.0, 1000.0, 0.0), 0.5);
        assert_eq!(container_progress(-2000.0, 3000.0, 1000.0, 0.0), 1.0);
        assert_eq!(container_progress(-9000.0, 3000.0, 1000.0, 0.0), 1.0);
    }

    #[test]
    fn test_container_progress_degenerate_span() {
        // height == 2 * offset: start == end == 900
        assert_eq!(container_progress(899.0, 200.0, 1000.0, 100.0), 1.0);
        assert_eq!(container_progress(900.0, 200.0, 1000.0, 100.0), 0.0);
        assert_eq!(container_progress(950.0, 200.0, 1000.0, 100.0), 0.0);
    }

    #[test]
    fn test_container_progress_short_container_on_end_line() {
        // start = 900, end = 1000: no range, and sitting on the end line is not past it
        assert_eq!(container_progress(1000.0, 100.0, 1000.0, 100.0), 0.0);
        assert_eq!(container_progress(950.0, 100.0, 1000.0, 100.0), 1.0);
        assert_eq!(container_progress(1001.0, 100.0, 1000.0, 100.0), 0.0);
    }

    #[test]
    fn test_container_progress_non_finite_input() {
        assert_eq!(container_progress(f32::NAN, 3000.0, 1000.0, 0.0), 0.0);
        assert_eq!(container_progress(f32::NEG_INFINITY, 3000.0, 1000.0, 0.0), 1.0);
    }

    #[test]
    fn test_progress_tracker_threshold() {
        let mut tracker = ProgressTracker::new(0.05);
        assert!(!tracker.update(0.03));
        assert_eq!(tracker.progress(), 0.0);
        assert!(tracker.update(0.1));
        assert_eq!(tracker.progress(), 0.1);
        assert!(tracker.update(7.0));
        assert_eq!(tracker.progress(), 1.0);
        assert!(tracker.update(f32::NAN));
        assert_eq!(tracker.progress(), 0.0);
    }

    #[test]
    fn test_coalescer_keeps_latest_only() {
        let mut coalescer = FrameCoalescer::new();
        assert_eq!(coalescer.take(), None);

        coalescer.submit(0.1);
        coalescer.submit(0.2);
        coalescer.submit(0.3);
        assert!(coalescer.is_pending());
        assert_eq!(coalescer.superseded(), 2);

        assert_eq!(coalescer.take(), Some(0.3));
        // Nothing left for the next frame
        assert_eq!(coalescer.take(), None);
        assert!(!coalescer.is_pending());
    }

    #[test]
    fn test_index_tracker_reports_changes_only() {
        let mut tracker = IndexTracker::default();
        assert_eq!(tracker.apply(0), None);
        assert_eq!(tracker.apply(3), Some(3));
        assert_eq!(tracker.apply(3), None);
        assert_eq!(tracker.current(), 3);
    }
}
