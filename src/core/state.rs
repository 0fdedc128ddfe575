//! Timeline snapshot derivation
//!
//! A `TimelineState` bundles every statistic the widgets show for one
//! selected event. It borrows from the catalog and is rebuilt whenever the
//! selected index changes; nothing here is cached.

use serde::Serialize;
use tracing::trace;

use super::catalog::{Catalog, CycleProgress, FestEvent, Phase, FEST_HISTORY};

/// Derived statistics for one selected index.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineState<'a> {
    pub current_event_index: usize,
    pub current_event: &'a FestEvent,
    /// Copied from `current_event`, never inferred from ranks
    pub phase: Phase,
    pub total_trophies: usize,
    pub current_streak: usize,
    pub cycle_progress: CycleProgress,
    /// Prefix `[0, current_event_index]`
    pub events_up_to_now: &'a [FestEvent],
}

/// Saturate any signed index into `[0, len - 1]` (0 for an empty catalog).
pub fn clamp_index(index: i64, len: usize) -> usize {
    let Some(last) = len.checked_sub(1) else {
        return 0;
    };
    if index <= 0 {
        return 0;
    }
    usize::try_from(index).map_or(last, |i| i.min(last))
}

impl<'a> Catalog<'a> {
    /// Snapshot at `index`, clamped into range. `None` only for an empty catalog.
    pub fn derive_state(&self, index: i64) -> Option<TimelineState<'a>> {
        if self.is_empty() {
            return None;
        }
        let clamped = clamp_index(index, self.len());
        Some(snapshot_at(*self, index, clamped))
    }
}

/// Snapshot of the canonical history at `index`.
///
/// Negative or overflowing indices saturate to the first or last event.
pub fn derive_timeline_state(index: i64) -> TimelineState<'static> {
    let clamped = clamp_index(index, FEST_HISTORY.len());
    snapshot_at(Catalog::canonical(), index, clamped)
}

/// `index` must be in range
fn snapshot_at(catalog: Catalog<'_>, requested: i64, index: usize) -> TimelineState<'_> {
    let events = catalog.events();
    let current_event = &events[index];

    let state = TimelineState {
        current_event_index: index,
        current_event,
        phase: current_event.phase,
        total_trophies: catalog.trophy_count(index),
        current_streak: catalog.current_streak(index),
        cycle_progress: catalog.cycle_progress(index),
        events_up_to_now: &events[..=index],
    };

    trace!(
        requested,
        index,
        id = current_event.id,
        trophies = state.total_trophies,
        streak = state.current_streak,
        "Derived timeline state"
    );
    state
}
