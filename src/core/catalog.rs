//! Fest catalog for the house trophy timeline
//!
//! This module contains:
//! - Event record types (fest, phase, status)
//! - The canonical, hand-authored `FEST_HISTORY` table
//! - Pure queries over any ordered slice of events (`Catalog`)
//! - Authored-data validation

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, trace};

// ============================================================================
// Record types
// ============================================================================

/// Number of fests making up one trophy cycle.
pub const CYCLE_SIZE: usize = 3;

/// The three recurring fests, in the order they run within a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Fest {
    Saavan,
    Margazhi,
    Paradox,
}

impl Fest {
    /// Cycle order: Saavan opens a cycle, Paradox awards the trophy.
    pub const ALL: [Fest; 3] = [Fest::Saavan, Fest::Margazhi, Fest::Paradox];

    pub fn name(self) -> &'static str {
        match self {
            Fest::Saavan => "Saavan",
            Fest::Margazhi => "Margazhi",
            Fest::Paradox => "Paradox",
        }
    }

    /// Month the fest is held in, used for sidebar date labels.
    pub fn month_abbrev(self) -> &'static str {
        match self {
            Fest::Saavan => "Sep",
            Fest::Margazhi => "Jan",
            Fest::Paradox => "May",
        }
    }
}

/// Authored classification of the house's competitive trajectory.
///
/// Assigned per event when the catalog is written. It is never inferred from
/// rank or streak: a #1 finish can be `Dominance` or `Breakthrough` depending
/// on where it sits in the story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Contender,
    Breakthrough,
    Dominance,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Contender, Phase::Breakthrough, Phase::Dominance];

    /// Position in `Phase::ALL`
    pub fn ordinal(self) -> usize {
        match self {
            Phase::Contender => 0,
            Phase::Breakthrough => 1,
            Phase::Dominance => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Completed,
    Upcoming,
}

/// One fest result (or a fest still to come).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FestEvent {
    pub id: &'static str,
    pub fest: Fest,
    pub year: u16,
    /// 1 = best; `None` while the result is unknown
    pub rank: Option<u8>,
    pub is_trophy_win: bool,
    pub phase: Phase,
    pub cycle_id: &'static str,
    pub status: EventStatus,
    pub description: &'static str,
}

impl FestEvent {
    pub fn is_completed(&self) -> bool {
        self.status == EventStatus::Completed
    }

    pub fn is_upcoming(&self) -> bool {
        self.status == EventStatus::Upcoming
    }

    /// Sidebar label such as `"May 2024"`.
    pub fn date_label(&self) -> String {
        format!("{} {}", self.fest.month_abbrev(), self.year)
    }

    /// Year component of the cycle id (`"paradox-2025"` -> `"2025"`).
    pub fn cycle_year(&self) -> &'static str {
        self.cycle_id
            .split_once('-')
            .map_or("", |(_, year)| year)
    }
}

/// Completed-event count within a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleProgress {
    pub completed: usize,
    pub total: usize,
}

impl CycleProgress {
    pub const EMPTY: CycleProgress = CycleProgress { completed: 0, total: CYCLE_SIZE };

    pub fn is_full(&self) -> bool {
        self.completed >= self.total
    }
}

// ============================================================================
// Canonical dataset
// ============================================================================

/// Gir's fest history, in chronological order.
pub static FEST_HISTORY: [FestEvent; 8] = [
    FestEvent {
        id: "saavan-2023",
        fest: Fest::Saavan,
        year: 2023,
        rank: Some(4),
        is_trophy_win: false,
        phase: Phase::Contender,
        cycle_id: "paradox-2024",
        status: EventStatus::Completed,
        description: "Gir enters the arena. A solid #4 finish marks the beginning.",
    },
    FestEvent {
        id: "margazhi-2024",
        fest: Fest::Margazhi,
        year: 2024,
        rank: Some(4),
        is_trophy_win: false,
        phase: Phase::Contender,
        cycle_id: "paradox-2024",
        status: EventStatus::Completed,
        description: "Consistency builds. Gir holds steady at #4.",
    },
    FestEvent {
        id: "paradox-2024",
        fest: Fest::Paradox,
        year: 2024,
        rank: Some(1),
        is_trophy_win: true,
        phase: Phase::Breakthrough,
        cycle_id: "paradox-2024",
        status: EventStatus::Completed,
        description: "THE BREAKTHROUGH. Gir claims the throne with a stunning #1 finish and the House Trophy.",
    },
    FestEvent {
        id: "margazhi-2025",
        fest: Fest::Margazhi,
        year: 2025,
        rank: Some(1),
        is_trophy_win: false,
        phase: Phase::Dominance,
        cycle_id: "paradox-2025",
        status: EventStatus::Completed,
        description: "Dominance begins. Gir defends the #1 position.",
    },
    FestEvent {
        id: "paradox-2025",
        fest: Fest::Paradox,
        year: 2025,
        rank: Some(1),
        is_trophy_win: true,
        phase: Phase::Dominance,
        cycle_id: "paradox-2025",
        status: EventStatus::Completed,
        description: "BACK-TO-BACK. Gir secures the second consecutive House Trophy.",
    },
    FestEvent {
        id: "saavan-2025",
        fest: Fest::Saavan,
        year: 2025,
        rank: Some(1),
        is_trophy_win: false,
        phase: Phase::Dominance,
        cycle_id: "paradox-2026",
        status: EventStatus::Completed,
        description: "The streak continues. Four consecutive #1 finishes.",
    },
    FestEvent {
        id: "margazhi-2026",
        fest: Fest::Margazhi,
        year: 2026,
        rank: None,
        is_trophy_win: false,
        phase: Phase::Dominance,
        cycle_id: "paradox-2026",
        status: EventStatus::Upcoming,
        description: "The journey continues...",
    },
    FestEvent {
        id: "paradox-2026",
        fest: Fest::Paradox,
        year: 2026,
        rank: None,
        is_trophy_win: false,
        phase: Phase::Dominance,
        cycle_id: "paradox-2026",
        status: EventStatus::Upcoming,
        description: "Can Gir claim a third consecutive trophy?",
    },
];

// ============================================================================
// Queries
// ============================================================================

/// Read-only view over an ordered event list.
///
/// Index position is the primary key. Every index-taking query accepts any
/// `usize` and saturates or falls back to a neutral value instead of
/// panicking, so an empty slice is handled too.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    events: &'a [FestEvent],
}

impl Catalog<'static> {
    /// The canonical `FEST_HISTORY` table
    pub fn canonical() -> Self {
        Catalog::new(&FEST_HISTORY)
    }
}

impl<'a> Catalog<'a> {
    pub fn new(events: &'a [FestEvent]) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &'a [FestEvent] {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a FestEvent> {
        self.events.get(index)
    }

    pub fn completed_events(&self) -> Vec<&'a FestEvent> {
        self.events.iter().filter(|e| e.is_completed()).collect()
    }

    pub fn upcoming_events(&self) -> Vec<&'a FestEvent> {
        self.events.iter().filter(|e| e.is_upcoming()).collect()
    }

    /// Trophy wins in `[0, upto]`.
    pub fn trophy_count(&self, upto: usize) -> usize {
        let end = upto.saturating_add(1).min(self.events.len());
        self.events[..end].iter().filter(|e| e.is_trophy_win).count()
    }

    /// Consecutive #1 finishes ending at `upto`.
    ///
    /// Scans backward; upcoming events are skipped, the first completed event
    /// without rank 1 ends the scan.
    pub fn current_streak(&self, upto: usize) -> usize {
        let Some(last) = self.events.len().checked_sub(1) else {
            return 0;
        };

        let mut streak = 0;
        for event in self.events[..=upto.min(last)].iter().rev() {
            match (event.status, event.rank) {
                (EventStatus::Upcoming, _) => continue,
                (EventStatus::Completed, Some(1)) => streak += 1,
                (EventStatus::Completed, _) => break,
            }
        }
        streak
    }

    /// Completed events of `index`'s cycle at or before `index`.
    pub fn cycle_progress(&self, index: usize) -> CycleProgress {
        let Some(event) = self.events.get(index) else {
            return CycleProgress::EMPTY;
        };

        let completed = self.events[..=index]
            .iter()
            .filter(|e| e.cycle_id == event.cycle_id && e.is_completed())
            .count();

        trace!(index, cycle_id = event.cycle_id, completed, "Cycle progress");
        CycleProgress { completed, total: CYCLE_SIZE }
    }

    /// Index of the last completed event, if any.
    pub fn last_completed_index(&self) -> Option<usize> {
        self.events.iter().rposition(|e| e.is_completed())
    }

    /// Check the authored-data invariants the queries rely on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.events.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        let mut cycles: HashMap<&str, usize> = HashMap::new();
        let mut previous_year = None;

        for event in self.events {
            if !seen.insert(event.id) {
                return Err(CatalogError::DuplicateId(event.id.to_string()));
            }

            match (event.status, event.rank) {
                (EventStatus::Upcoming, Some(_)) => {
                    return Err(CatalogError::UpcomingWithRank(event.id.to_string()));
                }
                (EventStatus::Completed, None) => {
                    return Err(CatalogError::CompletedWithoutRank(event.id.to_string()));
                }
                (_, Some(0)) => return Err(CatalogError::InvalidRank(event.id.to_string())),
                _ => {}
            }

            if event.is_trophy_win && !event.is_completed() {
                return Err(CatalogError::UpcomingTrophy(event.id.to_string()));
            }

            if let Some(previous) = previous_year {
                if event.year < previous {
                    return Err(CatalogError::OutOfOrder {
                        id: event.id.to_string(),
                        year: event.year,
                        previous,
                    });
                }
            }
            previous_year = Some(event.year);

            let count = cycles.entry(event.cycle_id).or_default();
            *count += 1;
            if *count > CYCLE_SIZE {
                return Err(CatalogError::CycleOverflow(event.cycle_id.to_string()));
            }
        }

        debug!(events = self.events.len(), cycles = cycles.len(), "Catalog validated");
        Ok(())
    }
}

/// Authored-data problems reported by [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has no events")]
    Empty,

    #[error("duplicate event id: {0}")]
    DuplicateId(String),

    #[error("upcoming event {0} already has a rank")]
    UpcomingWithRank(String),

    #[error("completed event {0} has no rank")]
    CompletedWithoutRank(String),

    #[error("event {0} has rank 0 (ranks start at 1)")]
    InvalidRank(String),

    #[error("upcoming event {0} is marked as a trophy win")]
    UpcomingTrophy(String),

    #[error("event {id} ({year}) comes after an event from {previous}")]
    OutOfOrder { id: String, year: u16, previous: u16 },

    #[error("cycle {0} has more than 3 events")]
    CycleOverflow(String),
}

/// Validate the canonical table.
pub fn validate_canonical() -> Result<(), CatalogError> {
    Catalog::canonical().validate()
}

// Convenience wrappers over the canonical catalog

pub fn completed_events() -> Vec<&'static FestEvent> {
    Catalog::canonical().completed_events()
}

pub fn upcoming_events() -> Vec<&'static FestEvent> {
    Catalog::canonical().upcoming_events()
}

pub fn trophy_count(upto: usize) -> usize {
    Catalog::canonical().trophy_count(upto)
}

pub fn current_streak(upto: usize) -> usize {
    Catalog::canonical().current_streak(upto)
}

pub fn cycle_progress(index: usize) -> CycleProgress {
    Catalog::canonical().cycle_progress(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &'static str, rank: Option<u8>, status: EventStatus) -> FestEvent {
        FestEvent {
            id,
            fest: Fest::Saavan,
            year: 2024,
            rank,
            is_trophy_win: false,
            phase: Phase::Contender,
            cycle_id: "paradox-2024",
            status,
            description: "",
        }
    }

    #[test]
    fn test_canonical_catalog_is_valid() {
        assert_eq!(validate_canonical(), Ok(()));
        assert_eq!(Catalog::canonical().len(), 8);
    }

    #[test]
    fn test_completed_and_upcoming_partition() {
        let completed = completed_events();
        let upcoming = upcoming_events();
        assert_eq!(completed.len(), 6);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(completed[0].id, "saavan-2023");
        assert_eq!(upcoming[0].id, "margazhi-2026");
        assert!(upcoming.iter().all(|e| e.rank.is_none()));
    }

    #[test]
    fn test_trophy_count_monotonic() {
        let counts: Vec<usize> = (0..FEST_HISTORY.len()).map(trophy_count).collect();
        assert_eq!(counts, vec![0, 0, 1, 1, 2, 2, 2, 2]);
        for pair in counts.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_trophy_count_saturates_past_end() {
        assert_eq!(trophy_count(7), 2);
        assert_eq!(trophy_count(999), 2);
        assert_eq!(trophy_count(usize::MAX), 2);
    }

    #[test]
    fn test_streak_matches_rank_history() {
        let streaks: Vec<usize> = (0..FEST_HISTORY.len()).map(current_streak).collect();
        assert_eq!(streaks, vec![0, 0, 1, 2, 3, 4, 4, 4]);
    }

    #[test]
    fn test_streak_upcoming_does_not_break() {
        let events = [
            event("a", Some(1), EventStatus::Completed),
            event("b", None, EventStatus::Upcoming),
            event("c", Some(1), EventStatus::Completed),
        ];
        assert_eq!(Catalog::new(&events).current_streak(2), 2);
    }

    #[test]
    fn test_streak_anomalous_completed_without_rank_breaks() {
        let events = [
            event("a", Some(1), EventStatus::Completed),
            event("b", None, EventStatus::Completed),
            event("c", Some(1), EventStatus::Completed),
        ];
        assert_eq!(Catalog::new(&events).current_streak(2), 1);
    }

    #[test]
    fn test_streak_index_past_end_uses_last_event() {
        assert_eq!(current_streak(100), 4);
    }

    #[test]
    fn test_cycle_progress() {
        assert_eq!(cycle_progress(0), CycleProgress { completed: 1, total: 3 });
        assert_eq!(cycle_progress(2), CycleProgress { completed: 3, total: 3 });
        assert!(cycle_progress(2).is_full());
        assert_eq!(cycle_progress(4), CycleProgress { completed: 2, total: 3 });
        // Upcoming events in the current cycle do not count
        assert_eq!(cycle_progress(7), CycleProgress { completed: 1, total: 3 });
    }

    #[test]
    fn test_cycle_progress_out_of_range() {
        assert_eq!(cycle_progress(8), CycleProgress::EMPTY);
        assert_eq!(cycle_progress(usize::MAX), CycleProgress::EMPTY);
    }

    #[test]
    fn test_empty_catalog_neutral_defaults() {
        let empty = Catalog::new(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.trophy_count(3), 0);
        assert_eq!(empty.current_streak(3), 0);
        assert_eq!(empty.cycle_progress(0), CycleProgress::EMPTY);
        assert!(empty.completed_events().is_empty());
        assert_eq!(empty.last_completed_index(), None);
        assert_eq!(empty.validate(), Err(CatalogError::Empty));
    }

    #[test]
    fn test_last_completed_index() {
        assert_eq!(Catalog::canonical().last_completed_index(), Some(5));
    }

    #[test]
    fn test_date_label_and_cycle_year() {
        assert_eq!(FEST_HISTORY[0].date_label(), "Sep 2023");
        assert_eq!(FEST_HISTORY[2].date_label(), "May 2024");
        assert_eq!(FEST_HISTORY[3].date_label(), "Jan 2025");
        assert_eq!(FEST_HISTORY[5].cycle_year(), "2026");
    }

    #[test]
    fn test_phase_is_authored_not_derived() {
        // Same rank, different authored phases
        assert_eq!(FEST_HISTORY[2].rank, Some(1));
        assert_eq!(FEST_HISTORY[2].phase, Phase::Breakthrough);
        assert_eq!(FEST_HISTORY[3].rank, Some(1));
        assert_eq!(FEST_HISTORY[3].phase, Phase::Dominance);
    }

    #[test]
    fn test_validate_rejects_bad_data() {
        let dup = [
            event("a", Some(1), EventStatus::Completed),
            event("a", Some(2), EventStatus::Completed),
        ];
        assert_eq!(
            Catalog::new(&dup).validate(),
            Err(CatalogError::DuplicateId("a".into()))
        );

        let ranked_upcoming = [event("a", Some(1), EventStatus::Upcoming)];
        assert_eq!(
            Catalog::new(&ranked_upcoming).validate(),
            Err(CatalogError::UpcomingWithRank("a".into()))
        );

        let unranked = [event("a", None, EventStatus::Completed)];
        assert_eq!(
            Catalog::new(&unranked).validate(),
            Err(CatalogError::CompletedWithoutRank("a".into()))
        );

        let zero = [event("a", Some(0), EventStatus::Completed)];
        assert_eq!(
            Catalog::new(&zero).validate(),
            Err(CatalogError::InvalidRank("a".into()))
        );

        let mut future_trophy = event("a", None, EventStatus::Upcoming);
        future_trophy.is_trophy_win = true;
        assert_eq!(
            Catalog::new(&[future_trophy]).validate(),
            Err(CatalogError::UpcomingTrophy("a".into()))
        );
    }

    #[test]
    fn test_validate_rejects_order_and_cycle_overflow() {
        let mut later = event("a", Some(1), EventStatus::Completed);
        later.year = 2025;
        let earlier = event("b", Some(1), EventStatus::Completed);
        let err = Catalog::new(&[later, earlier]).validate().unwrap_err();
        assert!(matches!(err, CatalogError::OutOfOrder { year: 2024, previous: 2025, .. }));

        let crowded = [
            event("a", Some(1), EventStatus::Completed),
            event("b", Some(1), EventStatus::Completed),
            event("c", Some(1), EventStatus::Completed),
            event("d", Some(1), EventStatus::Completed),
        ];
        assert_eq!(
            Catalog::new(&crowded).validate(),
            Err(CatalogError::CycleOverflow("paradox-2024".into()))
        );
    }
}
