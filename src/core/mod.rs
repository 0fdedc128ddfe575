//! Platform-agnostic core module - shared between the GUI builds and CLI

pub mod anim;
pub mod captions;
pub mod catalog;
pub mod colors;
pub mod progress;
pub mod state;

pub use anim::{ease_out_quart, CountUp};
pub use captions::{rank_label, streak_caption, trophy_caption};
pub use catalog::{
    completed_events, current_streak, cycle_progress, trophy_count, upcoming_events,
    validate_canonical, Catalog, CatalogError, CycleProgress, EventStatus, Fest, FestEvent, Phase,
    CYCLE_SIZE, FEST_HISTORY,
};
pub use colors::{css_custom_properties, fest_color, phase_color, rank_color, ColorToken};
pub use progress::{
    container_progress, linear_index, nearest_anchor_index, FrameCoalescer, IndexTracker,
    ProgressPolicy, ProgressTracker, DEFAULT_ANCHOR_RATIO,
};
pub use state::{clamp_index, derive_timeline_state, TimelineState};
