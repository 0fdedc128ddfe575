//! Standalone CLI for inspecting timeline snapshots
//!
//! Run with: cargo run --bin timeline-cli --features cli -- --index 4

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use house_timeline::core::{
    css_custom_properties, derive_timeline_state, rank_label, streak_caption, trophy_caption,
    validate_canonical, Catalog, FrameCoalescer, IndexTracker, ProgressPolicy, TimelineState,
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Upper bound for `walk --samples`
const MAX_SAMPLES: i64 = 1_000_000;

/// Inspect the house trophy timeline
#[derive(Parser)]
#[command(name = "timeline-cli", version, about = "Inspect house trophy timeline snapshots")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Event index (any integer, clamped into the catalog)
    #[arg(short, long, allow_negative_numbers = true, conflicts_with = "progress")]
    index: Option<i64>,

    /// Scroll progress, normally in [0, 1]
    #[arg(short, long, allow_negative_numbers = true)]
    progress: Option<f64>,

    /// How progress maps to an event
    #[arg(long, value_enum, default_value_t = ProgressPolicy::Linear)]
    policy: ProgressPolicy,

    /// Print snapshots as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep progress from 0 to 1 and report every event change
    Walk {
        /// Number of progress samples
        #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=MAX_SAMPLES))]
        samples: u32,

        /// Scroll notifications delivered per frame
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
        per_frame: u32,
    },

    /// Validate the fest catalog
    Check,

    /// List every event
    List,

    /// Print the colour tokens as CSS custom properties for a host page
    Palette,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,house_timeline=debug"));
    fmt().with_env_filter(filter).with_target(true).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Walk { samples, per_frame }) => walk(samples, per_frame, cli.policy, cli.json),
        Some(Commands::Check) => check(),
        Some(Commands::List) => {
            list();
            Ok(())
        }
        Some(Commands::Palette) => {
            print!("{}", css_custom_properties());
            Ok(())
        }
        None => {
            let index = match (cli.index, cli.progress) {
                (Some(index), _) => index,
                (None, Some(progress)) => {
                    let index = cli.policy.index_for_progress(progress, Catalog::canonical().len());
                    debug!(progress, policy = cli.policy.label(), index, "Mapped progress");
                    index as i64
                }
                (None, None) => 0,
            };
            print_state(&derive_timeline_state(index), cli.json)
        }
    }
}

fn print_state(state: &TimelineState<'_>, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(state).context("encoding snapshot as JSON")?;
        println!("{text}");
        return Ok(());
    }

    let event = state.current_event;
    println!(
        "[{}] {} {} ({})",
        state.current_event_index,
        event.fest.name(),
        event.year,
        event.id
    );
    println!("  rank:     {}", rank_label(event.rank));
    println!("  phase:    {} - {}", state.phase.label(), state.phase.description());
    println!(
        "  trophies: {}{}",
        state.total_trophies,
        trophy_caption(state.total_trophies)
            .map(|c| format!(" ({c})"))
            .unwrap_or_default()
    );
    println!(
        "  streak:   {}{}",
        state.current_streak,
        streak_caption(state.current_streak)
            .map(|c| format!(" ({c})"))
            .unwrap_or_default()
    );
    println!(
        "  cycle:    {}/{} fests (Paradox {})",
        state.cycle_progress.completed,
        state.cycle_progress.total,
        event.cycle_year()
    );
    println!("  {}", event.description);
    Ok(())
}

/// Outcome of a progress sweep.
#[derive(Debug, Default, PartialEq)]
struct Sweep {
    /// Indices the view would switch to, in order
    changes: Vec<usize>,
    samples: u64,
    frames: u64,
    superseded: u64,
}

/// Feed evenly spaced progress samples through a per-frame coalescer, the
/// way a scroll observer would. Only the newest sample of each frame is mapped.
fn sweep(samples: u32, per_frame: u32, policy: ProgressPolicy) -> Sweep {
    let total = Catalog::canonical().len();
    let samples = u64::from(samples.max(1));
    let per_frame = u64::from(per_frame.max(1));

    let mut coalescer = FrameCoalescer::new();
    let mut tracker = IndexTracker::default();
    let mut result = Sweep { samples: samples + 1, ..Sweep::default() };

    let mut step = 0u64;
    while step <= samples {
        let batch_end = (step + per_frame).min(samples + 1);
        for sample in step..batch_end {
            coalescer.submit(sample as f64 / samples as f64);
        }
        step = batch_end;

        result.frames += 1;
        if let Some(progress) = coalescer.take() {
            let index = policy.index_for_progress(progress, total);
            if let Some(index) = tracker.apply(index) {
                result.changes.push(index);
            }
        }
    }

    result.superseded = coalescer.superseded();
    result
}

fn walk(samples: u32, per_frame: u32, policy: ProgressPolicy, json: bool) -> Result<()> {
    print_state(&derive_timeline_state(0), json)?;

    let sweep = sweep(samples, per_frame, policy);
    for &index in &sweep.changes {
        print_state(&derive_timeline_state(index as i64), json)?;
    }

    info!(
        samples = sweep.samples,
        frames = sweep.frames,
        superseded = sweep.superseded,
        policy = policy.label(),
        "walk finished"
    );
    Ok(())
}

fn check() -> Result<()> {
    validate_canonical().context("fest catalog failed validation")?;

    let catalog = Catalog::canonical();
    println!(
        "ok: {} events ({} completed, {} upcoming)",
        catalog.len(),
        catalog.completed_events().len(),
        catalog.upcoming_events().len()
    );
    Ok(())
}

fn list() {
    for (index, event) in Catalog::canonical().events().iter().enumerate() {
        println!(
            "{index}  {:<14} {:<9} {}  {:>4}  {:<12}{}",
            event.id,
            event.fest.name(),
            event.year,
            rank_label(event.rank),
            event.phase.label(),
            if event.is_trophy_win { "  trophy" } else { "" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_walk_rejects_unbounded_samples() {
        assert!(Cli::try_parse_from(["timeline-cli", "walk", "--samples", "4294967295"]).is_err());
        assert!(Cli::try_parse_from(["timeline-cli", "walk", "--samples", "0"]).is_err());
        assert!(Cli::try_parse_from(["timeline-cli", "walk", "--samples", "1000000"]).is_ok());
    }

    #[test]
    fn test_sweep_visits_every_event_once() {
        let sweep = sweep(100, 4, ProgressPolicy::Linear);
        assert_eq!(sweep.changes, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(sweep.samples, 101);
        // 101 samples in batches of 4
        assert_eq!(sweep.frames, 26);
        assert_eq!(sweep.superseded, 101 - 26);
    }

    #[test]
    fn test_sweep_large_sample_count_terminates() {
        let sweep = sweep(MAX_SAMPLES as u32, u32::MAX, ProgressPolicy::Extended);
        assert_eq!(sweep.frames, 1);
        // One frame, only the last sample (progress 1.0) is mapped
        assert_eq!(sweep.changes, vec![7]);
    }
}
