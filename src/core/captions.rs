//! Display copy for the timeline widgets

use super::catalog::Phase;

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Contender => "Contender",
            Phase::Breakthrough => "Breakthrough",
            Phase::Dominance => "Dominance",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Phase::Contender => "Building momentum",
            Phase::Breakthrough => "First trophy claimed",
            Phase::Dominance => "Sustained excellence",
        }
    }
}

/// Subtitle under the streak meter. Nothing is shown for a zero streak.
pub fn streak_caption(streak: usize) -> Option<&'static str> {
    match streak {
        0 => None,
        1 => Some("The beginning"),
        2 => Some("Building momentum"),
        3 => Some("Unstoppable"),
        _ => Some("Legendary streak"),
    }
}

/// Subtitle under the trophy counter. Nothing is shown with no trophies.
pub fn trophy_caption(trophies: usize) -> Option<String> {
    match trophies {
        0 => None,
        1 => Some("Champion".to_string()),
        2 => Some("Back-to-Back Champions".to_string()),
        n => Some(format!("{n}x Champions")),
    }
}

pub fn rank_label(rank: Option<u8>) -> String {
    match rank {
        Some(rank) => format!("#{rank}"),
        None => "TBD".to_string(),
    }
}
