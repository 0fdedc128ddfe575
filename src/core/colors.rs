//! Display colour tokens for fests, phases and ranks
//!
//! Tokens are platform agnostic: the GUI turns them into `egui::Color32`
//! through `rgb()`, a host page gets them as CSS custom properties from
//! `css_custom_properties()`.

use serde::Serialize;

use super::catalog::{Fest, Phase};

/// Closed set of colours the timeline paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorToken {
    FestSaavan,
    FestMargazhi,
    FestParadox,
    PhaseContender,
    PhaseBreakthrough,
    PhaseDominance,
    Rank1,
    Rank2,
    Rank3,
    Rank4,
    /// Unknown result
    TextMuted,
}

impl ColorToken {
    pub const ALL: [ColorToken; 11] = [
        ColorToken::FestSaavan,
        ColorToken::FestMargazhi,
        ColorToken::FestParadox,
        ColorToken::PhaseContender,
        ColorToken::PhaseBreakthrough,
        ColorToken::PhaseDominance,
        ColorToken::Rank1,
        ColorToken::Rank2,
        ColorToken::Rank3,
        ColorToken::Rank4,
        ColorToken::TextMuted,
    ];

    /// Custom property name, e.g. `--fest-saavan`
    pub fn css_property(self) -> &'static str {
        match self {
            ColorToken::FestSaavan => "--fest-saavan",
            ColorToken::FestMargazhi => "--fest-margazhi",
            ColorToken::FestParadox => "--fest-paradox",
            ColorToken::PhaseContender => "--phase-contender",
            ColorToken::PhaseBreakthrough => "--phase-breakthrough",
            ColorToken::PhaseDominance => "--phase-dominance",
            ColorToken::Rank1 => "--rank-1",
            ColorToken::Rank2 => "--rank-2",
            ColorToken::Rank3 => "--rank-3",
            ColorToken::Rank4 => "--rank-4",
            ColorToken::TextMuted => "--text-muted",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorToken::FestSaavan => (64, 196, 170),        // teal
            ColorToken::FestMargazhi => (120, 140, 255),     // periwinkle
            ColorToken::FestParadox => (235, 90, 120),       // rose
            ColorToken::PhaseContender => (140, 150, 170),   // slate
            ColorToken::PhaseBreakthrough => (255, 184, 60), // amber
            ColorToken::PhaseDominance => (230, 60, 70),     // crimson
            ColorToken::Rank1 => (255, 200, 60),             // gold
            ColorToken::Rank2 => (192, 196, 206),            // silver
            ColorToken::Rank3 => (205, 127, 50),             // bronze
            ColorToken::Rank4 => (110, 110, 120),
            ColorToken::TextMuted => (80, 80, 80),
        }
    }
}

pub fn fest_color(fest: Fest) -> ColorToken {
    match fest {
        Fest::Saavan => ColorToken::FestSaavan,
        Fest::Margazhi => ColorToken::FestMargazhi,
        Fest::Paradox => ColorToken::FestParadox,
    }
}

pub fn phase_color(phase: Phase) -> ColorToken {
    match phase {
        Phase::Contender => ColorToken::PhaseContender,
        Phase::Breakthrough => ColorToken::PhaseBreakthrough,
        Phase::Dominance => ColorToken::PhaseDominance,
    }
}

/// Every token as a `:root` block of CSS custom properties.
pub fn css_custom_properties() -> String {
    let mut css = String::from(":root {\n");
    for token in ColorToken::ALL {
        let (r, g, b) = token.rgb();
        css.push_str(&format!("  {}: #{r:02x}{g:02x}{b:02x};\n", token.css_property()));
    }
    css.push_str("}\n");
    css
}

/// Rank 4 and below share one colour; `None` gets the muted fallback.
pub fn rank_color(rank: Option<u8>) -> ColorToken {
    match rank {
        None => ColorToken::TextMuted,
        Some(1) => ColorToken::Rank1,
        Some(2) => ColorToken::Rank2,
        Some(3) => ColorToken::Rank3,
        Some(_) => ColorToken::Rank4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fest_and_phase_colors_are_distinct() {
        let fests: HashSet<_> = Fest::ALL.iter().map(|&f| fest_color(f)).collect();
        assert_eq!(fests.len(), 3);
        let phases: HashSet<_> = Phase::ALL.iter().map(|&p| phase_color(p)).collect();
        assert_eq!(phases.len(), 3);
    }

    #[test]
    fn test_rank_color() {
        assert_eq!(rank_color(Some(1)), ColorToken::Rank1);
        assert_eq!(rank_color(Some(2)), ColorToken::Rank2);
        assert_eq!(rank_color(Some(3)), ColorToken::Rank3);
        assert_eq!(rank_color(Some(4)), ColorToken::Rank4);
        assert_eq!(rank_color(Some(17)), ColorToken::Rank4);
        assert_eq!(rank_color(None), ColorToken::TextMuted);
    }

    #[test]
    fn test_null_rank_fallback_differs_from_every_rank() {
        for rank in 0..=u8::MAX {
            assert_ne!(rank_color(Some(rank)), rank_color(None));
        }
    }

    #[test]
    fn test_tokens_have_unique_css_properties() {
        let names: HashSet<_> = ColorToken::ALL.iter().map(|t| t.css_property()).collect();
        assert_eq!(names.len(), ColorToken::ALL.len());
        assert_eq!(fest_color(Fest::Paradox).css_property(), "--fest-paradox");
    }

    #[test]
    fn test_css_custom_properties() {
        let css = css_custom_properties();
        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with("}\n"));
        assert!(css.contains("  --rank-1: #ffc83c;\n"));
        assert!(css.contains("  --text-muted: #505050;\n"));
        assert_eq!(css.lines().count(), ColorToken::ALL.len() + 2);
    }
}
