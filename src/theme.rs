//! Dark "trophy room" theme for the timeline view

use egui::Color32;

use crate::core::ColorToken;

/// Base palette; event-specific colours come from `ColorToken`
pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_DARK: Color32 = Color32::from_rgb(10, 10, 14);      // page
    pub const BG_CARD: Color32 = Color32::from_rgb(20, 20, 27);      // stat cards
    pub const BG_HOVER: Color32 = Color32::from_rgb(32, 32, 42);

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 175);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(80, 80, 80);

    // === Lines & Borders ===
    pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(44, 44, 56);

    /// Accent used for the house name and trophy glyphs
    pub const GOLD: Color32 = Color32::from_rgb(255, 200, 60);
}

pub fn token_color(token: ColorToken) -> Color32 {
    let (r, g, b) = token.rgb();
    Color32::from_rgb(r, g, b)
}

pub fn timeline_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_DARK;
    visuals.window_fill = BG_CARD;
    visuals.extreme_bg_color = BG_DARK;
    visuals.faint_bg_color = BG_CARD;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_CARD;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER_SUBTLE);

    visuals.widgets.inactive.bg_fill = BG_CARD;
    visuals.widgets.inactive.weak_bg_fill = BG_CARD;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER_SUBTLE);

    visuals.widgets.hovered.bg_fill = BG_HOVER;
    visuals.widgets.hovered.weak_bg_fill = BG_HOVER;
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, GOLD.gamma_multiply(0.6));

    visuals.selection.bg_fill = GOLD.gamma_multiply(0.35);
    visuals.selection.stroke = egui::Stroke::new(1.0, GOLD);

    // Flat cards
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_color_matches_rgb() {
        assert_eq!(token_color(ColorToken::Rank1), Color32::from_rgb(255, 200, 60));
        assert_eq!(token_color(ColorToken::TextMuted), colors::TEXT_MUTED);
    }
}
