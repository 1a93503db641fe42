//! DOM HUD contents
//!
//! The browser driver only copies these strings into elements; what is
//! shown in each phase is decided here.

use crate::sim::{GamePhase, GameState};

/// Class every HUD element carries for positioning
pub const OVERLAY_CLASS: &str = "overlay";

/// Full class attribute for an overlay element
pub fn overlay_class(visible: bool) -> &'static str {
    if visible { "overlay" } else { "overlay hidden" }
}

/// Text and class of each HUD element for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudView {
    pub score_text: String,
    pub score_class: &'static str,
    pub game_over_class: &'static str,
    /// Final and best score, only while Over
    pub final_scores: Option<(String, String)>,
}

impl HudView {
    pub fn new(state: &GameState) -> Self {
        let score = &state.score;
        let over = state.phase == GamePhase::Over;
        Self {
            score_text: score.value.to_string(),
            score_class: overlay_class(state.phase == GamePhase::Playing),
            game_over_class: overlay_class(over),
            final_scores: over.then(|| (score.value.to_string(), score.best.to_string())),
        }
    }
}
