//! Pointer-click dispatch
//!
//! A click means something different in each phase: start the run, flap,
//! or (only on the restart button) go back to Ready.

use glam::Vec2;

use super::collision::Rect;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Flap,
    Restart,
}

/// Restart button on the game-over panel
pub const RESTART_BUTTON: Rect = Rect::new(
    RESTART_BUTTON_X,
    RESTART_BUTTON_Y,
    RESTART_BUTTON_W,
    RESTART_BUTTON_H,
);

/// Apply a click at canvas position `pos`
///
/// Returns `None` when the click has no effect in the current phase.
pub fn handle_click(state: &mut GameState, pos: Vec2) -> Option<Action> {
    match state.phase {
        GamePhase::Ready => {
            state.set_phase(GamePhase::Playing);
            state.events.push(GameEvent::Started);
            Some(Action::Start)
        }
        GamePhase::Playing => {
            state.bird.flap();
            state.events.push(GameEvent::Flapped);
            Some(Action::Flap)
        }
        GamePhase::Over => {
            if !RESTART_BUTTON.contains(pos) {
                return None;
            }
            state.pipes.reset();
            state.bird.speed_reset();
            state.score.reset();
            state.set_phase(GamePhase::Ready);
            Some(Action::Restart)
        }
    }
}
