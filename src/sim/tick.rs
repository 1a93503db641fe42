//! Per-frame simulation tick
//!
//! Core game loop step. Called once per rendered frame by an external driver.

use super::state::GameState;
use crate::consts::GROUND_Y;

/// Advance the game state by one frame
///
/// Order: frame counter, bird, pipes, foreground. The bird may end the run
/// before the pipes move, in which case the pipes stay frozen this frame.
pub fn tick(state: &mut GameState) {
    state.frames += 1;

    let GameState {
        frames,
        phase,
        bird,
        pipes,
        foreground,
        score,
        rng,
        events,
        ..
    } = state;

    bird.update(*frames, GROUND_Y, phase, events);
    pipes.update(*frames, phase, bird, score, rng, events);
    foreground.update(*phase);
}
