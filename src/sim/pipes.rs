//! Pipe obstacles: spawning, scrolling, removal, collision and scoring

use std::collections::VecDeque;

use rand::Rng;

use super::bird::Bird;
use super::collision::{Rect, circle_rect_overlap};
use super::score::Score;
use super::state::{GameEvent, GamePhase};
use crate::consts::*;

/// A top + bottom pipe sharing one horizontal position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipePair {
    /// Left edge
    pub x: f32,
    /// Top edge of the top pipe (always negative)
    pub y: f32,
}

impl PipePair {
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, self.y, PIPE_WIDTH, PIPE_HEIGHT)
    }

    pub fn bottom_y(&self) -> f32 {
        self.y + PIPE_HEIGHT + PIPE_GAP
    }

    pub fn bottom_rect(&self) -> Rect {
        Rect::new(self.x, self.bottom_y(), PIPE_WIDTH, PIPE_HEIGHT)
    }

    /// Fully past the left edge of the screen
    pub fn is_offscreen(&self) -> bool {
        self.x + PIPE_WIDTH <= 0.0
    }

    pub fn collides(&self, bird: &Bird) -> bool {
        circle_rect_overlap(bird.pos, bird.radius, &self.top_rect())
            || circle_rect_overlap(bird.pos, bird.radius, &self.bottom_rect())
    }
}

/// All pipe pairs on screen, oldest (leftmost) first
#[derive(Debug, Clone, Default)]
pub struct PipeField {
    pub pairs: VecDeque<PipePair>,
}

impl PipeField {
    /// Append a pair at the right edge with a random vertical offset
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) {
        let y = PIPE_MAX_UPWARD_OFFSET * (rng.random::<f32>() + 1.0);
        log::debug!("Spawning pipe pair at y={:.1}", y);
        self.pairs.push_back(PipePair { x: CANVAS_WIDTH, y });
    }

    /// Advance one frame; no-op unless playing
    ///
    /// Each pair is collision-tested at its current position and then moved.
    /// Pairs leaving the screen are removed from the front and scored.
    pub fn update<R: Rng>(
        &mut self,
        frames: u64,
        phase: &mut GamePhase,
        bird: &Bird,
        score: &mut Score,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) {
        if *phase != GamePhase::Playing {
            return;
        }

        if frames % PIPE_SPAWN_PERIOD == 0 {
            self.spawn(rng);
        }

        for pair in self.pairs.iter_mut() {
            if pair.collides(bird) && *phase != GamePhase::Over {
                log::info!("Bird hit pipe at x={:.1}", pair.x);
                *phase = GamePhase::Over;
                events.push(GameEvent::Hit);
            }
            pair.x -= PIPE_SPEED;
        }

        while self.pairs.front().is_some_and(PipePair::is_offscreen) {
            self.pairs.pop_front();
            let best = score.register_pass();
            log::debug!("Pipe passed, score {} (best {})", score.value, best);
            events.push(GameEvent::Scored {
                value: score.value,
                best,
            });
        }
    }

    /// Clear all pipes (restart)
    pub fn reset(&mut self) {
        self.pairs.clear();
    }
}
