//! The player's bird: flap impulse, gravity, wing animation

use glam::Vec2;

use super::collision::{hits_ceiling, hits_ground};
use super::state::{GameEvent, GamePhase};
use crate::consts::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Center position; x never changes
    pub pos: Vec2,
    /// Vertical speed (positive = falling)
    pub speed: f32,
    /// Cosmetic tilt in radians, derived from speed
    pub rotation: f32,
    /// Index into the wing animation sequence
    pub frame: usize,
    pub radius: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BIRD_X, BIRD_REST_Y),
            speed: 0.0,
            rotation: 0.0,
            frame: 0,
            radius: BIRD_RADIUS,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
        }
    }
}

impl Bird {
    /// Upward impulse. Callers only flap while playing.
    pub fn flap(&mut self) {
        self.speed = -JUMP;
    }

    /// Zero the vertical speed (restart)
    pub fn speed_reset(&mut self) {
        self.speed = 0.0;
    }

    /// Advance one frame
    ///
    /// On ground or ceiling contact while playing, the phase moves to `Over`
    /// and a `Died` event is pushed.
    pub fn update(
        &mut self,
        frames: u64,
        ground_y: f32,
        phase: &mut GamePhase,
        events: &mut Vec<GameEvent>,
    ) {
        let period = match *phase {
            GamePhase::Ready => READY_FLAP_PERIOD,
            GamePhase::Playing => PLAYING_FLAP_PERIOD,
            GamePhase::Over => return,
        };

        if frames % period == 0 {
            self.frame += 1;
        }
        self.frame %= ANIMATION_FRAMES;

        if *phase == GamePhase::Ready {
            self.pos.y = BIRD_REST_Y;
            self.rotation = 0.0;
            return;
        }

        self.speed += GRAVITY;
        self.pos.y += self.speed;

        let half_height = self.height / 2.0;
        if hits_ground(self.pos.y, half_height, ground_y) {
            self.pos.y = ground_y - half_height;
            self.die(phase, events);
        } else if hits_ceiling(self.pos.y, half_height) {
            self.die(phase, events);
        }

        if self.speed >= JUMP {
            self.rotation = DIVE_ROTATION;
            self.frame = DIVE_FRAME;
        } else {
            self.rotation = RISE_ROTATION;
        }
    }

    fn die(&self, phase: &mut GamePhase, events: &mut Vec<GameEvent>) {
        if *phase != GamePhase::Over {
            log::info!("Bird died at y={:.1}", self.pos.y);
            *phase = GamePhase::Over;
            events.push(GameEvent::Died);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(bird: &mut Bird, frames: u64, phase: &mut GamePhase) -> Vec<GameEvent> {
        let mut events = Vec::new();
        bird.update(frames, GROUND_Y, phase, &mut events);
        events
    }

    #[test]
    fn test_ready_pins_bird() {
        let mut bird = Bird::default();
        bird.pos.y = 200.0;
        bird.rotation = 1.0;
        let mut phase = GamePhase::Ready;

        for f in 1..=50 {
            assert!(step(&mut bird, f, &mut phase).is_empty());
            assert_eq!(bird.pos.y, BIRD_REST_Y);
            assert_eq!(bird.rotation, 0.0);
        }
        assert_eq!(phase, GamePhase::Ready);
    }

    #[test]
    fn test_flap_then_update() {
        let mut bird = Bird::default();
        let mut phase = GamePhase::Playing;
        bird.flap();
        assert_eq!(bird.speed, -JUMP);

        let y0 = bird.pos.y;
        step(&mut bird, 1, &mut phase);
        assert!((bird.speed - (-JUMP + GRAVITY)).abs() < 1e-6);
        assert!((bird.pos.y - (y0 - (JUMP - GRAVITY))).abs() < 1e-4);
        assert_eq!(bird.rotation, RISE_ROTATION);
    }

    #[test]
    fn test_ground_boundary_clamps_and_dies() {
        let mut bird = Bird::default();
        let mut phase = GamePhase::Playing;
        bird.pos.y = GROUND_Y - bird.height / 2.0;

        let events = step(&mut bird, 1, &mut phase);
        assert_eq!(bird.pos.y, GROUND_Y - bird.height / 2.0);
        assert_eq!(phase, GamePhase::Over);
        assert_eq!(events, vec![GameEvent::Died]);
    }

    #[test]
    fn test_ceiling_is_fatal() {
        let mut bird = Bird::default();
        let mut phase = GamePhase::Playing;
        bird.pos.y = 14.0;
        bird.flap();

        let events = step(&mut bird, 1, &mut phase);
        assert_eq!(phase, GamePhase::Over);
        assert_eq!(events, vec![GameEvent::Died]);
    }

    #[test]
    fn test_over_freezes_bird() {
        let mut bird = Bird::default();
        bird.pos.y = 200.0;
        bird.speed = 3.0;
        bird.frame = 2;
        let mut phase = GamePhase::Over;

        for f in 0..20 {
            assert!(step(&mut bird, f, &mut phase).is_empty());
        }
        assert_eq!(bird.pos.y, 200.0);
        assert_eq!(bird.speed, 3.0);
        assert_eq!(bird.frame, 2);
    }

    #[test]
    fn test_dive_forces_frame_and_rotation() {
        let mut bird = Bird::default();
        let mut phase = GamePhase::Playing;
        bird.pos.y = 150.0;
        bird.speed = JUMP;

        step(&mut bird, 3, &mut phase);
        assert_eq!(bird.rotation, DIVE_ROTATION);
        assert_eq!(bird.frame, DIVE_FRAME);
    }

    #[test]
    fn test_animation_slower_when_ready() {
        let mut ready = Bird::default();
        let mut playing = Bird::default();
        playing.pos.y = 150.0;
        let mut ready_phase = GamePhase::Ready;
        let mut playing_phase = GamePhase::Playing;

        let mut ready_steps = 0;
        let mut playing_steps = 0;
        for f in 1..=20 {
            let r = ready.frame;
            step(&mut ready, f, &mut ready_phase);
            if ready.frame != r {
                ready_steps += 1;
            }
            // Keep the playing bird rising so the dive override never kicks in
            playing.flap();
            let p = playing.frame;
            step(&mut playing, f, &mut playing_phase);
            if playing.frame != p {
                playing_steps += 1;
            }
        }
        assert_eq!(ready_steps, 2);
        assert_eq!(playing_steps, 4);
    }

    #[test]
    fn test_frame_cycles_modulo() {
        let mut bird = Bird::default();
        let mut phase = GamePhase::Ready;
        for f in 1..=40 {
            step(&mut bird, f, &mut phase);
            assert!(bird.frame < ANIMATION_FRAMES);
        }
        // 4 steps of 10 frames wrap back to the start
        assert_eq!(bird.frame, 0);
    }
}
