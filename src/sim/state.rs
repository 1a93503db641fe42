//! Game state and core simulation types
//!
//! `GameState` is the per-session aggregate. Entities never reach into it
//! directly: the tick hands each one the pieces it may read or mutate.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::bird::Bird;
use super::pipes::PipeField;
use super::score::Score;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Bird hovers in place, waiting for the first click
    #[default]
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended; physics frozen until a restart click
    Over,
}

impl GamePhase {
    /// Whether `self -> next` is one of the legal transitions
    ///
    /// Staying in the same phase is always allowed (no-op).
    pub fn can_transition_to(self, next: GamePhase) -> bool {
        use GamePhase::*;
        matches!(
            (self, next),
            (Ready, Ready)
                | (Playing, Playing)
                | (Over, Over)
                | (Ready, Playing)
                | (Playing, Over)
                | (Over, Ready)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Ready => "ready",
            GamePhase::Playing => "playing",
            GamePhase::Over => "over",
        }
    }
}

/// Side effects raised by the simulation for collaborators (audio, storage)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ready -> Playing
    Started,
    /// Bird flapped
    Flapped,
    /// Bird struck a pipe
    Hit,
    /// Bird struck the ground or the ceiling
    Died,
    /// A pipe pair was passed; `best` should be persisted
    Scored { value: u32, best: u32 },
}

/// Scrolling ground strip
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Foreground {
    pub x: f32,
}

impl Foreground {
    /// Scroll left while playing, wrapping every half-width
    pub fn update(&mut self, phase: GamePhase) {
        if phase == GamePhase::Playing {
            self.x = (self.x - FOREGROUND_SPEED) % (FOREGROUND_WIDTH / 2.0);
        }
    }
}

/// Complete session state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Frame counter, incremented once per tick
    pub frames: u64,
    /// Current phase
    pub phase: GamePhase,
    pub bird: Bird,
    pub pipes: PipeField,
    pub foreground: Foreground,
    pub score: Score,
    /// Pipe placement RNG
    pub rng: Pcg32,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed and a previously stored best score
    pub fn new(seed: u64, best: u32) -> Self {
        Self {
            frames: 0,
            phase: GamePhase::Ready,
            bird: Bird::default(),
            pipes: PipeField::default(),
            foreground: Foreground::default(),
            score: Score::with_best(best),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Move to `next` if the transition is legal; returns whether the phase changed
    pub fn set_phase(&mut self, next: GamePhase) -> bool {
        if self.phase == next || !self.phase.can_transition_to(next) {
            return false;
        }
        log::info!("Phase {} -> {}", self.phase.as_str(), next.as_str());
        self.phase = next;
        true
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_ready() {
        let state = GameState::new(1, 7);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.frames, 0);
        assert_eq!(state.score.value, 0);
        assert_eq!(state.score.best, 7);
        assert!(state.pipes.pairs.is_empty());
    }

    #[test]
    fn test_legal_transitions() {
        use GamePhase::*;
        assert!(Ready.can_transition_to(Playing));
        assert!(Playing.can_transition_to(Over));
        assert!(Over.can_transition_to(Ready));

        assert!(!Ready.can_transition_to(Over));
        assert!(!Playing.can_transition_to(Ready));
        assert!(!Over.can_transition_to(Playing));
    }

    #[test]
    fn test_set_phase_rejects_illegal() {
        let mut state = GameState::new(1, 0);
        assert!(!state.set_phase(GamePhase::Over));
        assert_eq!(state.phase, GamePhase::Ready);

        assert!(state.set_phase(GamePhase::Playing));
        assert!(!state.set_phase(GamePhase::Playing));
        assert!(state.set_phase(GamePhase::Over));
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_foreground_scrolls_only_while_playing() {
        let mut fg = Foreground::default();
        fg.update(GamePhase::Ready);
        assert_eq!(fg.x, 0.0);

        fg.update(GamePhase::Playing);
        assert_eq!(fg.x, -2.0);

        // Wraps at half the strip width
        for _ in 0..55 {
            fg.update(GamePhase::Playing);
        }
        assert!(fg.x > -FOREGROUND_WIDTH / 2.0 && fg.x <= 0.0);

        let before = fg.x;
        fg.update(GamePhase::Over);
        assert_eq!(fg.x, before);
    }
}
