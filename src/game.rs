//! Frame driver
//!
//! Owns the simulation and the storage it persists into. The platform loop
//! calls `frame()` once per display refresh and `click()` per pointer event,
//! then forwards the returned events to audio.

use glam::Vec2;

use crate::highscores;
use crate::persistence::Storage;
use crate::sim::{Action, GameEvent, GameState, handle_click, tick};

pub struct Game<S: Storage> {
    pub state: GameState,
    storage: S,
}

impl<S: Storage> Game<S> {
    /// Start a session, reading the best score from `storage`
    pub fn new(seed: u64, storage: S) -> Self {
        let best = highscores::load_best(&storage);
        Self {
            state: GameState::new(seed, best),
            storage,
        }
    }

    /// Run one frame and return the events it raised
    pub fn frame(&mut self) -> Vec<GameEvent> {
        tick(&mut self.state);
        let events = self.state.drain_events();
        self.persist(&events);
        events
    }

    /// Dispatch a click at canvas coordinates
    pub fn click(&mut self, pos: Vec2) -> (Option<Action>, Vec<GameEvent>) {
        let action = handle_click(&mut self.state, pos);
        if let Some(action) = action {
            log::debug!("Click at ({:.0}, {:.0}) -> {:?}", pos.x, pos.y, action);
        }
        (action, self.state.drain_events())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::Scored { best, .. } = event {
                if let Err(e) = highscores::save_best(&mut self.storage, *best) {
                    log::warn!("Could not save best score: {}", e);
                }
            }
        }
    }
}
