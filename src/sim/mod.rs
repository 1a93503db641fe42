//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-counter timing only (no wall clock)
//! - Seeded RNG only
//! - Pipes kept in spawn order
//! - No rendering, audio or storage dependencies

pub mod bird;
pub mod collision;
pub mod input;
pub mod pipes;
pub mod score;
pub mod state;
pub mod tick;

pub use bird::Bird;
pub use collision::{Rect, circle_rect_overlap, hits_ceiling, hits_ground};
pub use input::{Action, handle_click};
pub use pipes::{PipeField, PipePair};
pub use score::Score;
pub use state::{Foreground, GameEvent, GamePhase, GameState};
pub use tick::tick;
