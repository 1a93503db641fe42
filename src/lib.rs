//! Skyflap - flap a bird through gaps in moving pipes
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipes, collisions, game state)
//! - `game`: Frame driver tying the simulation to storage
//! - `renderer`: WebGPU sprite rendering
//! - `persistence`: Key-value storage backends
//! - `audio`: Fire-and-forget sound cues
//! - `hud`: What the DOM score overlay shows in each phase

pub mod audio;
pub mod game;
pub mod highscores;
pub mod hud;
pub mod persistence;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
///
/// All timing is in frames, all distances in logical canvas pixels.
pub mod consts {
    use std::f32::consts::PI;

    /// Logical canvas size
    pub const CANVAS_WIDTH: f32 = 320.0;
    pub const CANVAS_HEIGHT: f32 = 480.0;

    /// Ground strip drawn across the bottom of the canvas
    pub const FOREGROUND_WIDTH: f32 = 224.0;
    pub const FOREGROUND_HEIGHT: f32 = 112.0;
    pub const FOREGROUND_SPEED: f32 = 2.0;
    /// Top edge of the ground strip
    pub const GROUND_Y: f32 = CANVAS_HEIGHT - FOREGROUND_HEIGHT;

    /// Bird defaults
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_REST_Y: f32 = 75.0;
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 26.0;
    pub const BIRD_RADIUS: f32 = 12.0;
    pub const GRAVITY: f32 = 0.25;
    pub const JUMP: f32 = 4.2;

    /// Wing animation: frames per animation step
    pub const READY_FLAP_PERIOD: u64 = 10;
    pub const PLAYING_FLAP_PERIOD: u64 = 5;
    pub const ANIMATION_FRAMES: usize = 4;
    /// Frame shown while diving
    pub const DIVE_FRAME: usize = 1;

    pub const RISE_ROTATION: f32 = -25.0 * PI / 180.0;
    pub const DIVE_ROTATION: f32 = 90.0 * PI / 180.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 53.0;
    pub const PIPE_HEIGHT: f32 = 400.0;
    pub const PIPE_GAP: f32 = 85.0;
    /// Top pipe y is drawn from [MAX_UPWARD_OFFSET, 2 * MAX_UPWARD_OFFSET]
    pub const PIPE_MAX_UPWARD_OFFSET: f32 = -150.0;
    pub const PIPE_SPEED: f32 = 2.0;
    pub const PIPE_SPAWN_PERIOD: u64 = 100;

    /// Restart button on the game-over panel (inclusive bounds)
    pub const RESTART_BUTTON_X: f32 = 120.0;
    pub const RESTART_BUTTON_Y: f32 = 263.0;
    pub const RESTART_BUTTON_W: f32 = 83.0;
    pub const RESTART_BUTTON_H: f32 = 29.0;
}
