//! Brick Breaker - A paddle, a ball and a wall of bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, lives, levels)
//! - `platform`: Frame driver plus the tick/presentation/input seams a host plugs into
//! - `config`: Startup configuration with validation

pub mod config;
pub mod error;
pub mod platform;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;

/// Game configuration defaults
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Brick grid. Row index advances horizontally, column index vertically.
    pub const BRICK_ROW_COUNT: u32 = 9;
    pub const BRICK_COLUMN_COUNT: u32 = 8;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 15.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_X: f32 = 45.0;
    pub const BRICK_OFFSET_Y: f32 = 60.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_DX: f32 = 4.0;
    pub const BALL_START_DY: f32 = -4.0; // Negative is up
    /// Ball spawns this far above the canvas bottom (resting on the paddle)
    pub const BALL_SPAWN_HEIGHT: f32 = 15.0;

    /// Paddle defaults - bottom edge flush with the canvas bottom
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 8.0;

    pub const STARTING_LIVES: u32 = 5;
    /// Added to dx and subtracted from dy on every board clear
    pub const LEVEL_SPEED_INCREMENT: f32 = 2.0;

    /// Native frame pacing
    pub const TARGET_FPS: u32 = 60;
}
