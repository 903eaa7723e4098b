//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per frame, no wall-clock time
//! - Stable iteration order (bricks in construction order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod motion;
pub mod progression;
pub mod round;
pub mod state;
pub mod tick;

pub use collision::{ball_below_canvas, ball_overlaps_brick};
pub use input::{Key, KeyEvent, apply_key_event};
pub use state::{
    Ball, Brick, GameEvent, GamePhase, GameState, Paddle, PaddleFace, Wall, build_bricks,
};
pub use tick::{TickInput, tick};
