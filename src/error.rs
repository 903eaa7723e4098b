//! Configuration errors
//!
//! The simulation itself never fails once built; everything that can go
//! wrong is caught while loading and validating a [`crate::GameConfig`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number (got {value})")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("brick grid must have at least one row and one column (got {rows}x{columns})")]
    EmptyGrid { rows: u32, columns: u32 },

    #[error("starting lives must be at least 1")]
    NoLives,

    #[error("paddle width {paddle} does not fit a canvas {canvas} wide")]
    PaddleTooWide { paddle: f32, canvas: f32 },

    #[error("brick grid spans {extent} along {axis} but the canvas is only {canvas}")]
    GridOutOfBounds {
        axis: &'static str,
        extent: f32,
        canvas: f32,
    },

    #[error("ball spawn height {spawn} must lie inside a canvas {canvas} tall")]
    SpawnOutOfBounds { spawn: f32, canvas: f32 },

    #[error("snapshot holds {found} bricks but its config lays out {expected}")]
    BrickCountMismatch { expected: u64, found: u64 },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
