//! Startup configuration
//!
//! Loaded once (JSON or defaults), validated, then frozen inside the game state.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Everything that shapes a game: canvas, brick grid, ball, paddle, rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Bricks ===
    /// Bricks along the horizontal axis
    pub brick_row_count: u32,
    /// Bricks along the vertical axis
    pub brick_column_count: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_x: f32,
    pub brick_offset_y: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_start_dx: f32,
    pub ball_start_dy: f32,
    /// Distance of the ball's spawn point above the canvas bottom
    pub ball_spawn_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,

    // === Rules ===
    pub starting_lives: u32,
    pub level_speed_increment: f32,
    /// Only direction-key releases stop the paddle (any release does otherwise)
    pub strict_key_release: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            brick_row_count: BRICK_ROW_COUNT,
            brick_column_count: BRICK_COLUMN_COUNT,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_x: BRICK_OFFSET_X,
            brick_offset_y: BRICK_OFFSET_Y,

            ball_radius: BALL_RADIUS,
            ball_start_dx: BALL_START_DX,
            ball_start_dy: BALL_START_DY,
            ball_spawn_height: BALL_SPAWN_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,

            starting_lives: STARTING_LIVES,
            level_speed_increment: LEVEL_SPEED_INCREMENT,
            strict_key_release: false,
        }
    }
}

impl GameConfig {
    /// Parse a JSON document; missing fields fall back to defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        // serde_json reads out-of-range numbers such as 1e39 as infinity
        let all = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("brick_padding", self.brick_padding),
            ("brick_offset_x", self.brick_offset_x),
            ("brick_offset_y", self.brick_offset_y),
            ("ball_radius", self.ball_radius),
            ("ball_start_dx", self.ball_start_dx),
            ("ball_start_dy", self.ball_start_dy),
            ("ball_spawn_height", self.ball_spawn_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("level_speed_increment", self.level_speed_increment),
        ];
        for (field, value) in all {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("ball_radius", self.ball_radius),
            ("ball_spawn_height", self.ball_spawn_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("brick_padding", self.brick_padding),
            ("brick_offset_x", self.brick_offset_x),
            ("brick_offset_y", self.brick_offset_y),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.brick_row_count == 0 || self.brick_column_count == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.brick_row_count,
                columns: self.brick_column_count,
            });
        }

        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }

        if self.paddle_width > self.canvas_width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                canvas: self.canvas_width,
            });
        }

        let (extent_x, extent_y) = self.grid_extent();
        if extent_x > self.canvas_width {
            return Err(ConfigError::GridOutOfBounds {
                axis: "x",
                extent: extent_x,
                canvas: self.canvas_width,
            });
        }
        if extent_y > self.canvas_height {
            return Err(ConfigError::GridOutOfBounds {
                axis: "y",
                extent: extent_y,
                canvas: self.canvas_height,
            });
        }

        if self.ball_spawn_height >= self.canvas_height {
            return Err(ConfigError::SpawnOutOfBounds {
                spawn: self.ball_spawn_height,
                canvas: self.canvas_height,
            });
        }

        Ok(())
    }

    /// Total bricks in the grid (one full board)
    pub fn brick_count(&self) -> u64 {
        u64::from(self.brick_row_count) * u64::from(self.brick_column_count)
    }

    /// Far edges of the brick grid, offsets included
    pub fn grid_extent(&self) -> (f32, f32) {
        let x = self.brick_offset_x + self.brick_row_count as f32 * self.brick_cell().x
            - self.brick_padding;
        let y = self.brick_offset_y + self.brick_column_count as f32 * self.brick_cell().y
            - self.brick_padding;
        (x, y)
    }

    /// Brick size plus padding
    pub fn brick_cell(&self) -> Vec2 {
        Vec2::new(
            self.brick_width + self.brick_padding,
            self.brick_height + self.brick_padding,
        )
    }

    /// Ball center at the start of every round
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(
            self.canvas_width / 2.0,
            self.canvas_height - self.ball_spawn_height,
        )
    }

    pub fn ball_start_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_start_dx, self.ball_start_dy)
    }

    /// Paddle top-left at the start of every round: centered, resting on the bottom
    pub fn paddle_start(&self) -> Vec2 {
        Vec2::new(
            self.canvas_width / 2.0 - self.paddle_width / 2.0,
            self.canvas_height - self.paddle_height,
        )
    }
}
