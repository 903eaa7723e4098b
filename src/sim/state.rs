//! Game state and core simulation types
//!
//! Everything the simulation touches lives in one [`GameState`]; components
//! receive it by `&mut` and nothing is global.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::ConfigError;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives exhausted; terminal until the state is rebuilt
    GameOver,
}

/// The ball. Radius is fixed for its lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    /// Per-tick displacement (negative y is up)
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.ball_start(),
            vel: config.ball_start_velocity(),
            radius: config.ball_radius,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Move back to the spawn point, keeping velocity
    pub fn reset_position(&mut self, config: &GameConfig) {
        self.pos = config.ball_start();
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner (y never changes during play)
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Velocity intent: one of -speed, 0, +speed
    pub dx: f32,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.paddle_start(),
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
            dx: 0.0,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    /// Keep the paddle fully on the canvas
    pub fn clamp_to(&mut self, canvas_width: f32) {
        if self.right() > canvas_width {
            self.pos.x = canvas_width - self.width;
        }
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        }
    }

    /// Move back to the start position; the velocity intent is left alone
    pub fn reset_position(&mut self, config: &GameConfig) {
        self.pos = config.paddle_start();
    }
}

/// A brick in the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Grid row (horizontal index)
    pub row: u32,
    /// Grid column (vertical index)
    pub column: u32,
    /// Top-left corner, fixed after creation
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub visible: bool,
}

impl Brick {
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }
}

/// Lay out the full grid, all visible, in construction order (row by row)
pub fn build_bricks(config: &GameConfig) -> Vec<Brick> {
    let cell = config.brick_cell();
    let offset = Vec2::new(config.brick_offset_x, config.brick_offset_y);
    let mut bricks = Vec::with_capacity(config.brick_count() as usize);
    for row in 0..config.brick_row_count {
        for column in 0..config.brick_column_count {
            bricks.push(Brick {
                row,
                column,
                pos: offset + Vec2::new(row as f32 * cell.x, column as f32 * cell.y),
                width: config.brick_width,
                height: config.brick_height,
                visible: true,
            });
        }
    }
    bricks
}

/// Which wall the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    /// Left or right wall (dx inverted)
    Side,
    /// Top or bottom wall (dy inverted)
    TopBottom,
}

/// Which part of the paddle deflected the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleFace {
    Top,
    LeftEdge,
    RightEdge,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce(Wall),
    PaddleBounce(PaddleFace),
    BrickDestroyed { row: u32, column: u32 },
    /// Board cleared; `level` is the level now being played
    LevelUp { level: u32 },
    LifeLost { lives_left: u32 },
    GameOver { score: u64, level: u32 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Frozen startup configuration
    pub config: GameConfig,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Sorted in construction order; collision checks iterate this order
    pub bricks: Vec<Brick>,
    pub score: u64,
    pub lives: u32,
    /// 1-based, +1 per board clear
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Build a fresh game, rejecting configurations the simulation cannot run
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// A brand-new game with this game's configuration
    pub fn restarted(&self) -> Self {
        Self::build(&self.config)
    }

    fn build(config: &GameConfig) -> Self {
        log::debug!(
            "New game: {}x{} bricks, {} lives",
            config.brick_row_count,
            config.brick_column_count,
            config.starting_lives
        );
        Self {
            config: config.clone(),
            phase: GamePhase::Playing,
            ball: Ball::new(config),
            paddle: Paddle::new(config),
            bricks: build_bricks(config),
            score: 0,
            lives: config.starting_lives,
            level: 1,
            time_ticks: 0,
        }
    }

    /// Number of bricks on a full board
    pub fn brick_count(&self) -> u64 {
        self.bricks.len() as u64
    }

    pub fn visible_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }

    /// Restore every brick
    pub fn show_all_bricks(&mut self) {
        for brick in &mut self.bricks {
            brick.visible = true;
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
