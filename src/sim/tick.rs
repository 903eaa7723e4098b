//! Per-frame simulation tick
//!
//! Core game loop step: apply queued input, move, then resolve collisions in
//! a fixed order.

use super::collision::{resolve_bottom_boundary, resolve_bricks, resolve_paddle, resolve_walls};
use super::input::{KeyEvent, apply_key_event};
use super::motion::{move_ball, move_paddle};
use super::state::{GameEvent, GameState};

/// Input gathered since the previous tick, applied in arrival order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub keys: Vec<KeyEvent>,
}

/// Advance the game by one frame and report what happened.
///
/// A finished game is left untouched.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_game_over() {
        return events;
    }

    for &event in &input.keys {
        apply_key_event(&mut state.paddle, event, state.config.strict_key_release);
    }

    state.time_ticks += 1;

    move_paddle(state);
    move_ball(state);

    resolve_walls(state, &mut events);
    resolve_paddle(state, &mut events);
    resolve_bricks(state, &mut events);
    resolve_bottom_boundary(state, &mut events);

    events
}
