//! Per-tick motion
//!
//! Moves the paddle (clamped) and the ball (unclamped). Bounces are the
//! collision pass's job and run after this in the same tick.

use super::state::GameState;

/// Advance the paddle by its velocity intent, then keep it on the canvas
pub fn move_paddle(state: &mut GameState) {
    let paddle = &mut state.paddle;
    paddle.pos.x += paddle.dx;
    paddle.clamp_to(state.config.canvas_width);
}

/// Advance the ball by its velocity
pub fn move_ball(state: &mut GameState) {
    state.ball.pos += state.ball.vel;
}
