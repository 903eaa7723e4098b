//! Collision detection and response
//!
//! Axis-aligned rectangles against one circle, tested with the circle's
//! bounding box. Responses are simple sign flips, not reflections. Every
//! comparison is exact; coordinates are pixel-scale.
//!
//! Passes run in a fixed order each tick (see [`super::tick`]): walls,
//! paddle, bricks, then the bottom boundary.

use super::progression;
use super::round;
use super::state::{Ball, Brick, GameEvent, GameState, PaddleFace, Wall};

/// Bounding-box overlap between the ball and a brick
pub fn ball_overlaps_brick(ball: &Ball, brick: &Brick) -> bool {
    ball.right() > brick.left()
        && ball.left() < brick.right()
        && ball.bottom() > brick.top()
        && ball.top() < brick.bottom()
}

/// Ball past the bottom of the canvas
pub fn ball_below_canvas(ball: &Ball, canvas_height: f32) -> bool {
    ball.bottom() > canvas_height
}

/// Bounce off the canvas edges.
///
/// The bottom edge bounces too; the life-loss pass later in the same tick
/// still sees the ball below the canvas and resets it.
pub fn resolve_walls(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let (width, height) = (state.config.canvas_width, state.config.canvas_height);
    let ball = &mut state.ball;

    if ball.right() > width || ball.left() < 0.0 {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::WallBounce(Wall::Side));
    }

    if ball.bottom() > height || ball.top() < 0.0 {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::WallBounce(Wall::TopBottom));
    }
}

/// Deflect off the paddle.
///
/// The top face is checked first and always sends the ball up, so a ball
/// that sank into the paddle cannot get stuck inside it. The edge checks
/// only match when the center is outside the paddle's span, giving corner
/// hits a sideways bounce.
pub fn resolve_paddle(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let paddle = &state.paddle;
    let ball = &mut state.ball;
    let below_top = ball.bottom() > paddle.top();

    if ball.pos.x > paddle.left() && ball.pos.x < paddle.right() && below_top {
        ball.vel.y = -ball.vel.y.abs();
        events.push(GameEvent::PaddleBounce(PaddleFace::Top));
    }

    if ball.pos.x < paddle.left() && ball.right() > paddle.left() && below_top {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::PaddleBounce(PaddleFace::LeftEdge));
    }

    if ball.left() < paddle.right() && ball.pos.x > paddle.right() && below_top {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::PaddleBounce(PaddleFace::RightEdge));
    }
}

/// Break every visible brick the ball overlaps.
///
/// No early exit: each hit flips dy again, so two hits in one tick cancel
/// out. A board clear mid-pass restores the bricks still to be visited.
pub fn resolve_bricks(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for i in 0..state.bricks.len() {
        let brick = &state.bricks[i];
        if !brick.visible || !ball_overlaps_brick(&state.ball, brick) {
            continue;
        }

        let (row, column) = (brick.row, brick.column);
        state.ball.vel.y = -state.ball.vel.y;
        state.bricks[i].visible = false;
        log::debug!("Brick ({}, {}) destroyed", row, column);
        events.push(GameEvent::BrickDestroyed { row, column });

        progression::award_brick(state, events);
    }
}

/// Take a life when the ball has left through the bottom
pub fn resolve_bottom_boundary(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if ball_below_canvas(&state.ball, state.config.canvas_height) {
        round::lose_life(state, events);
    }
}
