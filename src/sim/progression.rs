//! Scoring and level progression
//!
//! Clearing the board restores every brick and speeds the ball up by a
//! signed delta: dx grows, dy shrinks. That makes rightward and downward
//! motion faster and leftward and upward motion slower. There is no cap.

use super::state::{GameEvent, GameState};

/// Score a destroyed brick, then level up if the board just emptied
pub fn award_brick(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.score += 1;
    check_board_clear(state, events);
}

/// Level up when the score lands on a whole number of boards
pub fn check_board_clear(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let board = state.brick_count();
    if board == 0 || state.score % board != 0 {
        return;
    }

    state.show_all_bricks();
    let inc = state.config.level_speed_increment;
    state.ball.vel.x += inc;
    state.ball.vel.y -= inc;
    state.level += 1;

    log::info!(
        "Board cleared at score {}: level {} (ball velocity {:?})",
        state.score,
        state.level,
        state.ball.vel
    );
    events.push(GameEvent::LevelUp { level: state.level });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use glam::Vec2;

    #[test]
    fn test_award_increments_score_only() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        let mut events = Vec::new();
        award_brick(&mut state, &mut events);
        assert_eq!(state.score, 1);
        assert_eq!(state.level, 1);
        assert_eq!(state.ball.vel, Vec2::new(4.0, -4.0));
        assert!(events.is_empty());
    }

    #[test]
    fn test_level_up_on_full_board() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        for brick in &mut state.bricks {
            brick.visible = false;
        }
        state.score = 71;
        let mut events = Vec::new();
        award_brick(&mut state, &mut events);

        assert_eq!(state.score, 72);
        assert_eq!(state.visible_bricks(), 72);
        assert_eq!(state.ball.vel, Vec2::new(6.0, -6.0));
        assert_eq!(state.level, 2);
        assert_eq!(events, vec![GameEvent::LevelUp { level: 2 }]);
    }

    #[test]
    fn test_level_up_delta_is_signed() {
        // Moving left and down: dx shrinks in magnitude, dy grows
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        state.ball.vel = Vec2::new(-4.0, 4.0);
        state.score = 144;
        check_board_clear(&mut state, &mut Vec::new());
        assert_eq!(state.ball.vel, Vec2::new(-2.0, 2.0));
    }

    #[test]
    fn test_level_up_repeats_every_board() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        let mut events = Vec::new();
        for _ in 0..144 {
            award_brick(&mut state, &mut events);
        }
        assert_eq!(state.level, 3);
        assert_eq!(state.ball.vel, Vec2::new(8.0, -8.0));
        assert_eq!(events.len(), 2);
    }
}
