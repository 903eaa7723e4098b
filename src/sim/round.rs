//! Life loss and game over

use super::state::{GameEvent, GamePhase, GameState};

/// Take a life. The last one ends the game; otherwise ball and paddle go
/// back to their start positions with their velocities untouched.
pub fn lose_life(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);
    events.push(GameEvent::LifeLost {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!("Game over: score {}, level {}", state.score, state.level);
        events.push(GameEvent::GameOver {
            score: state.score,
            level: state.level,
        });
        return;
    }

    log::info!("Life lost, {} left", state.lives);
    let config = &state.config;
    state.ball.reset_position(config);
    state.paddle.reset_position(config);
}
