//! Presentation seam
//!
//! Presenters only ever see the state through a shared borrow, so drawing
//! cannot change the game.

use crate::sim::GameState;

pub trait Presenter {
    /// Render the current frame
    fn draw_frame(&mut self, state: &GameState);

    /// Called once when a game ends, after its final frame was drawn
    fn game_over(&mut self, state: &GameState);
}

/// Headless presenter: reports HUD changes through `log`
#[derive(Debug, Default)]
pub struct LogPresenter {
    last_hud: Option<(u64, u32, u32)>,
    games_over: u32,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Games that have ended while this presenter was attached
    pub fn games_over(&self) -> u32 {
        self.games_over
    }
}

impl Presenter for LogPresenter {
    fn draw_frame(&mut self, state: &GameState) {
        let hud = (state.score, state.lives, state.level);
        if self.last_hud != Some(hud) {
            log::debug!(
                "[tick {}] Score: {}  Lives: {}  Level: {}",
                state.time_ticks,
                state.score,
                state.lives,
                state.level
            );
            self.last_hud = Some(hud);
        }
    }

    fn game_over(&mut self, state: &GameState) {
        self.games_over += 1;
        log::info!(
            "GAME OVER after {} ticks: score {}, level {}",
            state.time_ticks,
            state.score,
            state.level
        );
    }
}
