//! Frame driver
//!
//! One frame: drain input, tick once, draw. When a tick ends the game the
//! driver tells the presenter once and halts; nothing runs again until the
//! host calls [`FrameDriver::restart`].

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::sim::{GameEvent, GameState, tick};

use super::input::InputQueue;
use super::present::Presenter;
use super::time::TickSource;

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Halted,
}

#[derive(Debug)]
pub struct FrameDriver {
    state: GameState,
    input: InputQueue,
    halted: bool,
    last_events: Vec<GameEvent>,
}

impl FrameDriver {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::from_state(GameState::new(config)?)
    }

    /// Drive an existing state (a snapshot, or one set up by a test).
    /// The embedded config is validated and must match the brick list.
    pub fn from_state(state: GameState) -> Result<Self, ConfigError> {
        state.config.validate()?;
        let expected = state.config.brick_count();
        if state.brick_count() != expected {
            return Err(ConfigError::BrickCountMismatch {
                expected,
                found: state.brick_count(),
            });
        }

        let halted = state.is_game_over();
        Ok(Self {
            state,
            input: InputQueue::new(),
            halted,
            last_events: Vec::new(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Where hosts push key events between frames
    pub fn input(&mut self) -> &mut InputQueue {
        &mut self.input
    }

    /// Events produced by the most recent frame
    pub fn last_events(&self) -> &[GameEvent] {
        &self.last_events
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Run a single frame
    pub fn frame(&mut self, presenter: &mut impl Presenter) -> FrameStatus {
        if self.halted {
            return FrameStatus::Halted;
        }

        let input = self.input.drain();
        self.last_events = tick(&mut self.state, &input);
        presenter.draw_frame(&self.state);

        if self.state.is_game_over() {
            self.halted = true;
            log::info!("Frame loop halted at tick {}", self.state.time_ticks);
            presenter.game_over(&self.state);
            return FrameStatus::Halted;
        }

        FrameStatus::Continue
    }

    /// Run frames until the tick source runs dry or the game ends.
    /// Returns the number of frames run.
    pub fn run(&mut self, ticks: &mut impl TickSource, presenter: &mut impl Presenter) -> u64 {
        let mut frames = 0;
        while !self.halted && ticks.next_tick() {
            frames += 1;
            if self.frame(presenter) == FrameStatus::Halted {
                break;
            }
        }
        frames
    }

    /// Throw the current game away and start over with the same configuration
    pub fn restart(&mut self) {
        self.state = self.state.restarted();
        self.input.clear();
        self.last_events.clear();
        self.halted = false;
        log::info!("Game restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::time::StepTicks;
    use crate::sim::{GamePhase, Key, KeyEvent};
    use glam::Vec2;

    /// Records what the driver asked it to do
    #[derive(Default)]
    struct Recorder {
        frames: Vec<(u64, u64, u32)>,
        game_overs: Vec<u64>,
    }

    impl Presenter for Recorder {
        fn draw_frame(&mut self, state: &GameState) {
            self.frames
                .push((state.time_ticks, state.score, state.lives));
        }

        fn game_over(&mut self, state: &GameState) {
            self.game_overs.push(state.score);
        }
    }

    /// One life left and the ball about to fall out past the paddle
    fn doomed_driver() -> FrameDriver {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        state.lives = 1;
        state.score = 12;
        state.ball.pos = Vec2::new(100.0, 588.0);
        state.ball.vel = Vec2::new(4.0, 4.0);
        FrameDriver::from_state(state).unwrap()
    }

    #[test]
    fn test_frame_ticks_and_draws() {
        let mut driver = FrameDriver::new(&GameConfig::default()).unwrap();
        let mut recorder = Recorder::default();
        assert_eq!(driver.frame(&mut recorder), FrameStatus::Continue);
        assert_eq!(driver.frame(&mut recorder), FrameStatus::Continue);
        assert_eq!(recorder.frames, vec![(1, 0, 5), (2, 0, 5)]);
        assert!(recorder.game_overs.is_empty());
    }

    #[test]
    fn test_queued_input_reaches_next_tick() {
        let mut driver = FrameDriver::new(&GameConfig::default()).unwrap();
        let mut recorder = Recorder::default();
        driver.input().key_down("Right");
        driver.frame(&mut recorder);
        assert_eq!(driver.state().paddle.pos.x, 368.0);
        assert!(driver.input().is_empty());

        driver.input().push(KeyEvent::Up(Key::Left));
        driver.frame(&mut recorder);
        assert_eq!(driver.state().paddle.pos.x, 368.0);
    }

    #[test]
    fn test_game_over_notifies_once_and_halts() {
        let mut driver = doomed_driver();
        let mut recorder = Recorder::default();
        let mut ticks = StepTicks::new(100);

        let frames = driver.run(&mut ticks, &mut recorder);

        assert_eq!(frames, 1);
        assert_eq!(ticks.remaining(), 99);
        assert_eq!(driver.state().lives, 0);
        assert_eq!(driver.state().phase, GamePhase::GameOver);
        assert_eq!(recorder.game_overs, vec![12]);
        assert_eq!(recorder.frames.len(), 1);
        assert!(driver.is_halted());
        assert!(
            driver
                .last_events()
                .contains(&GameEvent::GameOver { score: 12, level: 1 })
        );

        // Nothing else runs while halted
        assert_eq!(driver.frame(&mut recorder), FrameStatus::Halted);
        assert_eq!(driver.run(&mut ticks, &mut recorder), 0);
        assert_eq!(ticks.remaining(), 99);
        assert_eq!(recorder.game_overs.len(), 1);
        assert_eq!(recorder.frames.len(), 1);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut driver = doomed_driver();
        let mut recorder = Recorder::default();
        driver.input().key_down("Left");
        driver.frame(&mut recorder);
        assert!(driver.is_halted());

        driver.input().key_down("Left");
        driver.restart();

        assert!(!driver.is_halted());
        assert!(driver.input().is_empty());
        assert!(driver.last_events().is_empty());
        let state = driver.state();
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 5);
        assert_eq!(state.visible_bricks(), 72);
        assert_eq!(state.paddle.dx, 0.0);
        assert_eq!(driver.frame(&mut recorder), FrameStatus::Continue);
    }

    #[test]
    fn test_run_stops_when_ticks_run_out() {
        let mut driver = FrameDriver::new(&GameConfig::default()).unwrap();
        let mut recorder = Recorder::default();
        let frames = driver.run(&mut StepTicks::new(10), &mut recorder);
        assert_eq!(frames, 10);
        assert_eq!(driver.state().time_ticks, 10);
        assert!(!driver.is_halted());
    }

    #[test]
    fn test_finished_snapshot_starts_halted() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        state.phase = GamePhase::GameOver;
        let mut driver = FrameDriver::from_state(state).unwrap();
        let mut recorder = Recorder::default();
        assert_eq!(driver.frame(&mut recorder), FrameStatus::Halted);
        assert!(recorder.frames.is_empty());
        assert!(recorder.game_overs.is_empty());
    }

    #[test]
    fn test_snapshot_is_validated() {
        let json = serde_json::to_string(&GameState::new(&GameConfig::default()).unwrap()).unwrap();

        let mut state: GameState = serde_json::from_str(&json).unwrap();
        state.bricks.clear();
        assert!(matches!(
            FrameDriver::from_state(state),
            Err(ConfigError::BrickCountMismatch {
                expected: 72,
                found: 0
            })
        ));

        let mut state: GameState = serde_json::from_str(&json).unwrap();
        state.config.brick_row_count = 0;
        assert!(matches!(
            FrameDriver::from_state(state),
            Err(ConfigError::EmptyGrid { .. })
        ));

        let state: GameState = serde_json::from_str(&json).unwrap();
        assert!(FrameDriver::from_state(state).is_ok());
    }

    #[test]
    fn test_log_presenter_counts_games() {
        let mut driver = doomed_driver();
        let mut presenter = crate::platform::LogPresenter::new();
        driver.run(&mut StepTicks::new(5), &mut presenter);
        assert_eq!(presenter.games_over(), 1);
    }
}
