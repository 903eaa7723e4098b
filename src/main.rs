//! Brick Breaker entry point
//!
//! Browser: draws to `#canvas`, reads the arrow keys, runs on
//! `requestAnimationFrame`. Native: headless autopilot run, logged.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use brick_breaker::GameConfig;
    use brick_breaker::platform::{FrameDriver, FrameStatus, Presenter};
    use brick_breaker::sim::GameState;

    const BALL_COLOR: &str = "#4285F4";
    const PADDLE_COLOR: &str = "#EA4335";
    const BRICK_COLOR: &str = "#FBBC04";
    const SCORE_COLOR: &str = "#EA4335";
    const LIVES_COLOR: &str = "#34A853";
    const HUD_FONT: &str = "20px Roboto";

    /// Draws the game onto a 2D canvas context
    struct CanvasPresenter {
        ctx: CanvasRenderingContext2d,
        width: f64,
        height: f64,
    }

    impl Presenter for CanvasPresenter {
        fn draw_frame(&mut self, state: &GameState) {
            let ctx = &self.ctx;
            ctx.clear_rect(0.0, 0.0, self.width, self.height);

            let ball = &state.ball;
            ctx.begin_path();
            let _ = ctx.arc(
                ball.pos.x as f64,
                ball.pos.y as f64,
                ball.radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.set_fill_style_str(BALL_COLOR);
            ctx.fill();
            ctx.close_path();

            let paddle = &state.paddle;
            ctx.set_fill_style_str(PADDLE_COLOR);
            ctx.fill_rect(
                paddle.pos.x as f64,
                paddle.pos.y as f64,
                paddle.width as f64,
                paddle.height as f64,
            );

            ctx.set_fill_style_str(BRICK_COLOR);
            for brick in state.bricks.iter().filter(|b| b.visible) {
                ctx.fill_rect(
                    brick.pos.x as f64,
                    brick.pos.y as f64,
                    brick.width as f64,
                    brick.height as f64,
                );
            }

            ctx.set_font(HUD_FONT);
            ctx.set_fill_style_str(SCORE_COLOR);
            let _ = ctx.fill_text(&format!("Score: {}", state.score), self.width - 200.0, 35.0);
            ctx.set_fill_style_str(LIVES_COLOR);
            let _ = ctx.fill_text(&format!("Lives: {}", state.lives), self.width - 100.0, 35.0);
        }

        fn game_over(&mut self, _state: &GameState) {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message("GAME OVER");
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        driver: FrameDriver,
        presenter: CanvasPresenter,
    }

    fn js_err(err: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&err.to_string())
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(js_err)?;
        log::info!("Brick Breaker starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no #canvas element")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let config = GameConfig {
            canvas_width: canvas.width() as f32,
            canvas_height: canvas.height() as f32,
            ..Default::default()
        };
        let driver = FrameDriver::new(&config).map_err(js_err)?;
        let presenter = CanvasPresenter {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        };

        let game = Rc::new(RefCell::new(Game { driver, presenter }));
        setup_input_handlers(&window, game.clone())?;
        request_animation_frame(game);

        log::info!("Brick Breaker running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().driver.input().key_down(&event.key());
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().driver.input().key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let Game { driver, presenter } = &mut *g;
            if driver.frame(presenter) == FrameStatus::Halted {
                // The alert has been dismissed; start a fresh game
                driver.restart();
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use brick_breaker::platform::{FrameDriver, FrameStatus, Presenter, TickSource};
    use brick_breaker::sim::{GameState, Key, KeyEvent};

    /// Plays by pressing and releasing the arrow keys, like a person would
    #[derive(Debug, Default)]
    pub struct Autopilot {
        held: Option<Key>,
    }

    impl Autopilot {
        /// Which key to hold this frame to get under the ball
        fn choose(state: &GameState) -> Option<Key> {
            let paddle = &state.paddle;
            let center = paddle.pos.x + paddle.width / 2.0;
            let offset = state.ball.pos.x - center;
            if offset > paddle.speed {
                Some(Key::Right)
            } else if offset < -paddle.speed {
                Some(Key::Left)
            } else {
                None
            }
        }

        pub fn steer(&mut self, driver: &mut FrameDriver) {
            let want = Self::choose(driver.state());
            if want == self.held {
                return;
            }
            if let Some(key) = self.held.take() {
                driver.input().push(KeyEvent::Up(key));
            }
            if let Some(key) = want {
                driver.input().push(KeyEvent::Down(key));
            }
            self.held = want;
        }
    }

    /// Play until the game ends or the tick source stops
    pub fn play(
        driver: &mut FrameDriver,
        ticks: &mut impl TickSource,
        presenter: &mut impl Presenter,
    ) -> u64 {
        let mut autopilot = Autopilot::default();
        let mut frames = 0;
        while ticks.next_tick() {
            frames += 1;
            autopilot.steer(driver);
            if driver.frame(presenter) == FrameStatus::Halted {
                break;
            }
        }
        frames
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use brick_breaker::GameConfig;
        use glam::Vec2;

        fn driver_with_ball_at(x: f32) -> FrameDriver {
            let mut state = GameState::new(&GameConfig::default()).unwrap();
            state.ball.pos = Vec2::new(x, 300.0);
            FrameDriver::from_state(state).unwrap()
        }

        #[test]
        fn test_autopilot_releases_before_switching() {
            let mut autopilot = Autopilot::default();

            let mut driver = driver_with_ball_at(600.0);
            autopilot.steer(&mut driver);
            autopilot.steer(&mut driver);
            assert_eq!(driver.input().drain().keys, vec![KeyEvent::Down(Key::Right)]);

            let mut driver = driver_with_ball_at(100.0);
            autopilot.steer(&mut driver);
            assert_eq!(
                driver.input().drain().keys,
                vec![KeyEvent::Up(Key::Right), KeyEvent::Down(Key::Left)]
            );

            // Lined up under the ball: just let go
            let mut driver = driver_with_ball_at(400.0);
            autopilot.steer(&mut driver);
            assert_eq!(driver.input().drain().keys, vec![KeyEvent::Up(Key::Left)]);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use brick_breaker::GameConfig;
    use brick_breaker::consts::TARGET_FPS;
    use brick_breaker::platform::{FixedRate, FrameDriver, LogPresenter, StepTicks};

    /// Headless runs stop here even if the autopilot never loses
    const MAX_FRAMES: u64 = 60 * 60 * 10;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brick Breaker (headless) starting...");

    let mut config_path = None;
    let mut realtime = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--realtime" => realtime = true,
            _ => config_path = Some(arg),
        }
    }

    let config = match config_path {
        Some(path) => GameConfig::load(&path).with_context(|| format!("loading config {path}"))?,
        None => GameConfig::default(),
    };

    let mut driver = FrameDriver::new(&config).context("invalid configuration")?;
    let mut presenter = LogPresenter::new();
    let frames = if realtime {
        let mut ticks = FixedRate::new(TARGET_FPS).with_limit(MAX_FRAMES);
        headless::play(&mut driver, &mut ticks, &mut presenter)
    } else {
        headless::play(&mut driver, &mut StepTicks::new(MAX_FRAMES), &mut presenter)
    };

    let state = driver.state();
    log::info!(
        "Finished after {} frames: score {}, level {}, lives {}",
        frames,
        state.score,
        state.level,
        state.lives
    );
    Ok(())
}
