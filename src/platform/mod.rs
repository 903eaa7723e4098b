//! Platform abstraction layer
//!
//! What a host (browser, native window, headless runner, test) plugs into
//! the simulation:
//! - Time/ticks: [`TickSource`] paces frames
//! - Input events: [`InputQueue`] buffers key transitions between frames
//! - Presentation: [`Presenter`] draws frames and hears about game over
//!
//! [`FrameDriver`] ties them together around a [`crate::sim::GameState`].

pub mod driver;
pub mod input;
pub mod present;
pub mod time;

pub use driver::{FrameDriver, FrameStatus};
pub use input::InputQueue;
pub use present::{LogPresenter, Presenter};
#[cfg(not(target_arch = "wasm32"))]
pub use time::FixedRate;
pub use time::{StepTicks, TickSource};
