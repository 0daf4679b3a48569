//! Platform abstraction layer
//!
//! Seams between the game loop and the outside world:
//! - Time (wall clock for gameplay timestamps)
//! - Frame scheduling (animation frames or a headless tick source)
//! - HUD readouts and control buttons

pub mod clock;
pub mod hud;
pub mod ticks;

pub use clock::{Clock, ManualClock};
#[cfg(not(target_arch = "wasm32"))]
pub use clock::SystemClock;
#[cfg(target_arch = "wasm32")]
pub use clock::DateClock;
pub use hud::{ButtonState, ButtonStates, HudSink, NullHud, Readout};
pub use ticks::{HeadlessTicks, TickSource};
