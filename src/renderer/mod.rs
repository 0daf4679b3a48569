//! Rendering module
//!
//! The scene painter draws through the `Canvas` trait: a Canvas 2D context
//! in the browser, a recording `DrawList` everywhere else.

pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod draw_list;
pub mod scene;

pub use canvas::{Canvas, Paint, Rgba, TextAlign};
#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2d;
pub use draw_list::{DrawCommand, DrawList};
pub use scene::{FrameContext, render};
