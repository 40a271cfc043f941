//! Flipclock engine crate.
//!
//! Renderer-agnostic primitives shared by the widget layer: geometry, paint,
//! the recorded draw stream, frame timing, and logging bootstrap. Nothing in
//! here touches a window or a GPU — consumers take the `DrawList` produced
//! each frame and rasterize it however they like.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod time;
