//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per render loop
//! - call `tick()` once per presented frame to obtain `FrameTime`
//!
//! Wall-clock reads live in the widget layer; this module only deals in
//! monotonic frame deltas.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
