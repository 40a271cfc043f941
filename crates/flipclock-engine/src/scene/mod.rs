//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (named layers + insertion order)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod layer;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use layer::Layer;
pub use list::{DrawItem, DrawList};
