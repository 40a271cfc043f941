//! Paint model shared between the widget layer and renderers.
//!
//! Scope: color representation only (linear premultiplied alpha). The flip
//! clock paints solid fills exclusively, so there is no paint-source enum;
//! geometry types remain in `coords`.

mod color;

pub use color::Color;
