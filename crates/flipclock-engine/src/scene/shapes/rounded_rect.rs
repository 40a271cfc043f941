use crate::coords::{CornerRadii, Rect};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Layer};

/// Rounded rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub color: Color,
}

impl RoundedRectCmd {
    #[inline]
    pub fn new(rect: Rect, radii: CornerRadii, color: Color) -> Self {
        Self { rect, radii, color }
    }
}

impl DrawList {
    /// Records a rounded rectangle draw command.
    #[inline]
    pub fn push_rounded_rect(&mut self, layer: Layer, rect: Rect, radii: CornerRadii, color: Color) {
        self.push(layer, DrawCmd::RoundedRect(RoundedRectCmd::new(rect, radii, color)));
    }
}
