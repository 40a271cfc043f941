use flipclock_engine::coords::{Rect, Vec2};
use flipclock_engine::paint::Color;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// Dot diameter as a viewport-width percentage.
const DOT_DIAMETER_VW: f32 = 3.0;

/// Edge-to-edge gap between the two dots as a viewport-height percentage.
const DOT_GAP_VH: f32 = 8.0;

/// Column height as a viewport-height percentage.
const HEIGHT_VH: f32 = 60.0;

/// The colon between clock fields: two stacked dots.
pub struct Separator {
    dot_color: Color,
}

impl Separator {
    pub fn new() -> Self {
        Self {
            dot_color: Color::from_srgb_u8(0x1a, 0x1a, 0x1a, 0xff),
        }
    }

    pub fn dot_color(mut self, v: Color) -> Self {
        self.dot_color = v;
        self
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Separator {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(Vec2::new(
            ctx.viewport.vw(DOT_DIAMETER_VW),
            ctx.viewport.vh(HEIGHT_VH),
        ))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let radius = painter.viewport.vw(DOT_DIAMETER_VW) * 0.5;
        let gap = painter.viewport.vh(DOT_GAP_VH);
        let center = rect.center();
        // Dots sit symmetrically around the vertical center, `gap` apart
        // edge-to-edge.
        let offset = gap * 0.5 + radius;

        painter.fill_circle(Vec2::new(center.x, center.y - offset), radius, self.dot_color);
        painter.fill_circle(Vec2::new(center.x, center.y + offset), radius, self.dot_color);
    }
}
