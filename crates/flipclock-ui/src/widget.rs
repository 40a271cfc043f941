use flipclock_engine::coords::{Rect, Vec2};
use flipclock_engine::time::FrameTime;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every clock-face component implements.
///
/// The clock has no input events; instead widgets get a per-frame `update`
/// hook so animation state (flip progress, pending ticks) advances on the
/// thread that owns the view state.
///
/// ```rust,ignore
/// use flipclock_ui::prelude::*;
///
/// pub struct Dot { color: Color, radius: f32 }
///
/// impl Widget for Dot {
///     fn measure(&self, _constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
///         Vec2::new(self.radius * 2.0, self.radius * 2.0)
///     }
///     fn paint(&self, painter: &mut Painter, rect: Rect) {
///         painter.fill_circle(rect.center(), self.radius, self.color);
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic — calling `measure` twice with the same arguments
    /// must return the same result. The parent may call `measure` multiple times.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Advance time-driven state by one frame.
    ///
    /// The default implementation does nothing, so purely static widgets
    /// only implement `measure` and `paint`.
    fn update(&mut self, _ft: FrameTime) {}

    /// Draw this widget into `painter` within the bounds of `rect`.
    ///
    /// `rect` is the space allocated by the parent — the widget draws inside it.
    /// Children are painted by calling their own `paint` recursively.
    fn paint(&self, painter: &mut Painter, rect: Rect);
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget — the universal child type for container widgets.
///
/// Any `Widget` converts to `Element` via `From` / `Into`.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        self.0.measure(constraints, ctx)
    }

    #[inline]
    pub fn update(&mut self, ft: FrameTime) {
        self.0.update(ft)
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
