use flipclock_engine::coords::{CornerRadii, Rect, Vec2, Viewport};
use flipclock_engine::paint::Color;
use flipclock_engine::scene::{DrawList, Layer};

use crate::constraints::LayoutCtx;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API. Fills land on the
/// painter's current [`Layer`] (`Cards` unless scoped with
/// [`on_layer`](Self::on_layer)); within a layer, later calls paint on top.
/// The flip flap uses the flap layers to move in front of or behind the
/// static card without widgets having to reorder their paint calls.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    /// Viewport backing the `vw`/`vh`/`normalize` sizing helpers.
    pub viewport: Viewport,
    /// Physical-to-logical pixel ratio for this frame.
    pub scale: f32,
    layer: Layer,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList, viewport: Viewport, scale: f32) -> Self {
        Self { draw_list, viewport, scale, layer: Layer::default() }
    }

    // ── layout context ────────────────────────────────────────────────────

    /// Returns a [`LayoutCtx`] matching this painter's viewport and scale.
    ///
    /// Useful inside [`Widget::paint`](crate::widget::Widget::paint) when a
    /// container needs to re-measure its children to compute their layout
    /// positions.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx {
        LayoutCtx { viewport: self.viewport, scale: self.scale }
    }

    // ── layers ────────────────────────────────────────────────────────────

    /// Layer that subsequent fills land on.
    #[inline]
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Runs `f` with all fills routed to `layer`, then restores the
    /// previous layer.
    pub fn on_layer(&mut self, layer: Layer, f: impl FnOnce(&mut Self)) {
        let prev = std::mem::replace(&mut self.layer, layer);
        f(self);
        self.layer = prev;
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_list.push_solid_rect(self.layer, rect, color);
    }

    /// Rounded rectangle with per-corner radii.
    ///
    /// Pass `CornerRadii::zero()` for sharp corners.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radii: CornerRadii, color: Color) {
        self.draw_list.push_rounded_rect(self.layer, rect, radii, color);
    }

    /// Solid circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.draw_list.push_circle(self.layer, center, radius, color);
    }

    /// Single glyph centered on `center`. `size` is the em size in logical pixels.
    pub fn glyph(&mut self, ch: char, size: f32, color: Color, center: Vec2) {
        self.draw_list.push_glyph(self.layer, ch, size, color, center);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a scissor region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    /// End the most recent scissor region.
    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }
}
