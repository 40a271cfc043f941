use flipclock_engine::coords::{Rect, Vec2, Viewport};
use flipclock_engine::scene::DrawList;
use flipclock_engine::time::FrameTime;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Element;

/// Top-level coordinator that owns the frame's draw stream.
///
/// Each frame: advance widget state by `dt`, measure, then paint into the
/// owned `DrawList`. The caller hands the returned list to whatever
/// rasterizer it uses.
///
/// # Example
///
/// ```rust,ignore
/// let mut scene = UiScene::new();
/// let mut root: Element = FlipClock::new().into();
/// let mut frame_clock = FrameClock::new();
///
/// // In your frame callback:
/// let draw_list = scene.frame(&mut root, Viewport::new(w, h), frame_clock.tick());
/// ```
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
    /// Physical-to-logical pixel ratio applied to this scene's frames.
    pub scale: f32,
}

impl UiScene {
    pub fn new() -> Self {
        Self { draw_list: DrawList::new(), scale: 1.0 }
    }

    /// Build, layout, and paint the widget tree for one frame.
    ///
    /// The root widget persists across frames in the caller; its animation
    /// state is advanced here via `update` before painting, so completion
    /// callbacks run on the thread that owns the view state.
    ///
    /// The returned `&mut DrawList` is owned by the `UiScene` and valid
    /// until the next call to `frame`.
    #[must_use]
    pub fn frame(&mut self, root: &mut Element, viewport: Viewport, ft: FrameTime) -> &mut DrawList {
        self.draw_list.clear();

        // ── update ────────────────────────────────────────────────────────
        root.update(ft);

        // ── measure ───────────────────────────────────────────────────────
        let ctx = LayoutCtx { viewport, scale: self.scale };
        // The root always fills the viewport; measuring it tight lets it
        // size internal layout before painting into the full rect.
        let viewport_size = Vec2::new(viewport.width, viewport.height);
        let _ = root.measure(Constraints::tight(viewport_size), &ctx);
        let rect = Rect::new(0.0, 0.0, viewport.width, viewport.height);

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(&mut self.draw_list, viewport, self.scale);
            root.paint(&mut painter, rect);
        }

        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
