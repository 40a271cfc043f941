//! Flipclock UI — an animated flip-style digital clock on top of
//! `flipclock-engine`.
//!
//! The clock renders hours, minutes and seconds as six independently
//! flipping digit tiles. A tick worker re-reads the wall clock once per
//! second aligned to second boundaries; whenever a digit changes, its tile
//! plays a fixed 300 ms fold transition from the old glyph to the new one.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use flipclock_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let mut clock = FlipClock::new();
//! clock.start();
//! let mut root: Element = clock.into();
//! let mut frame_clock = FrameClock::new();
//!
//! // In your frame callback:
//! let draw_list = scene.frame(&mut root, Viewport::new(w, h), frame_clock.tick());
//! // Pass draw_list to your renderer. Dropping `root` stops the tick worker.
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type, then use it anywhere an
//! [`Element`](widget::Element) is accepted:
//!
//! ```rust,ignore
//! use flipclock_ui::prelude::*;
//!
//! pub struct Backdrop { color: Color }
//!
//! impl Widget for Backdrop {
//!     fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
//!         constraints.max
//!     }
//!     fn paint(&self, painter: &mut Painter, rect: Rect) {
//!         painter.fill_rect(rect, self.color);
//!     }
//! }
//! ```

pub mod anim;
pub mod clock;
pub mod constraints;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything you need to build and extend the clock face.
pub mod prelude {
    pub use crate::anim::{CubicBezier, FLIP_DURATION, FlipState};
    pub use crate::clock::{
        ClockDriver, DIGIT_COUNT, DigitPair, SystemClock, TimeSnapshot, WallClock, digit_pairs,
    };
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{clock::FlipClock, digit::DigitTile, separator::Separator};

    // Re-export the engine primitives everyone needs.
    pub use flipclock_engine::coords::{CornerRadii, Rect, Vec2, Viewport};
    pub use flipclock_engine::paint::Color;
    pub use flipclock_engine::scene::{DrawCmd, DrawItem, DrawList, Layer};
    pub use flipclock_engine::time::{FrameClock, FrameTime};
}
