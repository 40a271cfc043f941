use flipclock_engine::coords::{Rect, Vec2};
use flipclock_engine::time::FrameTime;

use crate::clock::{ClockDriver, DIGIT_COUNT};
use crate::constraints::{Constraints, Edges, LayoutCtx, inset_rect};
use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::digit::DigitTile;
use crate::widgets::separator::Separator;

/// Horizontal margin on each side of a row slot, as a viewport-width percentage.
const SLOT_MARGIN_VW: f32 = 2.0;

/// Number of slots in the row: six tiles and two separators.
const SLOT_COUNT: f32 = 8.0;

/// The animated flip clock: HH : MM : SS.
///
/// Owns the [`ClockDriver`] and six [`DigitTile`]s. Each frame `update`
/// drains pending ticks, routes the per-position digit pairs into the tiles,
/// and advances their flip transitions; tiles animate independently even
/// when several positions change on the same tick.
///
/// The driver's tick worker must be started explicitly:
///
/// ```rust,ignore
/// let mut clock = FlipClock::new();
/// clock.start();
/// let mut root: Element = clock.into();
/// // ... frame loop ...
/// // Dropping the root stops the worker.
/// ```
pub struct FlipClock {
    driver: ClockDriver,
    tiles: [DigitTile; DIGIT_COUNT],
    separators: [Separator; 2],
}

struct RowMetrics {
    tile: Vec2,
    sep: Vec2,
    margin: f32,
    total_w: f32,
}

impl FlipClock {
    /// Clock over local system time.
    pub fn new() -> Self {
        Self::with_driver(ClockDriver::new())
    }

    /// Clock over a caller-supplied driver (custom or deterministic clocks).
    pub fn with_driver(driver: ClockDriver) -> Self {
        let tiles = driver.current().digits().map(DigitTile::new);
        Self {
            driver,
            tiles,
            separators: [Separator::new(), Separator::new()],
        }
    }

    /// Starts the per-second tick worker.
    pub fn start(&mut self) {
        self.driver.start();
    }

    /// Stops the tick worker. Also happens on drop.
    pub fn stop(&mut self) {
        self.driver.stop();
    }

    pub fn driver(&self) -> &ClockDriver {
        &self.driver
    }

    fn metrics(&self, ctx: &LayoutCtx, bounds: Vec2) -> RowMetrics {
        let mut margin = ctx.viewport.vw(SLOT_MARGIN_VW);
        let mut tile = self.tiles[0].measure(Constraints::loose(bounds), ctx);
        let mut sep = self.separators[0].measure(Constraints::loose(bounds), ctx);
        let mut total_w = 6.0 * tile.x + 2.0 * sep.x + SLOT_COUNT * 2.0 * margin;

        // Proportional sizes can overflow a narrow parent; squeeze the row
        // uniformly so it always fits.
        if total_w > bounds.x && bounds.x.is_finite() && total_w > 0.0 {
            let f = bounds.x / total_w;
            tile.x *= f;
            sep.x *= f;
            margin *= f;
            total_w = bounds.x;
        }

        RowMetrics { tile, sep, margin, total_w }
    }
}

impl Default for FlipClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for FlipClock {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let m = self.metrics(ctx, constraints.max);
        constraints.constrain(Vec2::new(m.total_w, m.tile.y))
    }

    fn update(&mut self, ft: FrameTime) {
        if self.driver.poll() {
            for (tile, pair) in self.tiles.iter_mut().zip(self.driver.digit_pairs()) {
                tile.set_pair(pair);
            }
        }
        for tile in &mut self.tiles {
            tile.update(ft);
        }
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let ctx = painter.layout_ctx();
        let m = self.metrics(&ctx, rect.size);
        let center = rect.center();

        let mut x = center.x - m.total_w * 0.5;
        // Each slot spans its content plus a margin on either side; the
        // child gets the slot minus those side insets.
        let mut place = |size: Vec2, x: &mut f32| -> Rect {
            let slot = Rect::new(*x, center.y - size.y * 0.5, size.x + 2.0 * m.margin, size.y);
            *x += slot.size.x;
            inset_rect(slot, Edges::horizontal(m.margin))
        };

        // HH : MM : SS — a separator after every second tile except the last.
        let mut sep_iter = self.separators.iter();
        for (i, tile) in self.tiles.iter().enumerate() {
            tile.paint(painter, place(m.tile, &mut x));
            if i % 2 == 1 && i + 1 < DIGIT_COUNT {
                if let Some(sep) = sep_iter.next() {
                    sep.paint(painter, place(m.sep, &mut x));
                }
            }
        }
    }
}
