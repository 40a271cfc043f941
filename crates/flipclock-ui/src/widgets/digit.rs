use flipclock_engine::coords::{CornerRadii, Rect, Vec2};
use flipclock_engine::paint::Color;
use flipclock_engine::scene::Layer;
use flipclock_engine::time::FrameTime;

use crate::anim::FlipState;
use crate::clock::DigitPair;
use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// Glyph em size at the design width; scaled via `Viewport::normalize`.
const GLYPH_SIZE: f32 = 55.0;

/// Tile width/height as viewport percentages.
const TILE_WIDTH_VW: f32 = 12.0;
const TILE_HEIGHT_VH: f32 = 70.0;

/// One flip-card digit tile.
///
/// A tile is a stack of four layers: a bottom card showing the lower half of
/// the current glyph, a static top card showing its upper half, a hairline
/// fold line across the middle, and — while a transition runs — an animating
/// top flap showing the previous glyph. The flap folds down toward the
/// viewer: its height is the top half scaled by cos(angle), so it reads as a
/// 3D rotation without the renderer needing perspective transforms.
///
/// # Example
/// ```rust,ignore
/// DigitTile::new('0').card_color(Color::from_srgb_u8(0x10, 0x10, 0x14, 0xff))
/// ```
pub struct DigitTile {
    flip: FlipState,
    card_color: Color,
    glyph_color: Color,
    line_color: Color,
    corner_radius: f32,
}

impl DigitTile {
    pub fn new(glyph: char) -> Self {
        Self {
            flip: FlipState::new(glyph),
            card_color: Color::from_srgb_u8(0x1a, 0x1a, 0x1a, 0xff),
            glyph_color: Color::from_straight(1.0, 1.0, 1.0, 1.0),
            line_color: Color::from_straight(0.0, 0.0, 0.0, 0.3),
            corner_radius: 8.0,
        }
    }

    pub fn card_color(mut self, v: Color) -> Self {
        self.card_color = v;
        self
    }

    pub fn glyph_color(mut self, v: Color) -> Self {
        self.glyph_color = v;
        self
    }

    pub fn corner_radius(mut self, v: f32) -> Self {
        self.corner_radius = v;
        self
    }

    /// Feeds one tick's digit pair into the tile's flip machine.
    pub fn set_pair(&mut self, pair: DigitPair) {
        self.flip.set_pair(pair.current, pair.previous, pair.changed);
    }

    /// Read access for consumers that want to mirror transition state.
    pub fn flip(&self) -> &FlipState {
        &self.flip
    }

    fn paint_flap(&self, painter: &mut Painter, rect: Rect) {
        let squash = self.flip.angle_deg().to_radians().cos().max(0.0);
        let half_h = rect.size.y * 0.5;
        let flap_h = half_h * squash;
        let mid_y = rect.origin.y + half_h;
        let flap = Rect::new(rect.origin.x, mid_y - flap_h, rect.size.x, flap_h);
        if flap.is_empty() {
            return;
        }

        painter.push_clip(flap);
        painter.fill_rounded_rect(flap, CornerRadii::top(self.corner_radius), self.card_color);
        // The glyph squashes with the card. Its center sits on the fold line
        // (the tile center), which the fold anchors, so only the em size moves.
        let glyph_size = painter.viewport.normalize(GLYPH_SIZE) * squash;
        painter.glyph(
            self.flip.flap_glyph(),
            glyph_size,
            self.glyph_color,
            Vec2::new(rect.center().x, mid_y),
        );
        painter.pop_clip();
    }
}

impl Widget for DigitTile {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(Vec2::new(
            ctx.viewport.vw(TILE_WIDTH_VW),
            ctx.viewport.vh(TILE_HEIGHT_VH),
        ))
    }

    fn update(&mut self, ft: FrameTime) {
        self.flip.advance(ft.dt);
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let current = self.flip.current_glyph();
        let glyph_size = painter.viewport.normalize(GLYPH_SIZE);
        let center = rect.center();
        let top = rect.top_half();
        let bottom = rect.bottom_half();

        // Bottom card: lower half of the current glyph.
        painter.push_clip(bottom);
        painter.fill_rounded_rect(bottom, CornerRadii::bottom(self.corner_radius), self.card_color);
        painter.glyph(current, glyph_size, self.glyph_color, center);
        painter.pop_clip();

        // Static top card: upper half of the current glyph, revealed as the
        // flap folds away.
        painter.push_clip(top);
        painter.fill_rounded_rect(top, CornerRadii::top(self.corner_radius), self.card_color);
        painter.glyph(current, glyph_size, self.glyph_color, center);
        painter.pop_clip();

        // Past the halfway point the flap shows its back and drops behind
        // the static card (backface hidden); before it, it covers the card.
        if self.flip.is_flipping() {
            let layer = if self.flip.eased() >= 0.5 { Layer::FlapBehind } else { Layer::FlapFront };
            painter.on_layer(layer, |p| self.paint_flap(p, rect));
        }

        // Fold line across the middle, above everything else on the tile.
        let mid_y = rect.origin.y + rect.size.y * 0.5;
        painter.on_layer(Layer::Chrome, |p| {
            p.fill_rect(
                Rect::new(rect.origin.x, mid_y - 0.5, rect.size.x, 1.0),
                self.line_color,
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flipclock_engine::coords::Viewport;
    use flipclock_engine::scene::{DrawCmd, DrawList};

    const VIEWPORT: Viewport = Viewport::new(375.0, 667.0);
    const TILE: Rect = Rect::new(0.0, 0.0, 45.0, 140.0);

    fn paint_tile(tile: &DigitTile) -> DrawList {
        let mut list = DrawList::new();
        {
            let mut painter = Painter::new(&mut list, VIEWPORT, 1.0);
            tile.paint(&mut painter, TILE);
        }
        list
    }

    fn rounded_rect_heights_in_paint_order(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::RoundedRect(cmd) => Some(cmd.rect.size.y),
                _ => None,
            })
            .collect()
    }

    // ── static rendering ──────────────────────────────────────────────────

    #[test]
    fn static_tile_paints_two_cards_two_glyphs_and_a_line() {
        let tile = DigitTile::new('7');
        let list = paint_tile(&tile);

        let mut cards = 0;
        let mut glyphs = 0;
        let mut lines = 0;
        for item in list.items() {
            match &item.cmd {
                DrawCmd::RoundedRect(_) => cards += 1,
                DrawCmd::Glyph(g) => {
                    glyphs += 1;
                    assert_eq!(g.ch, '7');
                }
                DrawCmd::Rect(_) => lines += 1,
                DrawCmd::Circle(_) => panic!("tile paints no circles"),
            }
        }
        assert_eq!(cards, 2);
        assert_eq!(glyphs, 2);
        assert_eq!(lines, 1);
    }

    #[test]
    fn card_halves_are_clipped_to_their_halves() {
        let tile = DigitTile::new('0');
        let list = paint_tile(&tile);

        let clips: Vec<Rect> = list
            .items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::RoundedRect(_) => item.clip_rect,
                _ => None,
            })
            .collect();
        assert_eq!(clips, vec![TILE.bottom_half(), TILE.top_half()]);
    }

    // ── flipping ──────────────────────────────────────────────────────────

    fn flipping_tile(dt: f32) -> DigitTile {
        let mut tile = DigitTile::new('4');
        tile.set_pair(DigitPair { current: '5', previous: '4', changed: true });
        tile.update(FrameTime::fixed(dt, 0));
        tile
    }

    #[test]
    fn early_flip_stacks_flap_above_static_card() {
        // progress 1/6 → eased well under 0.5.
        let tile = flipping_tile(0.05);
        assert!(tile.flip().eased() < 0.5);

        let mut list = paint_tile(&tile);
        let heights = rounded_rect_heights_in_paint_order(&mut list);
        assert_eq!(heights.len(), 3);
        // Flap is shorter than a half card and paints last (on top).
        let half = TILE.size.y * 0.5;
        assert!(heights[2] < half);
        assert_eq!(heights[0], half);
        assert_eq!(heights[1], half);
    }

    #[test]
    fn late_flip_stacks_flap_behind_static_card() {
        // progress 5/6 → eased well past 0.5.
        let tile = flipping_tile(0.25);
        assert!(tile.flip().eased() >= 0.5);

        let mut list = paint_tile(&tile);
        let half = TILE.size.y * 0.5;

        // The flap is still the last rounded rect recorded...
        let recorded: Vec<f32> = list
            .items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::RoundedRect(cmd) => Some(cmd.rect.size.y),
                _ => None,
            })
            .collect();
        assert_eq!(recorded.len(), 3);
        assert!(recorded[2] < half);

        // ...but its layer puts it underneath both card halves.
        let heights = rounded_rect_heights_in_paint_order(&mut list);
        assert!(heights[0] < half);
        assert_eq!(heights[1], half);
        assert_eq!(heights[2], half);
    }

    #[test]
    fn fold_line_paints_above_the_flap() {
        let tile = flipping_tile(0.05);
        let mut list = paint_tile(&tile);

        let last = list.iter_in_paint_order().last();
        assert!(matches!(last.map(|item| &item.cmd), Some(DrawCmd::Rect(_))));
    }

    #[test]
    fn flap_shows_previous_glyph_until_completion() {
        let tile = flipping_tile(0.05);
        let list = paint_tile(&tile);

        let glyphs: Vec<char> = list
            .items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Glyph(g) => Some(g.ch),
                _ => None,
            })
            .collect();
        // Bottom half + static top show the new digit; the flap shows the old.
        assert_eq!(glyphs, vec!['5', '5', '4']);
    }

    #[test]
    fn completed_flip_renders_statically_with_new_glyph() {
        let mut tile = flipping_tile(0.05);
        tile.update(FrameTime::fixed(1.0, 1));
        let list = paint_tile(&tile);

        let glyphs: Vec<char> = list
            .items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Glyph(g) => Some(g.ch),
                _ => None,
            })
            .collect();
        assert_eq!(glyphs, vec!['5', '5']);
    }
}
