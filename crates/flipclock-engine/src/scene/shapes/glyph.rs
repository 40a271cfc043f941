use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Layer};

/// Single-character glyph draw payload.
///
/// The clock only ever draws isolated digit characters, so the payload is a
/// centered `char` rather than a laid-out text run: `center` is the point the
/// renderer centers the glyph's em box on, and `size` is the em size in
/// logical pixels. Vertical squash during a flip is expressed through
/// `size` and the active clip rect, not a transform.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphCmd {
    pub ch: char,
    /// Em size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Point the glyph is centered on, in logical pixels.
    pub center: Vec2,
}

impl DrawList {
    /// Records a centered single-glyph draw command.
    #[inline]
    pub fn push_glyph(&mut self, layer: Layer, ch: char, size: f32, color: Color, center: Vec2) {
        self.push(layer, DrawCmd::Glyph(GlyphCmd { ch, size, color, center }));
    }
}
