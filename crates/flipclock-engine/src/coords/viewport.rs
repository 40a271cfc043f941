/// Viewport size in logical pixels.
///
/// Besides being the coordinate basis for renderers, the viewport is the
/// reference frame for proportional sizing: widget dimensions are expressed
/// as percentages of its width/height, and glyph sizes are normalized
/// against a fixed design width so text scales with the screen.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Design reference width the glyph normalizer scales against.
///
/// Matches the common mobile guideline baseline: a size of `s` on a 375 px
/// wide viewport stays `s`; wider viewports scale it up proportionally.
const DESIGN_WIDTH: f32 = 375.0;

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// `pct` percent of the viewport width, in logical pixels.
    #[inline]
    pub fn vw(self, pct: f32) -> f32 {
        self.width * pct / 100.0
    }

    /// `pct` percent of the viewport height, in logical pixels.
    #[inline]
    pub fn vh(self, pct: f32) -> f32 {
        self.height * pct / 100.0
    }

    /// Scales a glyph size from the design width to this viewport.
    #[inline]
    pub fn normalize(self, size: f32) -> f32 {
        size * (self.width / DESIGN_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vw_vh_are_percentages() {
        let vp = Viewport::new(400.0, 800.0);
        assert_eq!(vp.vw(50.0), 200.0);
        assert_eq!(vp.vh(10.0), 80.0);
        assert_eq!(vp.vw(0.0), 0.0);
    }

    #[test]
    fn normalize_is_identity_at_design_width() {
        let vp = Viewport::new(375.0, 667.0);
        assert_eq!(vp.normalize(55.0), 55.0);
    }

    #[test]
    fn normalize_scales_with_width() {
        let vp = Viewport::new(750.0, 1334.0);
        assert_eq!(vp.normalize(55.0), 110.0);
    }
}
