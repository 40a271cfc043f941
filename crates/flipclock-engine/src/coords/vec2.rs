/// 2D point or size in logical pixels.
///
/// The clock face is laid out with plain per-component arithmetic, so this
/// stays a bare pair with the few helpers layout actually needs rather than
/// a general vector type.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Component-wise clamp into `[min, max]`.
    ///
    /// Used to force a measured size into a parent's layout constraints.
    #[inline]
    pub fn clamp(self, min: Vec2, max: Vec2) -> Vec2 {
        Vec2::new(self.x.clamp(min.x, max.x), self.y.clamp(min.y, max.y))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_is_per_component() {
        let min = Vec2::new(10.0, 0.0);
        let max = Vec2::new(20.0, 5.0);
        assert_eq!(Vec2::new(0.0, 100.0).clamp(min, max), Vec2::new(10.0, 5.0));
        assert_eq!(Vec2::new(15.0, 3.0).clamp(min, max), Vec2::new(15.0, 3.0));
    }

    #[test]
    fn non_finite_components_are_detected() {
        assert!(Vec2::new(1.0, 2.0).is_finite());
        assert!(!Vec2::new(f32::NAN, 0.0).is_finite());
        assert!(!Vec2::new(0.0, f32::INFINITY).is_finite());
    }
}
