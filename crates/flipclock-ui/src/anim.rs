//! Flip transition state.
//!
//! Each digit position owns one [`FlipState`]; there is no cross-digit
//! coordination, so simultaneous changes animate independently. Progress is
//! advanced by the frame loop's `dt`, never by a timer of its own, which
//! makes the machine deterministic and trivially abandonable on teardown.

use std::time::Duration;

/// Fixed flip transition duration.
pub const FLIP_DURATION: Duration = Duration::from_millis(300);

// ── easing ────────────────────────────────────────────────────────────────

/// Cubic bezier easing curve through (0,0), (x1,y1), (x2,y2), (1,1).
///
/// Sampled by solving x(t) = input for t, then evaluating y(t) — the same
/// contract as CSS `cubic-bezier`. Control x-coordinates must lie in [0, 1]
/// so x(t) is monotone and the solve is well-defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The flip clock's ease-in-out curve.
    pub const fn ease_in_out() -> Self {
        Self::new(0.4, 0.0, 0.2, 1.0)
    }

    /// Evaluates the curve at `x` in [0, 1]. Inputs outside the range clamp.
    pub fn sample(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        self.eval_y(self.solve_t(x))
    }

    fn eval_x(&self, t: f32) -> f32 {
        cubic(t, self.x1, self.x2)
    }

    fn eval_y(&self, t: f32) -> f32 {
        cubic(t, self.y1, self.y2)
    }

    /// Finds t with x(t) == x by bisection. x(t) is monotone for control
    /// x-coordinates in [0, 1]; 24 halvings give sub-pixel precision.
    fn solve_t(&self, x: f32) -> f32 {
        let mut lo = 0.0f32;
        let mut hi = 1.0f32;
        let mut t = x;
        for _ in 0..24 {
            let err = self.eval_x(t) - x;
            if err.abs() < 1e-5 {
                break;
            }
            if err > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = (lo + hi) * 0.5;
        }
        t
    }
}

/// Cubic bezier component with implicit endpoints 0 and 1.
fn cubic(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

// ── FlipState ─────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Phase {
    /// Progress pinned, flap shows the current glyph.
    Static,
    /// Progress animating 0→1; flap shows the previous glyph until completion.
    Flipping,
}

/// Per-digit transition state machine.
///
/// STATIC → FLIPPING when a changed pair arrives; FLIPPING → STATIC when the
/// timed interpolation completes, at which point the flap glyph snaps to the
/// current character. A changed pair arriving mid-flight restarts from 0
/// with the newest previous/current glyphs — last write wins, no queueing.
#[derive(Debug, Clone)]
pub struct FlipState {
    phase: Phase,
    /// Transition progress in [0, 1]. Monotonically non-decreasing within
    /// one animation lifetime; reset to 0 only by a new change event.
    progress: f32,
    /// Glyph currently on the animating flap.
    flap: char,
    /// Glyph the tile settles on when the transition completes.
    current: char,
    curve: CubicBezier,
}

impl FlipState {
    pub fn new(glyph: char) -> Self {
        Self {
            phase: Phase::Static,
            progress: 1.0,
            flap: glyph,
            current: glyph,
            curve: CubicBezier::ease_in_out(),
        }
    }

    /// Feeds one tick's digit pair into the machine.
    pub fn set_pair(&mut self, current: char, previous: char, changed: bool) {
        if changed {
            // Restart from 0 even if a flip is in flight (last write wins).
            self.flap = previous;
            self.current = current;
            self.progress = 0.0;
            self.phase = Phase::Flipping;
            log::trace!("flip {previous} -> {current}");
        } else {
            self.current = current;
            if self.phase == Phase::Static {
                self.flap = current;
            }
        }
    }

    /// Advances the transition by `dt` seconds of frame time.
    pub fn advance(&mut self, dt: f32) {
        if self.phase != Phase::Flipping {
            return;
        }
        self.progress = (self.progress + dt / FLIP_DURATION.as_secs_f32()).min(1.0);
        if self.progress >= 1.0 {
            self.phase = Phase::Static;
            self.flap = self.current;
        }
    }

    /// True while a transition is running.
    pub fn is_flipping(&self) -> bool {
        self.phase == Phase::Flipping
    }

    /// Raw linear progress in [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Eased progress in [0, 1].
    pub fn eased(&self) -> f32 {
        self.curve.sample(self.progress)
    }

    /// Flap rotation away from flat, in degrees: 0° flat → 90° edge-on.
    pub fn angle_deg(&self) -> f32 {
        self.eased() * 90.0
    }

    /// Glyph on the animating flap (previous while flipping, else current).
    pub fn flap_glyph(&self) -> char {
        self.flap
    }

    /// Glyph the tile settles on.
    pub fn current_glyph(&self) -> char {
        self.current
    }
}
