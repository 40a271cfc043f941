//! Wall-clock reads and digit derivation.
//!
//! Responsibilities:
//! - capture immutable [`TimeSnapshot`]s from a pluggable [`WallClock`]
//! - format snapshots into the six zero-padded display digits (HHMMSS)
//! - diff consecutive snapshots into per-position [`DigitPair`]s
//!
//! The tick worker that drives snapshot capture lives in [`driver`].

mod driver;

pub use driver::ClockDriver;

use chrono::Timelike;

/// Number of digit positions on the clock face: HH MM SS.
pub const DIGIT_COUNT: usize = 6;

// ── TimeSnapshot ──────────────────────────────────────────────────────────

/// Immutable capture of the wall clock at one tick.
///
/// `millisecond` is carried only so the tick worker can align its next wake
/// to the second boundary; display formatting ignores it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimeSnapshot {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl TimeSnapshot {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self { hour, minute, second, millisecond: 0 }
    }

    /// The six display digits, zero-padded: `[H, H, M, M, S, S]`.
    pub fn digits(&self) -> [char; DIGIT_COUNT] {
        let [h0, h1] = two_digits(self.hour);
        let [m0, m1] = two_digits(self.minute);
        let [s0, s1] = two_digits(self.second);
        [h0, h1, m0, m1, s0, s1]
    }
}

/// Zero-padded decimal digits of a field value in `0..=99`.
fn two_digits(v: u8) -> [char; 2] {
    debug_assert!(v < 100, "time field out of range: {v}");
    [
        char::from(b'0' + (v / 10) % 10),
        char::from(b'0' + v % 10),
    ]
}

// ── DigitPair ─────────────────────────────────────────────────────────────

/// One digit position's old and new glyph.
///
/// `changed` is true iff `current != previous`; only changed positions play
/// a flip transition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DigitPair {
    pub current: char,
    pub previous: char,
    pub changed: bool,
}

/// Diffs two snapshots into the six per-position pairs.
pub fn digit_pairs(previous: &TimeSnapshot, current: &TimeSnapshot) -> [DigitPair; DIGIT_COUNT] {
    let prev = previous.digits();
    let cur = current.digits();
    core::array::from_fn(|i| DigitPair {
        current: cur[i],
        previous: prev[i],
        changed: cur[i] != prev[i],
    })
}

// ── WallClock ─────────────────────────────────────────────────────────────

/// Read-only wall-clock source.
///
/// The system clock is treated as an external, already-correct primitive;
/// the trait exists so the tick worker and tests can substitute
/// deterministic clocks.
pub trait WallClock: Send + Sync {
    fn now(&self) -> TimeSnapshot;
}

/// Local system time, 24-hour.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> TimeSnapshot {
        let now = chrono::Local::now();
        TimeSnapshot {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
            // Leap seconds surface as nanosecond >= 1e9; clamp into the last milli.
            millisecond: (now.nanosecond() / 1_000_000).min(999) as u16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── formatting ────────────────────────────────────────────────────────

    #[test]
    fn digits_are_zero_padded() {
        let snap = TimeSnapshot::new(9, 0, 5);
        assert_eq!(snap.digits(), ['0', '9', '0', '0', '0', '5']);
    }

    #[test]
    fn digits_of_two_digit_fields() {
        let snap = TimeSnapshot::new(23, 59, 41);
        assert_eq!(snap.digits(), ['2', '3', '5', '9', '4', '1']);
    }

    // ── digit pairs ───────────────────────────────────────────────────────

    #[test]
    fn changed_tracks_per_position_difference() {
        let prev = TimeSnapshot::new(10, 15, 29);
        let cur = TimeSnapshot::new(10, 15, 30);
        let pairs = digit_pairs(&prev, &cur);

        // Only the seconds field moved: "29" → "30" changes both its digits.
        let changed: Vec<bool> = pairs.iter().map(|p| p.changed).collect();
        assert_eq!(changed, vec![false, false, false, false, true, true]);
        assert_eq!(pairs[4].previous, '2');
        assert_eq!(pairs[4].current, '3');
        assert_eq!(pairs[5].previous, '9');
        assert_eq!(pairs[5].current, '0');
    }

    #[test]
    fn midnight_rollover_changes_every_position() {
        let prev = TimeSnapshot::new(23, 59, 59);
        let cur = TimeSnapshot::new(0, 0, 0);
        let pairs = digit_pairs(&prev, &cur);
        assert!(pairs.iter().all(|p| p.changed));
    }

    #[test]
    fn identical_snapshots_change_nothing() {
        let snap = TimeSnapshot::new(12, 34, 56);
        let pairs = digit_pairs(&snap, &snap);
        assert!(pairs.iter().all(|p| !p.changed));
        assert!(pairs.iter().all(|p| p.current == p.previous));
    }
}
