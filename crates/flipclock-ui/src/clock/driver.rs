use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::{DIGIT_COUNT, DigitPair, SystemClock, TimeSnapshot, WallClock, digit_pairs};

/// Upper bound on how long the worker sleeps before re-checking the stop
/// flag, so `stop()` never blocks for a full second.
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Owns the per-second tick worker and the previous/current snapshots.
///
/// Lifecycle is explicit: construction captures an initial snapshot (with
/// previous == current, so mounting never plays a flip), [`start`] spawns
/// the worker, [`stop`] cancels and joins it. Dropping a running driver
/// stops it — no orphaned timers outlive the component.
///
/// The worker never touches view state directly. It publishes snapshots
/// over a channel; the owning thread drains them with [`poll`], which is
/// where current→previous rotation happens.
///
/// [`start`]: Self::start
/// [`stop`]: Self::stop
/// [`poll`]: Self::poll
pub struct ClockDriver {
    clock: Arc<dyn WallClock>,
    previous: TimeSnapshot,
    current: TimeSnapshot,
    ticks: Option<Receiver<TimeSnapshot>>,
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl ClockDriver {
    /// Driver over the local system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Driver over an arbitrary clock source (deterministic clocks in tests).
    pub fn with_clock<C: WallClock + 'static>(clock: C) -> Self {
        let clock: Arc<dyn WallClock> = Arc::new(clock);
        let initial = clock.now();
        Self {
            clock,
            previous: initial,
            current: initial,
            ticks: None,
            stop: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }

    /// Spawns the tick worker. No-op if already running.
    ///
    /// The worker sleeps until the next wall-clock second boundary
    /// (1000 ms minus the current subsecond millis), publishes a snapshot,
    /// and reschedules. The delay is recomputed from the live clock each
    /// pass, so a late wakeup shifts the next tick by at most one tick's
    /// error instead of accumulating drift.
    pub fn start(&mut self) {
        if self.worker.is_some() {
            return;
        }

        let (tx, rx) = mpsc::channel();
        self.stop.store(false, Ordering::Relaxed);
        self.ticks = Some(rx);

        let clock = Arc::clone(&self.clock);
        let stop = Arc::clone(&self.stop);
        self.worker = Some(thread::spawn(move || {
            log::debug!("tick worker started");
            while !stop.load(Ordering::Relaxed) {
                let delay = delay_to_next_second(&clock.now());
                if !sleep_until(Instant::now() + delay, &stop) {
                    break;
                }
                // Receiver dropped means the driver is gone; exit quietly.
                if tx.send(clock.now()).is_err() {
                    break;
                }
            }
            log::debug!("tick worker stopped");
        }));
    }

    /// Signals the worker to exit and joins it.
    ///
    /// Ticks already queued on the channel remain drainable via [`poll`];
    /// no new ones are produced after this returns.
    ///
    /// [`poll`]: Self::poll
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }

    /// True while the tick worker is alive.
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Drains pending ticks, rotating current→previous for each.
    ///
    /// Returns `true` if at least one new snapshot arrived. Call once per
    /// frame from the thread that owns the view state.
    pub fn poll(&mut self) -> bool {
        let Some(ticks) = &self.ticks else {
            return false;
        };

        let mut ticked = false;
        while let Ok(snapshot) = ticks.try_recv() {
            self.previous = std::mem::replace(&mut self.current, snapshot);
            ticked = true;
        }
        if ticked {
            log::trace!(
                "tick: {:02}:{:02}:{:02}",
                self.current.hour,
                self.current.minute,
                self.current.second
            );
        }
        ticked
    }

    pub fn current(&self) -> &TimeSnapshot {
        &self.current
    }

    pub fn previous(&self) -> &TimeSnapshot {
        &self.previous
    }

    /// The six per-position pairs for the previous/current snapshots.
    pub fn digit_pairs(&self) -> [DigitPair; DIGIT_COUNT] {
        digit_pairs(&self.previous, &self.current)
    }
}

impl Default for ClockDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ClockDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Delay until the next second boundary, computed from a live snapshot.
///
/// Clamped to at least 1 ms so a snapshot taken exactly on the boundary
/// still yields a forward delay.
fn delay_to_next_second(snapshot: &TimeSnapshot) -> Duration {
    let remaining = 1000u64.saturating_sub(snapshot.millisecond as u64);
    Duration::from_millis(remaining.max(1))
}

/// Sleeps until `deadline` in short slices, honoring the stop flag.
///
/// Returns `false` if stopped before the deadline was reached.
fn sleep_until(deadline: Instant, stop: &AtomicBool) -> bool {
    loop {
        if stop.load(Ordering::Relaxed) {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        thread::sleep((deadline - now).min(STOP_POLL_INTERVAL));
    }
}
