//! Runs the flip clock without a renderer for a few seconds, logging each
//! tick and the draw-stream size. Useful for eyeballing driver scheduling
//! and flip timing:
//!
//! ```sh
//! RUST_LOG=debug cargo run -p flipclock-ui --example headless
//! ```

use std::thread;
use std::time::Duration;

use flipclock_engine::logging::init_logging;
use flipclock_ui::prelude::*;

const RUN_FOR: Duration = Duration::from_secs(5);
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() {
    init_logging();

    let viewport = Viewport::new(375.0, 667.0);
    let mut scene = UiScene::new();
    let mut frame_clock = FrameClock::new();

    let mut clock = FlipClock::new();
    clock.start();
    log::info!(
        "clock mounted at {:02}:{:02}:{:02}",
        clock.driver().current().hour,
        clock.driver().current().minute,
        clock.driver().current().second
    );
    let mut root: Element = clock.into();

    let frames = (RUN_FOR.as_millis() / FRAME_INTERVAL.as_millis()) as u64;
    for _ in 0..frames {
        let ft = frame_clock.tick();
        let draw_list = scene.frame(&mut root, viewport, ft);
        log::debug!(
            "frame {}: {} draw commands",
            ft.frame_index,
            draw_list.items().len()
        );
        thread::sleep(FRAME_INTERVAL);
    }

    // Dropping the root tears the clock down and joins the tick worker.
    drop(root);
    log::info!("clock unmounted");
}
