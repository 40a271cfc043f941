use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the global `env_logger` sink, honoring `RUST_LOG`.
///
/// Defaults to `info` when `RUST_LOG` is unset. Safe to call more than
/// once; only the first call does anything. Intended usage is early in
/// `main` — library code sticks to the `log` macros.
pub fn init_logging() {
    init(None);
}

/// Like [`init_logging`], but with an explicit filter string that overrides
/// the environment (e.g. `"flipclock_ui=trace"`).
pub fn init_logging_with(filter: &str) {
    init(Some(filter));
}

fn init(filter: Option<&str>) {
    INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or("info");
        let mut builder = env_logger::Builder::from_env(env);
        if let Some(filter) = filter {
            builder.parse_filters(filter);
        }
        // Tick scheduling is sub-second; millisecond timestamps make the
        // traces legible.
        builder.format_timestamp_millis();
        builder.init();

        log::debug!("logging initialized");
    });
}
