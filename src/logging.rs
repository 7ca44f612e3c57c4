use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter, e.g. `CLIPS_LOG=clips=debug`
pub const LOG_ENV: &str = "CLIPS_LOG";

/// Name of the log file the TUI writes to, inside the temp directory
pub const TUI_LOG_FILE: &str = "clips.log";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "warn".into())
}

/// Log to stderr, filtered by `CLIPS_LOG` (default `warn`)
pub fn init_cli() {
    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Log to a file while the terminal UI owns the screen. Only active when
/// `CLIPS_LOG` is set.
pub fn init_tui() {
    if std::env::var_os(LOG_ENV).is_none() {
        return;
    }
    let path = std::env::temp_dir().join(TUI_LOG_FILE);
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init();
}
