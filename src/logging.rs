//! Logging configuration using tracing

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `LESSON_VIEWER_LOG=debug`.
pub const LOG_ENV: &str = "LESSON_VIEWER_LOG";

/// Install a stderr subscriber. Defaults to info for this crate and warn
/// for everything else.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("golf_lesson_viewer=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .init();
}
