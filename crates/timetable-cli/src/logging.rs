//! Logging setup for the `timetable` binary.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG` (default: `warn`).
///
/// Stdout carries the command output, so log lines never mix with it.
///
/// ```sh
/// RUST_LOG=timetable_engine=debug timetable enumerate -i catalog.json
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .init();
}
