use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter (e.g. `NODEBIND_LOG=debug`).
pub const LOG_ENV: &str = "NODEBIND_LOG";

/// Install a stderr subscriber so logs never mix with command output.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
