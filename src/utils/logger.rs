use crate::utils::error::{GreeterError, Result};
use tracing_subscriber::{
    fmt::time::ChronoLocal, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Timestamp layout of the conventional CLI log prefix, e.g. `2026/10/17 12:00:00`.
pub const LOG_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Log directive for a run. Only the verbose flag picks it; `RUST_LOG` is not consulted.
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "greeter=info"
    } else {
        "greeter=warn"
    }
}

/// Installs the stderr logger used by the CLI.
///
/// Only the greeter's own events pass: `info` and above in verbose mode, `warn`
/// and above otherwise.
pub fn try_init_cli_logger(verbose: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directive(verbose)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(ChronoLocal::new(LOG_TIME_FORMAT.to_string()))
                .with_ansi(false)
                .with_level(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| GreeterError::LoggerError {
            message: e.to_string(),
        })
}

pub fn init_cli_logger(verbose: bool) {
    if let Err(e) = try_init_cli_logger(verbose) {
        eprintln!("{}", e);
    }
}
