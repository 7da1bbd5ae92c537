use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LogFormat};
use crate::session::Session;

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so they never interleave with the menus on stdout.
/// Records emitted through the `log` facade by the core crate are bridged in.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_log_filter));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(io::stderr),
            )
            .init(),
    }
}

/// Runs an interactive session on the process's stdin and stdout.
pub fn run_stdio(config: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new(config, stdin.lock(), io::stdout());
    session.run()?;
    Ok(())
}
