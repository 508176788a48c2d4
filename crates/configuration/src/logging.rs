use crate::error::ConfigError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from `default_directive`
/// (e.g. `"info"`). Output goes to stdout through a non-blocking writer; the
/// returned guard must be held for the life of the process so buffered lines
/// are flushed on exit.
pub fn init_tracing(default_directive: &str) -> Result<WorkerGuard, ConfigError> {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(guard)
}
