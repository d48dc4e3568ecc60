use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber
///
/// Logs go to stderr. With `log_file`, they are also appended to that file;
/// keep the returned guard alive until exit so buffered lines are flushed.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let registry = tracing_subscriber::registry().with(filter).with(stderr_layer);

    let Some((dir, file_name)) = log_file.and_then(|path| Some((path.parent()?, path.file_name()?)))
    else {
        registry.init();
        return None;
    };

    let _ = std::fs::create_dir_all(dir);
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    registry.with(file_layer).init();

    Some(guard)
}
