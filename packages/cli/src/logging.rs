use setkeep_config::constants::RUST_LOG;
use std::path::Path;
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Prefix of the daily log files, e.g. `setkeep.2026-10-16.log`
pub const LOG_FILE_PREFIX: &str = "setkeep";

/// Level used when `RUST_LOG` is not set
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "trace"
    } else {
        "info"
    }
}

/// Daily rolling appender writing into `log_dir`
pub fn daily_file_appender(log_dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(log_dir)
}

/// Install the global tracing subscriber.
///
/// Logs go to the console and to a daily file under `log_dir`. `RUST_LOG`
/// wins over `verbose`. Must run before any store call whose logs should be
/// captured; the store itself never installs one. Keep the returned guard
/// alive until exit so the file writer flushes.
pub fn init_tracing(verbose: bool, log_dir: &Path) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_env(RUST_LOG)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let console = fmt::layer()
        .with_target(false) // Don't show module paths in logs
        .compact();

    match daily_file_appender(log_dir) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(false))
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry().with(filter).with(console).init();
            warn!("File logging disabled, cannot write to {}: {}", log_dir.display(), e);
            None
        }
    }
}
