//! Tracing subscriber setup for the binary.
//!
//! Colored logs go to stderr, filtered by `RUST_LOG` (default `warn`). A
//! daily-rolling JSON log file is added only when `LOG_FILE_PATH` is set,
//! filtered by `RUST_LOG_JSON` (default `debug`).

use anyhow::Result;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEFAULT_LOG_FILE_NAME: &str = "grade_calculator.log";

/// Builds a filter from a directive string such as `debug` or
/// `grade_calculator=info`.
///
/// `default` only applies when `directives` is missing, blank, or holds no valid
/// directive. It never overrides what the user asked for.
pub fn env_filter(directives: Option<&str>, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .parse_lossy(directives.map(str::trim).unwrap_or_default())
}

/// Splits `LOG_FILE_PATH` into the directory and file name handed to the
/// rolling appender. `None` or a blank path disables file logging.
pub fn log_file_location(path: Option<&str>) -> Option<(PathBuf, OsString)> {
    let path = Path::new(path.map(str::trim).filter(|p| !p.is_empty())?);

    match path.file_name() {
        Some(name) => {
            let dir = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            Some((dir.to_path_buf(), name.to_os_string()))
        }
        None => Some((path.to_path_buf(), OsString::from(DEFAULT_LOG_FILE_NAME))),
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Installs the global subscriber. The returned guard must outlive all
/// logging, or buffered file output is lost.
pub fn init_logging() -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(env_filter(
            env_var("RUST_LOG").as_deref(),
            LevelFilter::WARN,
        ));

    let (json_layer, guard) = match log_file_location(env_var("LOG_FILE_PATH").as_deref()) {
        Some((log_dir, log_file_name)) => {
            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(env_filter(
                    env_var("RUST_LOG_JSON").as_deref(),
                    LevelFilter::DEBUG,
                ));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .try_init()?;

    Ok(guard)
}
