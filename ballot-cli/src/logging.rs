use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

/// Audit events are emitted under this target by the engine.
pub const AUDIT_TARGET: &str = "voting";

/// Installs the global subscriber.
///
/// Human-readable logs go to stderr (filtered by `RUST_LOG`, default `info`)
/// and skip audit events. With `audit_log`, audit events are appended to that
/// file; keep the returned guard alive so the writer flushes.
pub fn init_tracing(audit_log: Option<&Path>) -> Option<WorkerGuard> {
    let (audit_layer, guard) = match audit_log {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .map(|f| f.to_os_string())
                .unwrap_or_else(|| "audit.log".into());
            let file_appender = tracing_appender::rolling::never(dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::filter_fn(|metadata| {
                    metadata.target() == AUDIT_TARGET
                }));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_filter(tracing_subscriber::filter::filter_fn(|metadata| {
            metadata.target() != AUDIT_TARGET
        }));

    tracing_subscriber::registry()
        .with(audit_layer)
        .with(stderr_layer)
        .init();

    guard
}
