use std::path::Path;

/// Keeps the trace file writer alive; buffered events are flushed on drop.
#[must_use = "dropping the guard stops trace output"]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Send JSON trace events to `<log_dir>/sanscript-trace.jsonl`.
///
/// Only the first call installs a subscriber. `RUST_LOG` overrides the
/// default filter, which enables `debug` for the library, core and CLI
/// crates. Without the `trace` feature this does nothing.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> TraceGuard {
    use std::sync::Once;

    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    let mut worker = None;
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "sanscript-trace.jsonl");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let installed = tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("sanscript=debug,sanscript_core=debug,sanscript_cli=debug")
            }))
            .try_init();
        if installed.is_ok() {
            worker = Some(guard);
        }
    });
    TraceGuard { _worker: worker }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> TraceGuard {
    TraceGuard {}
}
