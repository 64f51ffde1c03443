//! Telemetry helpers for applications embedding `param-editor`.
//!
//! Tracing setup stays explicit and opt-in. Hosts either call
//! `init_default_tracing` or install their own `tracing` subscriber.

/// Default filter when `RUST_LOG` is unset: editor diagnostics at `info`,
/// everything else at `warn`.
pub const DEFAULT_LOG_FILTER: &str = "param_editor=info,warn";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The `param_editor_harness` binary calls this on startup so store seeding,
/// edits and failed change checks show up on stderr.
///
/// Returns `true` when the subscriber was installed, and `false` when the
/// feature is disabled or the host already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
