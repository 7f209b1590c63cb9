//! `tracing` setup for hosts of `indicator-histogram`.
//!
//! Binning logs at `trace`, chart assembly at `debug`, and misaligned
//! scenario areas at `warn`. Hosts with their own subscriber can ignore
//! this module.

/// Filter used when `RUST_LOG` is unset: dependencies at `warn`, this crate's
/// chart assembly at `debug`.
pub const DEFAULT_LOG_FILTER: &str = "warn,indicator_histogram=debug";

/// Installs a compact subscriber filtered by `RUST_LOG`, or
/// [`DEFAULT_LOG_FILTER`] when the variable is unset or invalid.
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
        install(filter)
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Installs a compact subscriber with explicit filter directives, ignoring
/// `RUST_LOG`. Invalid directives are rejected with `false`.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        match tracing_subscriber::EnvFilter::try_new(directives) {
            Ok(filter) => install(filter),
            Err(_) => false,
        }
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

// Module paths (`indicator_histogram::core::binning`) stay in the output so
// binning and assembly events can be told apart.
#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok()
}
