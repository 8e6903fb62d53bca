//! Tracing setup for hosts embedding the chart engine.
//!
//! The engine only emits `tracing` events (dataset canonicalization,
//! regeneration, pointer handling); installing a subscriber is the host's
//! call. `init_default_tracing` is a convenience for examples and quick
//! integrations, not a requirement.

/// Installs a compact subscriber when the `telemetry` feature is enabled.
///
/// Without `RUST_LOG` the filter defaults to debug for this crate and info
/// for everything else. Returns `false` when a global subscriber already
/// exists so hosts keep control over their own setup.
#[cfg(feature = "telemetry")]
#[must_use]
pub fn init_default_tracing() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("areachart_rs=debug,info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

/// No-op stand-in when the `telemetry` feature is disabled.
#[cfg(not(feature = "telemetry"))]
#[must_use]
pub fn init_default_tracing() -> bool {
    false
}
