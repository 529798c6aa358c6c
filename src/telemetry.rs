//! Telemetry helpers for applications embedding `kundali-layout`.
//!
//! The engine only emits `tracing` events; installing a subscriber stays the
//! host's decision. The helpers here are shortcuts for binaries and tests that
//! have no subscriber of their own.

/// Filter used when `RUST_LOG` is unset: engine events at `info` and above,
/// everything else at `warn`.
pub const DEFAULT_FILTER: &str = "warn,kundali_layout=info";

/// Installs a compact subscriber filtered by `RUST_LOG`, or by
/// [`DEFAULT_FILTER`] when it is unset.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`] with a caller-chosen fallback filter, e.g.
/// `"kundali_layout=trace"` to see every placed body.
///
/// An unparsable `fallback` leaves the subscriber uninstalled.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => match EnvFilter::try_new(fallback) {
                Ok(filter) => filter,
                Err(_) => return false,
            },
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
