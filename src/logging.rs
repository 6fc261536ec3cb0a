use tracing_subscriber::{EnvFilter, fmt, prelude::*, util::TryInitError};

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. With the
/// `systemd` feature, events also go to the journal when it is reachable.
pub fn init() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter).with(fmt::layer());

    #[cfg(feature = "systemd")]
    let registry = registry.with(tracing_journald::layer().ok());

    registry.try_init()
}
