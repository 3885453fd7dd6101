use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError};

/// Install the fmt subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flightfinder_ui=debug,flightfinder_offline=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
