use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Install a JSON `tracing` subscriber. `RUST_LOG` takes precedence over `log_level`.
///
/// Fails if a global subscriber is already installed.
pub fn try_init_tracing(service_name: &str, log_level: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(log_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .try_init()?;

    tracing::debug!(service = %service_name, "Tracing initialised");
    Ok(())
}

pub fn init_tracing(service_name: &str, log_level: &str) {
    if let Err(e) = try_init_tracing(service_name, log_level) {
        eprintln!(
            "Failed to initialize tracing for '{}' at level '{}': {}",
            service_name, log_level, e
        );
        panic!("Failed to initialize tracing: {}", e);
    }
}
