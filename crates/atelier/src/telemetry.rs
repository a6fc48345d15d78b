use tracing_subscriber::{EnvFilter, fmt};

/// Install a stderr fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Calling it again after a subscriber is already set is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
