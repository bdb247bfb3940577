use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to debug output for this crate and info
/// elsewhere. Calling it twice is an error, so embedders that bring their
/// own subscriber should simply not call it.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinic_sync=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
