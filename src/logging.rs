use tracing_subscriber::EnvFilter;

pub use tracing_subscriber::util::TryInitError as Error;

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` wins over `default_directive` when set and valid.
pub fn init(default_directive: &str) -> Result<(), Error> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
