use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber for the binary.
///
/// Logs go to stderr so stdout only carries command output. `RUST_LOG`
/// overrides the default filter.
pub fn init_logger(verbose: bool) {
    let default = if verbose {
        "ordersystem=debug,info"
    } else {
        "ordersystem=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
