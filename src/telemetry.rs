//! Tracing subscriber for the CLI

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr subscriber. `RUST_LOG` wins; otherwise `warn`, or
/// `debug` for this crate when `verbose` is set.
pub fn setup_tracing(verbose: bool) {
    let default_directive = if verbose { "warn,tagsmith=debug" } else { "warn" };
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    // a subscriber may already be set (tests, embedding applications)
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}
