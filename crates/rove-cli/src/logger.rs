//! Logging setup for the CLI.
//!
//! Library crates emit tracing events; the CLI installs the subscriber.
//! `--verbose` turns on debug output for the rove crates, `--quiet` keeps
//! only errors, and `RUST_LOG` overrides both when neither flag is set.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_logger(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("rove_core=debug,rove_gen=debug,rove_plugin=debug,rove_cli=debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rove_core=info,rove_plugin=info,rove_cli=info"))
    };

    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
