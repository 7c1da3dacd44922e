//! tracing subscriber for the binary.
//!
//! `FACESGEN_LOG` takes an `EnvFilter` directive (`debug`, `facesgen=trace`, ...).
//! Without it, the `-v` count picks the level. Events go to stderr so stdout only
//! carries command output.

use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

pub const LOG_ENV: &str = "FACESGEN_LOG";

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity > 1)
                .without_time()
                .with_filter(filter),
        )
        .try_init();
}
