//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` takes precedence; otherwise the `-v` count picks the level:
//! none → warn, `-v` → debug, `-vv` → trace.

use tracing_subscriber::EnvFilter;

pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("harvestgraph={level}")));

    // A second init (tests calling run() twice) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
