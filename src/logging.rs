//! Tracing setup for the `horde-lab` binary.
//!
//! The library only emits events through `tracing` macros and never
//! installs a subscriber. Match completion is logged at `debug`, each
//! search generation at `info`, skipped decklist lines at `warn`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=horde_lab=info horde-lab optimize --pop 10 --gens 3
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
