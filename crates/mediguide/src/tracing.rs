//! Logging utilities with MediGuide segment prefixes.
//!
//! Output goes to stderr so revealed answers on stdout stay clean.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with a default filter.
///
/// Sets up tracing-subscriber with:
/// - Environment filter (RUST_LOG, falling back to `default_filter`)
/// - Compact format on stderr
///
/// Calling this twice is a no-op.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}

/// MediGuide segment prefixes for logging.
pub mod prefix {
    /// Classification prefix
    pub const CLASSIFY: &str = "⌗";
    /// Reveal driver prefix
    pub const REVEAL: &str = "꩜";
    /// Startup prefix
    pub const OPEN: &str = "✿";
    /// Shutdown prefix
    pub const CLOSE: &str = "❀";
}
