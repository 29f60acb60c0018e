//! # MediGuide Shared Rust Library
//!
//! Runtime pieces around `mediguide-core`:
//! - **config**: layered settings (defaults, JSON file, environment)
//! - **driver**: tokio-backed reveal driver
//! - **sink**: terminal and shared sinks
//! - **error**: common error type
//! - **tracing**: logging setup with MediGuide segment prefixes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mediguide::{config::Settings, driver::reveal_once, sink::TerminalSink};
//!
//! let settings = Settings::load(None)?;
//! let fragments = mediguide_core::classify_response(answer);
//! reveal_once(TerminalSink::stdout(), settings.reveal, fragments).await?;
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod sink;
pub mod tracing;

// Re-export commonly used items at crate root
pub use config::Settings;
pub use driver::{reveal_once, RevealDriver, TokioTimer};
pub use error::{Error, Result};
pub use sink::{SharedSink, TerminalSink};
