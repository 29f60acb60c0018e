//! MediGuide Core Engine
//!
//! Formats free-text medical answers for display:
//!
//! - [`classify`] splits an answer into sentences and tags each one with an
//!   actionable category (tablet recommendation, emergency action, ...)
//! - [`render`] turns a tagged fragment into glyph/label presentation
//! - [`reveal`] appends rendered fragments to a sink one at a time, with a
//!   fixed delay, and drops an in-flight reveal when a new one starts
//!
//! No I/O and no async runtime: timers and sinks are supplied by the caller.
//!
//! # Example
//!
//! ```rust
//! use mediguide_core::{classify_response, render, Category};
//!
//! let fragments = classify_response(
//!     "Take paracetamol tablet for fever. See a doctor if fever persists.",
//! );
//! assert_eq!(fragments[0].category, Category::TabletRecommendation);
//! assert_eq!(
//!     render(&fragments[1]).to_string(),
//!     "👨‍⚕️ When to See Doctor: See a doctor if fever persists"
//! );
//! ```

pub mod ask;
pub mod classify;
pub mod error;
pub mod render;
pub mod reveal;

// Re-export main types at crate root
pub use ask::{AskRequest, AskResponse};
pub use classify::{classify_response, summarize, Category, Classifier, ClassifySummary, Fragment};
pub use error::{AskError, ConfigError, ConfigResult};
pub use render::{render, render_html, RenderedFragment};
pub use reveal::{
    Generation, RevealConfig, RevealScheduler, RevealSession, RevealState, Sink, StepOutcome,
    Tick, Timer, VecSink, VirtualClock,
};
