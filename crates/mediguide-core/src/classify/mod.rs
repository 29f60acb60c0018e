//! Response Classification
//!
//! Turns a free-text medical answer into an ordered list of fragments, one per
//! sentence, each tagged with an actionable category:
//!
//! - **TabletRecommendation**: take/use/try ... tablet, medicine, drug, medication
//! - **EmergencyAction**: call/seek/go to/contact ... emergency, doctor, hospital, ambulance
//! - **HomeCare**: rest/drink/apply/use ... water, fluids, ice, compress, bed rest
//! - **DoctorVisit**: see/consult/visit (a) doctor ... if/when
//! - **GeneralRecommendation**: sentence starting with recommend/important/suggestion
//! - **Plain**: everything else
//!
//! Rules are tried in that order and the first match decides the category.
//!
//! # Example
//!
//! ```rust
//! use mediguide_core::classify::{classify_response, Category};
//!
//! let fragments = classify_response("Drink plenty of fluids and rest.");
//! assert_eq!(fragments[0].category, Category::HomeCare);
//! ```

pub mod classifier;
pub mod rules;
pub mod segment;
mod types;

pub use classifier::{classify_response, Classifier};
pub use rules::{PatternRule, RuleSet};
pub use segment::{sentences, Segmenter, Sentence};
pub use types::{summarize, Category, ClassifySummary, Fragment};
