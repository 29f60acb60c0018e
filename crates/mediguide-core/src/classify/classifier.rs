//! Response classifier
//!
//! Segments a free-text answer into sentences and tags each one with the
//! highest-priority category whose pattern rule matches inside it.

use std::ops::Range;

use tracing::debug;

use super::rules::RuleSet;
use super::segment::sentences;
use super::types::{Category, Fragment};

/// Classifier over a compiled rule set
pub struct Classifier {
    rules: &'static RuleSet,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            rules: RuleSet::shared(),
        }
    }

    /// Classify a raw response into ordered fragments.
    ///
    /// Empty or whitespace-only input yields no fragments. Text without any
    /// terminator is a single fragment.
    pub fn classify(&self, text: &str) -> Vec<Fragment> {
        let fragments: Vec<Fragment> = sentences(text)
            .map(|sentence| Fragment {
                category: self.rules.categorize(sentence.text),
                content: sentence.text.to_string(),
                terminator: sentence.terminator,
            })
            .collect();

        debug!(
            input_len = text.len(),
            fragments = fragments.len(),
            "classified response"
        );
        fragments
    }

    /// Categorize a single sentence without segmenting it
    pub fn categorize(&self, sentence: &str) -> Category {
        self.rules.categorize(sentence)
    }

    /// Byte range of the clause that triggered `category` within `sentence`.
    ///
    /// `Plain` covers the whole sentence.
    pub fn matched_span(&self, category: Category, sentence: &str) -> Option<Range<usize>> {
        match category {
            Category::Plain => Some(0..sentence.len()),
            _ => self.rules.span(category, sentence),
        }
    }
}

/// Classify `text` with the shared rule set
pub fn classify_response(text: &str) -> Vec<Fragment> {
    Classifier::new().classify(text)
}
