//! Pattern rules for actionable sentence categories
//!
//! Each rule is a case-insensitive regex over a single clause. Clauses never
//! span a sentence terminator, so a match is confined to one sentence. A
//! sentence may still hold line breaks; the general recommendation rule is
//! anchored at the start of any line.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::types::Category;

/// Compiled pattern rule for one category
pub struct PatternRule {
    pub category: Category,
    regex: Regex,
}

impl PatternRule {
    fn new(category: Category, pattern: &str) -> Self {
        // Patterns are literals below; a failure here is a programming error
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid pattern for {}: {}", category, e));
        Self { category, regex }
    }

    /// Byte range of the first match in `clause`
    pub fn find(&self, clause: &str) -> Option<Range<usize>> {
        self.regex.find(clause).map(|m| m.range())
    }

    pub fn is_match(&self, clause: &str) -> bool {
        self.regex.is_match(clause)
    }
}

/// Ordered rule set; first matching rule wins
pub struct RuleSet {
    rules: Vec<PatternRule>,
}

static DEFAULT_RULES: LazyLock<RuleSet> = LazyLock::new(RuleSet::build);

impl RuleSet {
    fn build() -> Self {
        let rules = vec![
            PatternRule::new(
                Category::TabletRecommendation,
                r"(?i)\b(?:take|use|try)\s+[^.!?]*?(?:tablet|medicine|drug|medication)[^.!?]*",
            ),
            PatternRule::new(
                Category::EmergencyAction,
                r"(?i)\b(?:call|seek|go\s+to|contact)\s+[^.!?]*?(?:emergency|doctor|hospital|ambulance)[^.!?]*",
            ),
            PatternRule::new(
                Category::HomeCare,
                r"(?i)\b(?:rest|drink|apply|use)\s+[^.!?]*?(?:water|fluids|ice|compress|bed\s+rest)[^.!?]*",
            ),
            PatternRule::new(
                Category::DoctorVisit,
                r"(?i)\b(?:see|consult|visit)\s+(?:a\s+)?(?:doctor|physician|healthcare|medical)[^.!?]*?\b(?:if|when)\b[^.!?]*",
            ),
            PatternRule::new(
                Category::GeneralRecommendation,
                r"(?im)^(?:recommend|important|suggestion)[^.!?]*",
            ),
        ];
        Self { rules }
    }

    /// Shared rule set compiled on first use
    pub fn shared() -> &'static RuleSet {
        &DEFAULT_RULES
    }

    /// Category of the first matching rule, `Plain` if none match
    pub fn categorize(&self, clause: &str) -> Category {
        self.rules
            .iter()
            .find(|rule| rule.is_match(clause))
            .map(|rule| rule.category)
            .unwrap_or(Category::Plain)
    }

    /// Matched span of a specific category's rule
    pub fn span(&self, category: Category, clause: &str) -> Option<Range<usize>> {
        self.rules
            .iter()
            .find(|rule| rule.category == category)
            .and_then(|rule| rule.find(clause))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternRule> {
        self.rules.iter()
    }
}
