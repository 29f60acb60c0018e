//! Classification types

use serde::{Deserialize, Serialize};

/// Actionable category of a response fragment.
///
/// Declaration order is rule priority: when a sentence matches several
/// rules, the earliest variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Take/use/try a tablet, medicine, drug or medication
    TabletRecommendation,
    /// Call/seek/contact emergency help, a doctor, a hospital or an ambulance
    EmergencyAction,
    /// Rest, fluids, ice, compresses
    HomeCare,
    /// See a doctor if/when something happens
    DoctorVisit,
    /// Sentence opening with a recommendation keyword
    GeneralRecommendation,
    /// Anything else
    Plain,
}

impl Category {
    /// All categories in priority order.
    pub const ALL: [Category; 6] = [
        Self::TabletRecommendation,
        Self::EmergencyAction,
        Self::HomeCare,
        Self::DoctorVisit,
        Self::GeneralRecommendation,
        Self::Plain,
    ];

    /// Display glyph, `None` for plain statements
    pub fn glyph(&self) -> Option<&'static str> {
        match self {
            Self::TabletRecommendation => Some("💊"),
            Self::EmergencyAction => Some("🚨"),
            Self::HomeCare => Some("🏠"),
            Self::DoctorVisit => Some("👨‍⚕️"),
            Self::GeneralRecommendation => Some("💡"),
            Self::Plain => None,
        }
    }

    /// Display label, `None` for plain statements
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::TabletRecommendation => Some("Tablet Recommendation:"),
            Self::EmergencyAction => Some("Emergency Action:"),
            Self::HomeCare => Some("Home Care:"),
            Self::DoctorVisit => Some("When to See Doctor:"),
            Self::GeneralRecommendation => Some("Recommendation:"),
            Self::Plain => None,
        }
    }

    /// CSS class used by the HTML rendering
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Self::TabletRecommendation => Some("tablet-rec"),
            Self::EmergencyAction => Some("emergency"),
            Self::HomeCare => Some("home-care"),
            Self::DoctorVisit => Some("doctor-visit"),
            Self::GeneralRecommendation => Some("recommendation"),
            Self::Plain => None,
        }
    }

    /// Whether fragments of this category carry an action for the reader
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Self::Plain)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TabletRecommendation => write!(f, "tablet_recommendation"),
            Self::EmergencyAction => write!(f, "emergency_action"),
            Self::HomeCare => write!(f, "home_care"),
            Self::DoctorVisit => write!(f, "doctor_visit"),
            Self::GeneralRecommendation => write!(f, "general_recommendation"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

/// One classified sentence of a response, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub category: Category,
    /// Trimmed sentence text without its terminator
    pub content: String,
    /// First terminator character that closed the sentence in the source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminator: Option<char>,
}

impl Fragment {
    pub fn new(category: Category, content: impl Into<String>) -> Self {
        Self {
            category,
            content: content.into(),
            terminator: None,
        }
    }

    pub fn with_terminator(mut self, terminator: char) -> Self {
        self.terminator = Some(terminator);
        self
    }
}

/// Per-category counts over a fragment sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifySummary {
    pub total: usize,
    pub actionable: usize,
    pub tablet_recommendation: usize,
    pub emergency_action: usize,
    pub home_care: usize,
    pub doctor_visit: usize,
    pub general_recommendation: usize,
    pub plain: usize,
}

impl ClassifySummary {
    fn record(&mut self, category: Category) {
        self.total += 1;
        if category.is_actionable() {
            self.actionable += 1;
        }
        let slot = match category {
            Category::TabletRecommendation => &mut self.tablet_recommendation,
            Category::EmergencyAction => &mut self.emergency_action,
            Category::HomeCare => &mut self.home_care,
            Category::DoctorVisit => &mut self.doctor_visit,
            Category::GeneralRecommendation => &mut self.general_recommendation,
            Category::Plain => &mut self.plain,
        };
        *slot += 1;
    }

    /// Whether the response carries an emergency instruction
    pub fn has_emergency(&self) -> bool {
        self.emergency_action > 0
    }
}

/// Count fragments per category
pub fn summarize(fragments: &[Fragment]) -> ClassifySummary {
    let mut summary = ClassifySummary::default();
    for fragment in fragments {
        summary.record(fragment.category);
    }
    summary
}
