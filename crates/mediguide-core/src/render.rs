//! Fragment rendering
//!
//! Maps a classified fragment to its glyph/label presentation. Sinks decide
//! how to lay it out; `Display` gives a plain-text line and `to_html` the
//! action-item markup used by the web frontend.

use serde::Serialize;

use crate::classify::{Category, Fragment};

/// Terminator appended to plain statements that had none in the source
const DEFAULT_TERMINATOR: char = '.';

/// A fragment ready to be appended to a sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedFragment {
    pub category: Category,
    pub glyph: Option<&'static str>,
    pub label: Option<&'static str>,
    pub text: String,
}

impl RenderedFragment {
    /// `glyph label` heading, `None` for plain statements
    pub fn heading(&self) -> Option<String> {
        match (self.glyph, self.label) {
            (Some(glyph), Some(label)) => Some(format!("{} {}", glyph, label)),
            (None, Some(label)) => Some(label.to_string()),
            _ => None,
        }
    }

    /// Action-item markup; plain statements become paragraphs
    pub fn to_html(&self) -> String {
        let text = escape_html(&self.text);
        match (self.category.css_class(), self.heading()) {
            (Some(class), Some(heading)) => format!(
                "<div class=\"action-item {}\"><strong>{}</strong> {}</div>",
                class, heading, text
            ),
            _ => format!("<p>{}</p>", text),
        }
    }
}

impl std::fmt::Display for RenderedFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.heading() {
            Some(heading) => write!(f, "{} {}", heading, self.text),
            None => write!(f, "{}", self.text),
        }
    }
}

/// Render one fragment
pub fn render(fragment: &Fragment) -> RenderedFragment {
    let category = fragment.category;
    let text = match category {
        Category::Plain => {
            let terminator = fragment.terminator.unwrap_or(DEFAULT_TERMINATOR);
            format!("{}{}", fragment.content, terminator)
        }
        _ => fragment.content.clone(),
    };

    RenderedFragment {
        category,
        glyph: category.glyph(),
        label: category.label(),
        text,
    }
}

/// Render a whole sequence as one HTML string, in order
pub fn render_html(fragments: &[Fragment]) -> String {
    fragments.iter().map(|f| render(f).to_html()).collect()
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_actionable_text() {
        let rendered = render(&Fragment::new(
            Category::TabletRecommendation,
            "Take paracetamol tablet for fever",
        ));
        assert_eq!(
            rendered.to_string(),
            "💊 Tablet Recommendation: Take paracetamol tablet for fever"
        );
    }

    #[test]
    fn test_doctor_visit_label() {
        let rendered = render(&Fragment::new(Category::DoctorVisit, "See a doctor if it hurts"));
        assert_eq!(rendered.heading().unwrap(), "👨‍⚕️ When to See Doctor:");
    }

    #[test]
    fn test_plain_reappends_terminator() {
        let plain = render(&Fragment::new(Category::Plain, "Fever is common"));
        assert_eq!(plain.to_string(), "Fever is common.");
        assert_eq!(plain.heading(), None);

        let question =
            render(&Fragment::new(Category::Plain, "Feeling better").with_terminator('?'));
        assert_eq!(question.text, "Feeling better?");
    }

    #[test]
    fn test_actionable_keeps_content_verbatim() {
        let rendered =
            render(&Fragment::new(Category::HomeCare, "Drink water").with_terminator('!'));
        assert_eq!(rendered.text, "Drink water");
    }

    #[test]
    fn test_html_markup() {
        let html = render_html(&[
            Fragment::new(Category::EmergencyAction, "Call an ambulance"),
            Fragment::new(Category::Plain, "Stay <calm> & seated"),
        ]);
        assert_eq!(
            html,
            "<div class=\"action-item emergency\"><strong>🚨 Emergency Action:</strong> Call an ambulance</div>\
             <p>Stay &lt;calm&gt; &amp; seated.</p>"
        );
    }

    #[test]
    fn test_empty_sequence_html() {
        assert_eq!(render_html(&[]), "");
    }
}
