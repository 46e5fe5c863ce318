use serde::{Deserialize, Serialize};

/// Markers of bylines and footers that are not part of the article body
const BOILERPLATE_MARKERS: &[&str] = &[
    "the writer is",
    "executive editor",
    "লেখক:",
    "নির্বাহী সম্পাদক",
];

const RULE_MARKER: &str = "__________________________";

/// One extracted article rendition: the shape handed over by an extractor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

impl Article {
    /// Heading used when the source page had none
    pub const MISSING_HEADING: &'static str = "Heading not found";

    pub fn new(heading: impl Into<String>, paragraphs: Vec<String>) -> Self {
        let heading = heading.into();
        let heading = if heading.trim().is_empty() {
            Self::MISSING_HEADING.to_string()
        } else {
            heading
        };
        Self {
            heading,
            paragraphs,
        }
    }

    /// Trim paragraphs and drop empty ones along with bylines and footer rules
    pub fn without_boilerplate(self) -> Self {
        let paragraphs = self
            .paragraphs
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty() && !is_boilerplate(p))
            .collect();
        Self {
            heading: self.heading,
            paragraphs,
        }
    }
}

fn is_boilerplate(paragraph: &str) -> bool {
    let lowered = paragraph.to_lowercase();
    BOILERPLATE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
        || paragraph.contains(RULE_MARKER)
}
