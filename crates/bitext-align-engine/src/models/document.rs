use serde::{Deserialize, Serialize};

/// The two language slots of an alignment session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Bn,
    En,
}

impl Language {
    pub fn other(self) -> Self {
        match self {
            Language::Bn => Language::En,
            Language::En => Language::Bn,
        }
    }
}

/// One language rendition of the article: its heading plus ordered units
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSide {
    pub heading: String,
    /// `units[i]` is intended to correspond to `units[i]` of the other side
    #[serde(alias = "sentences")]
    pub units: Vec<String>,
}

impl LanguageSide {
    pub fn new(heading: impl Into<String>, units: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            units,
        }
    }
}

/// The live alignment model: two parallel unit sequences plus headings.
///
/// The two sequences are allowed to have different lengths at any time. Readers
/// treat a missing index on either side as an empty unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedDocument {
    pub bn: LanguageSide,
    pub en: LanguageSide,
}

impl AlignedDocument {
    pub fn new(bn: LanguageSide, en: LanguageSide) -> Self {
        Self { bn, en }
    }

    pub fn side(&self, language: Language) -> &LanguageSide {
        match language {
            Language::Bn => &self.bn,
            Language::En => &self.en,
        }
    }

    pub fn side_mut(&mut self, language: Language) -> &mut LanguageSide {
        match language {
            Language::Bn => &mut self.bn,
            Language::En => &mut self.en,
        }
    }

    /// Unit text at `index`, or `""` past the end of that side
    pub fn unit(&self, language: Language, index: usize) -> &str {
        self.side(language)
            .units
            .get(index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Number of aligned rows needed to show both sides
    pub fn row_count(&self) -> usize {
        self.bn.units.len().max(self.en.units.len())
    }

    /// Take an independent copy of the whole document
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.clone())
    }
}

/// A point-in-time copy of an [`AlignedDocument`].
///
/// Owns its data outright, so mutating the live document never reaches into a
/// snapshot that was taken earlier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(AlignedDocument);

impl Snapshot {
    pub fn document(&self) -> &AlignedDocument {
        &self.0
    }

    /// Turn the snapshot back into a live document
    pub fn restore(self) -> AlignedDocument {
        self.0
    }
}
