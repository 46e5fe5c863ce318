use crate::models::Language;

/// Result of applying a structural command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Side whose unit sequence changed
    pub side: Language,
    /// Unit indices holding the new units after the edit
    pub changed: std::ops::Range<usize>,
    /// Unit index and char offset where the caret belongs after re-render
    pub caret_unit: usize,
    pub caret_offset: usize,
    pub version: u64,
}
