pub mod editing;
pub mod io;
pub mod models;
pub mod tokenize;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{
    Caret, CellRef, Column, DisplayOrder, EditController, EditOutcome, EditorOptions, Key,
    KeyInput, Modifiers, RenderedView, TextEditRecording, UnitPair,
};
pub use io::{JsonSessionStore, MemorySessionStore, SessionRecord, SessionStore, StoreError};
pub use models::{AlignedDocument, Article, Language, LanguageSide};
pub use tokenize::initial_document;
