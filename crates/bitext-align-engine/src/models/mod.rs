pub mod article;
pub mod document;

pub use article::Article;
pub use document::{AlignedDocument, Language, LanguageSide, Snapshot};
