// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use bitext_align_engine::models::{AlignedDocument, LanguageSide};

#[allow(dead_code)]
pub fn generate_document(rows: usize) -> AlignedDocument {
    let bn = (0..rows)
        .map(|i| format!("এটি বাংলা বাক্য নম্বর {i}।"))
        .collect();
    let en = (0..rows)
        .map(|i| format!("This is English sentence number {i}."))
        .collect();
    AlignedDocument::new(
        LanguageSide::new("শিরোনাম", bn),
        LanguageSide::new("Title", en),
    )
}
