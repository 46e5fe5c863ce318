//! Sentence splitting used to build the initial alignment.
//!
//! Each language gets its own boundary rule. Bengali prose ends sentences with the
//! dari (`।`), English with `.`, `!` or `?`. The result is always a sequence of
//! trimmed, non-empty units.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{AlignedDocument, Article, Language, LanguageSide};

static BENGALI_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[।!]+").expect("static regex"));

static ENGLISH_SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("static regex"));

/// Split joined paragraph text into sentence units for `language`
pub fn tokenize(language: Language, paragraphs: &[String]) -> Vec<String> {
    let text = paragraphs.join(" ");
    match language {
        Language::Bn => split_bengali(&text),
        Language::En => split_english(&text),
    }
}

/// Build the starting document for a new session from two extracted articles
pub fn initial_document(bn: &Article, en: &Article) -> AlignedDocument {
    let document = AlignedDocument::new(
        LanguageSide::new(bn.heading.clone(), tokenize(Language::Bn, &bn.paragraphs)),
        LanguageSide::new(en.heading.clone(), tokenize(Language::En, &en.paragraphs)),
    );
    log::info!(
        "initialized alignment with {} bn and {} en units",
        document.bn.units.len(),
        document.en.units.len()
    );
    document
}

fn split_bengali(text: &str) -> Vec<String> {
    // Bracketed asides become units of their own
    let text = text.replace('[', "। [").replace(']', "] ।");
    BENGALI_BOUNDARY
        .split(&text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// Text after the last terminal has no sentence end and is dropped
fn split_english(text: &str) -> Vec<String> {
    ENGLISH_SENTENCE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn paras(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case(&["Hello world. Bye."], &["Hello world.", "Bye."])]
    #[case(&["Is it? Yes!", "Fine..."], &["Is it?", "Yes!", "Fine..."])]
    #[case(&["No terminal here"], &[])]
    #[case(&["One. Dangling tail"], &["One."])]
    #[case(&[], &[])]
    fn test_english_sentences(#[case] input: &[&str], #[case] expected: &[&str]) {
        assert_eq!(tokenize(Language::En, &paras(input)), paras(expected));
    }

    #[test]
    fn test_english_joins_paragraphs_with_space() {
        let units = tokenize(Language::En, &paras(&["First.", "Second."]));
        assert_eq!(units, paras(&["First.", "Second."]));
    }

    #[rstest]
    #[case(&["ওহে বিশ্ব। বিদায়।"], &["ওহে বিশ্ব", "বিদায়"])]
    #[case(&["এক!! দুই।।তিন"], &["এক", "দুই", "তিন"])]
    #[case(&["আগে [টীকা] পরে।"], &["আগে", "[টীকা]", "পরে"])]
    #[case(&["।।"], &[])]
    fn test_bengali_sentences(#[case] input: &[&str], #[case] expected: &[&str]) {
        assert_eq!(tokenize(Language::Bn, &paras(input)), paras(expected));
    }

    #[test]
    fn test_initial_document_copies_headings() {
        let bn = Article::new("শিরোনাম", paras(&["এক। দুই।"]));
        let en = Article::new("Title", paras(&["One. Two. Three."]));

        let doc = initial_document(&bn, &en);

        assert_eq!(doc.bn.heading, "শিরোনাম");
        assert_eq!(doc.en.heading, "Title");
        assert_eq!(doc.bn.units.len(), 2);
        assert_eq!(doc.en.units.len(), 3);
    }
}
