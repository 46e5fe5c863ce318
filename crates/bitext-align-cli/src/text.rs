//! Char-offset text editing for cells, matching the engine's caret offsets.

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn byte_at(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

pub fn insert_char(text: &str, offset: usize, c: char) -> String {
    let mut edited = text.to_string();
    edited.insert(byte_at(text, offset), c);
    edited
}

/// Remove the char before `offset`; `None` at the start of the text
pub fn remove_char_before(text: &str, offset: usize) -> Option<String> {
    let offset = offset.min(char_len(text));
    if offset == 0 {
        return None;
    }
    let mut edited = text.to_string();
    edited.remove(byte_at(text, offset - 1));
    Some(edited)
}

/// Remove the char at `offset`; `None` at the end of the text
pub fn remove_char_at(text: &str, offset: usize) -> Option<String> {
    if offset >= char_len(text) {
        return None;
    }
    let mut edited = text.to_string();
    edited.remove(byte_at(text, offset));
    Some(edited)
}

/// Hard-wrap into lines of at most `width` chars. Always yields at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
