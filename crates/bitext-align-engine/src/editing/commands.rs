use crate::editing::Patch;
use crate::models::{AlignedDocument, Language};

/// Separator inserted between two units when they are merged
pub const MERGE_SEPARATOR: &str = " ";

/// Structural edits applied to one side of an [`AlignedDocument`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Replace `units[index]` with the text before and from `offset` (in chars)
    Split {
        side: Language,
        index: usize,
        offset: usize,
    },
    /// Join `units[index]` and `units[index + 1]`
    MergeWithNext { side: Language, index: usize },
    /// Join `units[index - 1]` and `units[index]`
    MergeWithPrevious { side: Language, index: usize },
}

impl Cmd {
    pub fn side(&self) -> Language {
        match self {
            Cmd::Split { side, .. }
            | Cmd::MergeWithNext { side, .. }
            | Cmd::MergeWithPrevious { side, .. } => *side,
        }
    }

    /// Whether the command stays inside the side's unit range
    pub fn is_applicable(&self, doc: &AlignedDocument) -> bool {
        let len = doc.side(self.side()).units.len();
        match *self {
            Cmd::Split { index, .. } => index < len,
            Cmd::MergeWithNext { index, .. } => index + 1 < len,
            Cmd::MergeWithPrevious { index, .. } => index > 0 && index < len,
        }
    }
}

/// Apply `cmd` to `doc`.
///
/// Out-of-range commands leave the document untouched and return `None`.
pub(crate) fn apply_command(doc: &mut AlignedDocument, cmd: &Cmd, version: u64) -> Option<Patch> {
    if !cmd.is_applicable(doc) {
        return None;
    }

    let units = &mut doc.side_mut(cmd.side()).units;
    let patch = match *cmd {
        Cmd::Split { side, index, offset } => {
            let (before, after) = split_at_char(&units[index], offset);
            units[index] = before;
            units.insert(index + 1, after);
            Patch {
                side,
                changed: index..index + 2,
                caret_unit: index + 1,
                caret_offset: 0,
                version,
            }
        }
        Cmd::MergeWithNext { side, index } => {
            let caret_offset = units[index].chars().count();
            let next = units.remove(index + 1);
            units[index] = join_units(&units[index], &next);
            Patch {
                side,
                changed: index..index + 1,
                caret_unit: index,
                caret_offset,
                version,
            }
        }
        Cmd::MergeWithPrevious { side, index } => {
            let caret_offset = units[index - 1].chars().count() + MERGE_SEPARATOR.len();
            let current = units.remove(index);
            units[index - 1] = join_units(&units[index - 1], &current);
            Patch {
                side,
                changed: index - 1..index,
                caret_unit: index - 1,
                caret_offset,
                version,
            }
        }
    };
    Some(patch)
}

/// Split `text` at a char offset, clamped to the text length
pub fn split_at_char(text: &str, offset: usize) -> (String, String) {
    let byte = text
        .char_indices()
        .nth(offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let (before, after) = text.split_at(byte);
    (before.to_string(), after.to_string())
}

pub fn join_units(left: &str, right: &str) -> String {
    let mut merged = String::with_capacity(left.len() + MERGE_SEPARATOR.len() + right.len());
    merged.push_str(left);
    merged.push_str(MERGE_SEPARATOR);
    merged.push_str(right);
    merged
}
