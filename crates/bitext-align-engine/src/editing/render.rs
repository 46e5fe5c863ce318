//! Rendered view of an alignment: one editable pair of plain-text cells per row.
//!
//! The view is rebuilt from scratch on every render, so rendering the same document
//! in the same order always produces an identical view.

use crate::editing::{CellRef, Column, DisplayOrder};
use crate::models::AlignedDocument;

/// One row of the rendered view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitPair {
    pub first: String,
    pub second: String,
}

impl UnitPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::First => &self.first,
            Column::Second => &self.second,
        }
    }

    pub fn get_mut(&mut self, column: Column) -> &mut String {
        match column {
            Column::First => &mut self.first,
            Column::Second => &mut self.second,
        }
    }
}

/// What the presentation layer shows and lets the user type into
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedView {
    pub first_heading: String,
    pub second_heading: String,
    pub pairs: Vec<UnitPair>,
}

impl RenderedView {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn cell(&self, cell: CellRef) -> Option<&str> {
        self.pairs.get(cell.row).map(|pair| pair.get(cell.column))
    }

    /// Overwrite one cell's text, returning false when the cell does not exist
    pub(crate) fn set_cell(&mut self, cell: CellRef, text: String) -> bool {
        match self.pairs.get_mut(cell.row) {
            Some(pair) => {
                *pair.get_mut(cell.column) = text;
                true
            }
            None => false,
        }
    }

    /// Texts of one column, top to bottom
    pub fn column(&self, column: Column) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(move |pair| pair.get(column))
    }
}

/// Build the view for `doc` with the column layout given by `order`.
///
/// Emits one pair per row of the longer side; the shorter side is padded with
/// empty cells.
pub fn render(doc: &AlignedDocument, order: DisplayOrder) -> RenderedView {
    let first = doc.side(order.first());
    let second = doc.side(order.second());

    let pairs = (0..doc.row_count())
        .map(|i| {
            UnitPair::new(
                first.units.get(i).cloned().unwrap_or_default(),
                second.units.get(i).cloned().unwrap_or_default(),
            )
        })
        .collect();

    RenderedView {
        first_heading: first.heading.clone(),
        second_heading: second.heading.clone(),
        pairs,
    }
}
