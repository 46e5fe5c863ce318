//! Presentation-neutral input events.
//!
//! A front-end translates its own key and text events into these types and hands
//! them to [`EditController`](crate::editing::EditController).

/// Physical column of the rendered pair list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    First,
    Second,
}

impl Column {
    pub fn other(self) -> Self {
        match self {
            Column::First => Column::Second,
            Column::Second => Column::First,
        }
    }
}

/// One editable cell of the rendered view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: usize,
    pub column: Column,
}

impl CellRef {
    pub fn new(row: usize, column: Column) -> Self {
        Self { row, column }
    }
}

/// Cursor position inside a cell.
///
/// `offset` counts chars (Unicode scalar values), not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caret {
    pub cell: CellRef,
    pub offset: usize,
}

impl Caret {
    pub fn new(row: usize, column: Column, offset: usize) -> Self {
        Self {
            cell: CellRef::new(row, column),
            offset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        meta: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
        meta: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        shift: false,
        ctrl: true,
        meta: false,
    };
}

/// A discrete key press reported by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
    pub caret: Caret,
}

impl KeyInput {
    pub fn new(key: Key, modifiers: Modifiers, caret: Caret) -> Self {
        Self {
            key,
            modifiers,
            caret,
        }
    }

    pub fn is_undo_combo(&self) -> bool {
        (self.modifiers.ctrl || self.modifiers.meta) && matches!(self.key, Key::Char('z'))
    }
}
