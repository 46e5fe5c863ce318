use chrono::Local;

use crate::editing::commands::apply_command;
use crate::editing::{
    Caret, CellRef, Cmd, DisplayOrder, HistoryStack, Key, KeyInput, Patch, RenderedView, render,
    sync_view_into,
};
use crate::io::{SessionRecord, SessionStore, StoreError};
use crate::models::{AlignedDocument, Language};

/// How plain text edits are written to history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEditRecording {
    /// A snapshot for every change notification
    EveryChange,
    /// One snapshot per run of consecutive changes to the same cell
    #[default]
    CoalescePerUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    pub order: DisplayOrder,
    pub history_limit: usize,
    pub text_edits: TextEditRecording,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            order: DisplayOrder::default(),
            history_limit: HistoryStack::DEFAULT_CAPACITY,
            text_edits: TextEditRecording::default(),
        }
    }
}

/// What an input event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Split(Patch),
    Merged(Patch),
    Undone,
    NothingToUndo,
    TextEdited,
    /// A structural edit that would run past either end of the side
    Suppressed,
    /// Not a structural key; the front-end edits the text itself
    PassThrough,
}

impl EditOutcome {
    /// Where the caret belongs after a structural edit, in view coordinates
    pub fn caret(&self, order: DisplayOrder) -> Option<Caret> {
        match self {
            EditOutcome::Split(patch) | EditOutcome::Merged(patch) => Some(Caret::new(
                patch.caret_unit,
                order.column_for(patch.side),
                patch.caret_offset,
            )),
            _ => None,
        }
    }
}

/// Owns one alignment session: the live document, its undo history, the display
/// order and the rendered view the user types into.
///
/// Every entry point runs to completion before the next is accepted; callers hold
/// the controller exclusively.
#[derive(Debug, Clone)]
pub struct EditController {
    document: AlignedDocument,
    history: HistoryStack,
    order: DisplayOrder,
    view: RenderedView,
    text_edits: TextEditRecording,
    /// Cell of the text-edit run currently coalesced into one snapshot
    open_text_run: Option<CellRef>,
    version: u64,
}

impl EditController {
    pub fn new(document: AlignedDocument, options: EditorOptions) -> Self {
        let view = render(&document, options.order);
        Self {
            document,
            history: HistoryStack::with_capacity(options.history_limit),
            order: options.order,
            view,
            text_edits: options.text_edits,
            open_text_run: None,
            version: 0,
        }
    }

    pub fn document(&self) -> &AlignedDocument {
        &self.document
    }

    pub fn view(&self) -> &RenderedView {
        &self.view
    }

    pub fn order(&self) -> DisplayOrder {
        self.order
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Dispatch a key press to split, merge or undo.
    ///
    /// Keys that are not structural come back as [`EditOutcome::PassThrough`].
    pub fn handle_key(&mut self, input: KeyInput) -> EditOutcome {
        let caret = input.caret;
        if input.is_undo_combo() {
            return self.undo();
        }
        match input.key {
            Key::Enter if input.modifiers.shift => self.merge_with_next(caret.cell),
            Key::Enter => self.split(caret),
            Key::Backspace if caret.offset == 0 => self.merge_with_previous(caret.cell),
            _ => EditOutcome::PassThrough,
        }
    }

    /// The user changed the text of one cell in the view
    pub fn edit_text(&mut self, cell: CellRef, text: impl Into<String>) -> EditOutcome {
        if self.view.cell(cell).is_none() {
            return EditOutcome::Suppressed;
        }

        let continues_run = self.text_edits == TextEditRecording::CoalescePerUnit
            && self.open_text_run == Some(cell);
        if !continues_run {
            // Earlier typing must be part of the snapshot
            self.sync();
            self.history.record(&self.document);
        }
        self.open_text_run = Some(cell);

        self.view.set_cell(cell, text.into());
        log::trace!("text edit at row {} {:?}", cell.row, cell.column);
        EditOutcome::TextEdited
    }

    /// Split the unit under the caret in two at the caret offset
    pub fn split(&mut self, caret: Caret) -> EditOutcome {
        let cmd = Cmd::Split {
            side: self.language_at(caret.cell),
            index: caret.cell.row,
            offset: caret.offset,
        };
        self.apply_structural(cmd).map_or(EditOutcome::Suppressed, EditOutcome::Split)
    }

    /// Join the unit at `cell` with the one below it
    pub fn merge_with_next(&mut self, cell: CellRef) -> EditOutcome {
        let cmd = Cmd::MergeWithNext {
            side: self.language_at(cell),
            index: cell.row,
        };
        self.apply_structural(cmd).map_or(EditOutcome::Suppressed, EditOutcome::Merged)
    }

    /// Join the unit at `cell` onto the one above it
    pub fn merge_with_previous(&mut self, cell: CellRef) -> EditOutcome {
        let cmd = Cmd::MergeWithPrevious {
            side: self.language_at(cell),
            index: cell.row,
        };
        self.apply_structural(cmd).map_or(EditOutcome::Suppressed, EditOutcome::Merged)
    }

    /// Restore the most recent snapshot.
    ///
    /// Unsynced text in the view is discarded, not pulled into the model first.
    pub fn undo(&mut self) -> EditOutcome {
        self.open_text_run = None;
        match self.history.undo() {
            Some(previous) => {
                self.document = previous;
                self.version += 1;
                self.rerender();
                log::debug!("undo, {} snapshots left", self.history.len());
                EditOutcome::Undone
            }
            None => EditOutcome::NothingToUndo,
        }
    }

    /// Swap which language is shown in the first column
    pub fn toggle_order(&mut self) {
        self.sync();
        self.order = self.order.toggled();
        self.open_text_run = None;
        self.rerender();
        log::debug!("display order now {:?}", self.order);
    }

    /// Pull any text typed into the view into the document
    pub fn sync(&mut self) {
        sync_view_into(&mut self.document, &self.view, self.order);
    }

    /// Replace the live document, starting with an empty history
    pub fn load(&mut self, document: AlignedDocument) {
        self.document = document;
        self.history.clear();
        self.open_text_run = None;
        self.version += 1;
        self.rerender();
    }

    pub fn load_session(&mut self, record: SessionRecord) {
        log::info!("Loading session {} ({})", record.id, record.title);
        self.load(record.data);
    }

    /// Sync and build a record of the current document stamped with the current time
    pub fn session_record(&mut self) -> SessionRecord {
        self.sync();
        SessionRecord::new(self.document.clone(), Local::now())
    }

    /// Save the current document as a new session.
    ///
    /// On failure the document and history are exactly as they were.
    pub fn save_session<S: SessionStore + ?Sized>(
        &mut self,
        store: &mut S,
    ) -> Result<SessionRecord, StoreError> {
        let record = self.session_record();
        store.save(record.clone())?;
        Ok(record)
    }

    fn language_at(&self, cell: CellRef) -> Language {
        self.order.language_for(cell.column)
    }

    fn apply_structural(&mut self, cmd: Cmd) -> Option<Patch> {
        self.open_text_run = None;
        self.sync();
        if !cmd.is_applicable(&self.document) {
            log::debug!("suppressed out-of-range {cmd:?}");
            return None;
        }

        self.history.record(&self.document);
        self.version += 1;
        let patch = apply_command(&mut self.document, &cmd, self.version)?;
        self.rerender();
        log::debug!("applied {cmd:?}");
        Some(patch)
    }

    fn rerender(&mut self) {
        self.view = render(&self.document, self.order);
    }
}
