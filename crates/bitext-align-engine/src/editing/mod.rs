/*!
 * # Alignment Editing Core
 *
 * Everything needed to fix up a sentence alignment interactively, independent of any
 * rendering environment.
 *
 * ## Architecture Overview
 *
 * ### 1. Model and View
 * - The **`AlignedDocument`** holds the two unit sequences and headings
 * - The **`RenderedView`** is what the user types into: one editable pair per row
 * - Typed text lands in the view first and reaches the model only through
 *   **`sync_view_into`**, which runs before structural edits, order toggles, saves
 *   and the first snapshot of each run of text edits
 *
 * ### 2. Structural Commands
 * - Split and merge are **`Cmd`** values applied to one language side
 * - Commands that would run past either end of a side are suppressed, not errors
 * - Merging always joins with a single space, so split-then-merge is not lossless
 *
 * ### 3. Bounded Undo
 * - **`HistoryStack`** keeps at most 20 snapshots by default, evicting the oldest
 * - A snapshot is recorded right before every mutating action except undo itself
 *
 * ### 4. Display Order
 * - **`DisplayOrder`** decides which language lands in the first column
 * - Toggling never touches document data or history
 *
 * ## Module Structure
 *
 * - **`controller`**: `EditController`, the split/merge/undo state machine
 * - **`commands`**: `Cmd` enum and how each command rewrites a unit sequence
 * - **`history`**: bounded snapshot log
 * - **`input`**: presentation-neutral keys, cells and carets
 * - **`order`**: column to language mapping
 * - **`render`**: document to view
 * - **`sync`**: view to document
 * - **`patch`**: result metadata of a structural command
 *
 * ## Usage Pattern
 *
 * ```rust
 * use bitext_align_engine::editing::*;
 * use bitext_align_engine::models::{AlignedDocument, LanguageSide};
 *
 * let doc = AlignedDocument::new(
 *     LanguageSide::new("শিরোনাম", vec!["ওহে বিশ্ব।".into()]),
 *     LanguageSide::new("Title", vec!["Hello world.".into()]),
 * );
 * let mut editor = EditController::new(doc, EditorOptions::default());
 *
 * // Enter at offset 5 of the English cell
 * let input = KeyInput::new(Key::Enter, Modifiers::NONE, Caret::new(0, Column::First, 5));
 * editor.handle_key(input);
 * assert_eq!(editor.view().len(), 2);
 *
 * editor.undo();
 * assert_eq!(editor.view().len(), 1);
 * ```
 */

pub mod commands;
pub mod controller;
pub mod history;
pub mod input;
pub mod order;
pub mod patch;
pub mod render;
pub mod sync;

pub use commands::Cmd;
pub use controller::{EditController, EditOutcome, EditorOptions, TextEditRecording};
pub use history::HistoryStack;
pub use input::{Caret, CellRef, Column, Key, KeyInput, Modifiers};
pub use order::DisplayOrder;
pub use patch::Patch;
pub use render::{RenderedView, UnitPair, render};
pub use sync::sync_view_into;
