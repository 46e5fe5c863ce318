mod keys;
mod text;

use anyhow::{Context, Result};
use bitext_align_config::Config;
use bitext_align_engine::{
    AlignedDocument, Caret, CellRef, Column, DisplayOrder, EditController, EditOutcome,
    EditorOptions, JsonSessionStore, SessionRecord, SessionStore, TextEditRecording,
    initial_document, io,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState},
};
use std::{
    env,
    fs::{File, OpenOptions},
    io::stdout,
    path::Path,
    process,
};

const CARET_MARK: char = '▏';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Sessions,
    Editor,
}

struct App {
    store: JsonSessionStore,
    screen: Screen,
    editor: EditController,
    caret: Caret,
    table_state: TableState,
    /// Saved sessions, newest first
    sessions: Vec<SessionRecord>,
    session_list_state: ListState,
    status: String,
    should_quit: bool,
}

impl App {
    fn new(config: &Config) -> Self {
        let options = EditorOptions {
            order: DisplayOrder::from_en_first(config.en_first),
            history_limit: config.history_limit,
            text_edits: if config.coalesce_text_edits {
                TextEditRecording::CoalescePerUnit
            } else {
                TextEditRecording::EveryChange
            },
        };

        let mut app = Self {
            store: JsonSessionStore::new(&config.sessions_path),
            screen: Screen::Sessions,
            editor: EditController::new(AlignedDocument::default(), options),
            caret: Caret::new(0, Column::First, 0),
            table_state: TableState::default(),
            sessions: Vec::new(),
            session_list_state: ListState::default(),
            status: String::new(),
            should_quit: false,
        };
        app.refresh_sessions();
        app
    }

    fn open_document(&mut self, document: AlignedDocument) {
        self.editor.load(document);
        self.caret = Caret::new(0, Column::First, 0);
        self.screen = Screen::Editor;
    }

    fn open_sessions(&mut self) {
        self.refresh_sessions();
        self.screen = Screen::Sessions;
    }

    fn refresh_sessions(&mut self) {
        match self.store.list() {
            Ok(mut sessions) => {
                sessions.reverse();
                self.sessions = sessions;
            }
            Err(e) => {
                log::error!("Failed to list sessions: {e}");
                self.status = format!("Error listing sessions: {e}");
                self.sessions.clear();
            }
        }

        let selected = match self.session_list_state.selected() {
            _ if self.sessions.is_empty() => None,
            Some(i) => Some(i.min(self.sessions.len() - 1)),
            None => Some(0),
        };
        self.session_list_state.select(selected);
    }

    fn next_session(&mut self) {
        if self.sessions.is_empty() {
            return;
        }
        let i = match self.session_list_state.selected() {
            Some(i) => (i + 1) % self.sessions.len(),
            None => 0,
        };
        self.session_list_state.select(Some(i));
    }

    fn previous_session(&mut self) {
        if self.sessions.is_empty() {
            return;
        }
        let i = match self.session_list_state.selected() {
            Some(0) | None => self.sessions.len() - 1,
            Some(i) => i - 1,
        };
        self.session_list_state.select(Some(i));
    }

    fn selected_session(&self) -> Option<&SessionRecord> {
        self.session_list_state
            .selected()
            .and_then(|i| self.sessions.get(i))
    }

    fn load_selected_session(&mut self) {
        if let Some(record) = self.selected_session().cloned() {
            self.status = format!("Loaded \"{}\"", record.title);
            self.editor.load_session(record);
            self.caret = Caret::new(0, Column::First, 0);
            self.screen = Screen::Editor;
        }
    }

    fn delete_selected_session(&mut self) {
        let Some((id, title)) = self
            .selected_session()
            .map(|record| (record.id, record.title.clone()))
        else {
            return;
        };

        match self.store.delete(id) {
            Ok(()) => {
                log::info!("Deleted session {id}");
                self.status = format!("Deleted \"{title}\"");
            }
            Err(e) => {
                log::error!("Failed to delete session {id}: {e}");
                self.status = format!("Delete failed: {e}");
            }
        }
        self.refresh_sessions();
    }

    fn save(&mut self) {
        match self.editor.save_session(&mut self.store) {
            Ok(record) => {
                log::info!("Saved session {} ({})", record.id, record.title);
                self.status = format!("Saved \"{}\"", record.title);
            }
            Err(e) => {
                log::error!("Failed to save session: {e}");
                self.status = format!("Save failed: {e}");
            }
        }
    }

    fn on_sessions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.next_session(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_session(),
            KeyCode::Enter => self.load_selected_session(),
            KeyCode::Char('d') => self.delete_selected_session(),
            _ => {}
        }
    }

    fn on_editor_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return self.open_sessions(),
            KeyCode::Char('q') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('o') if ctrl => {
                self.editor.toggle_order();
                // Keep the caret on the same language
                self.caret.cell.column = self.caret.cell.column.other();
                self.status = format!("{:?} in first column", self.editor.order().first());
                return;
            }
            KeyCode::Char('s') if ctrl => return self.save(),
            KeyCode::Up => return self.move_row(-1),
            KeyCode::Down => return self.move_row(1),
            KeyCode::Left => {
                self.caret.offset = self.caret.offset.saturating_sub(1);
                return;
            }
            KeyCode::Right => {
                self.caret.offset += 1;
                return self.clamp_caret();
            }
            KeyCode::Home => {
                self.caret.offset = 0;
                return;
            }
            KeyCode::End => {
                self.caret.offset = usize::MAX;
                return self.clamp_caret();
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.caret.cell.column = self.caret.cell.column.other();
                return self.clamp_caret();
            }
            _ => {}
        }

        let outcome = self
            .editor
            .handle_key(keys::to_key_input(&key, self.caret));
        match outcome {
            EditOutcome::Split(_) | EditOutcome::Merged(_) => {
                if let Some(caret) = outcome.caret(self.editor.order()) {
                    self.caret = caret;
                }
                self.status.clear();
            }
            EditOutcome::Undone => self.status = "Undone".to_string(),
            EditOutcome::NothingToUndo => self.status = "Nothing to undo".to_string(),
            EditOutcome::PassThrough => self.edit_text_at_caret(&key),
            EditOutcome::Suppressed | EditOutcome::TextEdited => {}
        }
        self.clamp_caret();
    }

    /// Apply a plain typing key to the cell under the caret
    fn edit_text_at_caret(&mut self, key: &KeyEvent) {
        let cell = self.caret.cell;
        let Some(current) = self.editor.view().cell(cell) else {
            return;
        };
        let offset = self.caret.offset;

        let typed = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        let edited = match key.code {
            KeyCode::Char(c) if !typed => Some((text::insert_char(current, offset, c), offset + 1)),
            KeyCode::Backspace => {
                text::remove_char_before(current, offset).map(|edited| (edited, offset - 1))
            }
            KeyCode::Delete => text::remove_char_at(current, offset).map(|edited| (edited, offset)),
            _ => None,
        };

        if let Some((edited, offset)) = edited {
            self.editor.edit_text(cell, edited);
            self.caret.offset = offset;
        }
    }

    fn move_row(&mut self, delta: isize) {
        let row = self.caret.cell.row.saturating_add_signed(delta);
        self.caret.cell.row = row.min(self.editor.view().len().saturating_sub(1));
        self.clamp_caret();
    }

    fn clamp_caret(&mut self) {
        let rows = self.editor.view().len();
        if rows == 0 {
            self.caret = Caret::new(0, self.caret.cell.column, 0);
            return;
        }
        self.caret.cell.row = self.caret.cell.row.min(rows - 1);
        let len = self
            .editor
            .view()
            .cell(self.caret.cell)
            .map(text::char_len)
            .unwrap_or(0);
        self.caret.offset = self.caret.offset.min(len);
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Config location: {}", Config::config_path().display());
            process::exit(1);
        }
    };

    init_logging(&config);

    let mut app = App::new(&config);

    match args.len() {
        1 => {}
        3 => match open_articles(Path::new(&args[1]), Path::new(&args[2])) {
            Ok(document) => app.open_document(document),
            Err(e) => {
                eprintln!("Error: {e:#}");
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage: {} [<bn-article.json> <en-article.json>]", args[0]);
            process::exit(1);
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(config: &Config) {
    let log_path = config.resolved_log_path();

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(log::LevelFilter::Info);
    match open_log_file(&log_path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    let _ = builder.try_init();
}

/// Open the log file for appending, creating its directory first
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Build the starting alignment from two extracted article files
fn open_articles(bn_path: &Path, en_path: &Path) -> Result<AlignedDocument> {
    let bn = io::read_article(bn_path)
        .with_context(|| format!("Failed to open Bengali article {}", bn_path.display()))?;
    let en = io::read_article(en_path)
        .with_context(|| format!("Failed to open English article {}", en_path.display()))?;
    Ok(initial_document(
        &bn.without_boilerplate(),
        &en.without_boilerplate(),
    ))
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    while !app.should_quit {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.screen {
                Screen::Sessions => app.on_sessions_key(key),
                Screen::Editor => app.on_editor_key(key),
            }
        }
    }
    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    match app.screen {
        Screen::Sessions => sessions_ui(f, app, chunks[0]),
        Screen::Editor => editor_ui(f, app, chunks[0]),
    }

    let status = Paragraph::new(Line::from(Span::styled(
        app.status.clone(),
        Style::default().fg(Color::Yellow),
    )));
    f.render_widget(status, chunks[1]);

    let help_text = match app.screen {
        Screen::Sessions => Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k ↓/j: Select | "),
            Span::raw("Enter: Open | d: Delete"),
        ]),
        Screen::Editor => Line::from(vec![
            Span::raw("Enter: Split | "),
            Span::raw("Shift/Alt+Enter: Merge next | "),
            Span::raw("Backspace at start: Merge previous | "),
            Span::raw("^Z: Undo | ^O: Swap | ^S: Save | Esc: Sessions | ^Q: Quit"),
        ]),
    };
    f.render_widget(Paragraph::new(vec![help_text]), chunks[2]);
}

fn sessions_ui(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Saved sessions");

    if app.sessions.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from("No saved sessions yet."),
            Line::from(""),
            Line::from("Start one with: bitext-align-cli <bn-article.json> <en-article.json>"),
        ])
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .sessions
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    record.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(record.date.clone(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, area, &mut app.session_list_state);
}

fn editor_ui(f: &mut Frame, app: &mut App, area: Rect) {
    let view = app.editor.view();
    // Row numbers, borders and column spacing
    let text_width = (area.width.saturating_sub(10) / 2).max(1) as usize;

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from(view.first_heading.clone()),
        Cell::from(view.second_heading.clone()),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let rows: Vec<Row> = view
        .pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| {
            let mut height = 1;
            let mut cells = vec![Cell::from(format!("{}", i + 1))];
            for column in [Column::First, Column::Second] {
                let cell_ref = CellRef::new(i, column);
                let active = cell_ref == app.caret.cell;
                let mut content = pair.get(column).to_string();
                if active {
                    content = text::insert_char(&content, app.caret.offset, CARET_MARK);
                }
                let lines = text::wrap(&content, text_width);
                height = height.max(lines.len());

                let style = if active {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                cells.push(Cell::from(Text::raw(lines.join("\n"))).style(style));
            }
            Row::new(cells).height(height as u16)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Percentage(48),
        Constraint::Percentage(48),
    ];
    let title = format!(
        "Alignment ({} rows, {} undo steps)",
        view.len(),
        app.editor.history().len()
    );
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Style::default().bg(Color::DarkGray));

    app.table_state.select(if view.is_empty() {
        None
    } else {
        Some(app.caret.cell.row)
    });
    f.render_stateful_widget(table, area, &mut app.table_state);
}
