use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::{AlignedDocument, Article};

/// Longest session title, in chars, taken from the English heading
pub const TITLE_MAX_CHARS: usize = 50;

pub const UNTITLED_SESSION: &str = "Untitled Session";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON error at {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ArticleError {
    #[error("Failed to read article at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse article at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A saved alignment session. Never modified once saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Creation time in milliseconds since the Unix epoch
    pub id: i64,
    pub title: String,
    /// Human readable creation time
    pub date: String,
    pub data: AlignedDocument,
}

impl SessionRecord {
    pub fn new(data: AlignedDocument, now: DateTime<Local>) -> Self {
        Self {
            id: now.timestamp_millis(),
            title: session_title(&data.en.heading),
            date: now.format(DATE_FORMAT).to_string(),
            data,
        }
    }
}

/// Title derived from the English heading, bounded to [`TITLE_MAX_CHARS`]
pub fn session_title(en_heading: &str) -> String {
    let heading = en_heading.trim();
    if heading.is_empty() {
        UNTITLED_SESSION.to_string()
    } else {
        heading.chars().take(TITLE_MAX_CHARS).collect()
    }
}

/// Storage for named document snapshots that can be resumed later
pub trait SessionStore {
    /// All records in the order they were saved
    fn list(&self) -> Result<Vec<SessionRecord>, StoreError>;

    fn save(&mut self, record: SessionRecord) -> Result<(), StoreError>;

    /// Remove the record with `id`; unknown ids are ignored
    fn delete(&mut self, id: i64) -> Result<(), StoreError>;

    fn get(&self, id: i64) -> Result<Option<SessionRecord>, StoreError> {
        Ok(self.list()?.into_iter().find(|record| record.id == id))
    }
}

/// Keeps every session in one JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonSessionStore {
    path: PathBuf,
}

impl JsonSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&self, records: &[SessionRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        write_atomic(&self.path, json.as_bytes())
    }
}

impl SessionStore for JsonSessionStore {
    fn list(&self) -> Result<Vec<SessionRecord>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable session file {}: {e}",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, record: SessionRecord) -> Result<(), StoreError> {
        let mut records = self.list()?;
        log::info!("Saving session {} ({})", record.id, record.title);
        records.push(record);
        self.write_all(&records)
    }

    fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        let mut records = self.list()?;
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            log::debug!("No session {id} to delete");
            return Ok(());
        }
        log::info!("Deleting session {id}");
        self.write_all(&records)
    }
}

/// In-process store, used when nothing should touch the disk
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    records: Vec<SessionRecord>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn list(&self) -> Result<Vec<SessionRecord>, StoreError> {
        Ok(self.records.clone())
    }

    fn save(&mut self, record: SessionRecord) -> Result<(), StoreError> {
        self.records.push(record);
        Ok(())
    }

    fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        self.records.retain(|record| record.id != id);
        Ok(())
    }
}

/// Read an extracted article from a JSON file
pub fn read_article(path: &Path) -> Result<Article, ArticleError> {
    let content = fs::read_to_string(path).map_err(|source| ArticleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let article: Article = serde_json::from_str(&content).map_err(|source| ArticleError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Article::new(article.heading, article.paragraphs))
}

/// Write through a sibling temp file and rename into place
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)
}
