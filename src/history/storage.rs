use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Most entries the log keeps; older entries fall off the end.
pub const MAX_HISTORY_ENTRIES: usize = 50;

const HISTORY_DIR: &str = "ibani";
const HISTORY_FILE: &str = "history.json";

/// A single recorded translation, newest entries first in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub source: String,
    pub translation: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Build a new entry stamped with the current time and a fresh id.
    pub fn new(source: &str, translation: &str) -> Self {
        Self {
            id: generate_id(),
            source: source.to_string(),
            translation: translation.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Generate an id for a new entry.
///
/// Epoch milliseconds plus a process-local counter, so entries recorded in
/// the same millisecond (a batch completion) still get distinct ids.
fn generate_id() -> String {
    static SEQUENCE: AtomicU64 = AtomicU64::new(0);
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", Utc::now().timestamp_millis(), seq)
}

pub fn history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(HISTORY_DIR).join(HISTORY_FILE))
}

pub fn load_history() -> Vec<HistoryEntry> {
    match history_path() {
        Some(path) => load_from(&path),
        None => Vec::new(),
    }
}

/// A missing, unreadable, or corrupt file loads as an empty log.
pub fn load_from(path: &Path) -> Vec<HistoryEntry> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return Vec::new(),
    };

    serde_json::from_reader(BufReader::new(file)).unwrap_or_default()
}

/// No file locking - last writer wins if multiple instances run simultaneously.
pub fn save_history(entries: &[HistoryEntry]) -> io::Result<()> {
    let Some(path) = history_path() else {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine history file path",
        ));
    };

    save_to(&path, entries)
}

pub fn save_to(path: &Path, entries: &[HistoryEntry]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let unique_entries = deduplicate_by_id(entries);
    let trimmed = trim_to_max(&unique_entries);

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, &trimmed)?;
    writer.flush()?;

    Ok(())
}

/// Removes entries with duplicate ids, keeping the first (newest) occurrence.
fn deduplicate_by_id(entries: &[HistoryEntry]) -> Vec<HistoryEntry> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|e| seen.insert(e.id.as_str()))
        .cloned()
        .collect()
}

/// Trims the entries to the maximum allowed size.
fn trim_to_max(entries: &[HistoryEntry]) -> Vec<HistoryEntry> {
    entries.iter().take(MAX_HISTORY_ENTRIES).cloned().collect()
}
