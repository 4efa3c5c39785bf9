use std::io;

use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use super::storage::{self, HistoryEntry, MAX_HISTORY_ENTRIES};

/// Creates a TextArea configured for the history search input.
fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea
}

/// State of the history tab: the persisted log plus filter and selection.
///
/// Design note on `persist_to_disk`:
/// This flag lets tests run against in-memory-only history without touching
/// the real history file. Trait-based injection would be more "proper" but
/// adds complexity a single-user tool doesn't need.
pub struct HistoryState {
    entries: Vec<HistoryEntry>,
    filtered_indices: Vec<usize>,
    search_textarea: TextArea<'static>,
    selected_index: usize,
    /// Controls whether history is persisted to disk (false in tests)
    persist_to_disk: bool,
    /// Armed by the clear keybinding; the next `y` wipes the log
    pub confirm_clear: bool,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryState {
    /// Creates a new HistoryState and loads the log from disk.
    pub fn new() -> Self {
        let entries = storage::load_history();
        let filtered_indices = (0..entries.len()).collect();

        Self {
            entries,
            filtered_indices,
            search_textarea: create_search_textarea(),
            selected_index: 0,
            persist_to_disk: true,
            confirm_clear: false,
        }
    }

    /// Creates an empty HistoryState that never writes to disk (for tests).
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            filtered_indices: Vec::new(),
            search_textarea: create_search_textarea(),
            selected_index: 0,
            persist_to_disk: false,
            confirm_clear: false,
        }
    }

    /// Record a completed translation at the head of the log.
    ///
    /// The in-memory log always updates; a persistence error is returned so
    /// the caller can surface a warning while history keeps working for the
    /// current session.
    pub fn record(&mut self, source: &str, translation: &str) -> io::Result<()> {
        self.entries.insert(0, HistoryEntry::new(source, translation));
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        self.update_filter();

        self.persist()
    }

    /// Delete the currently selected entry. Returns false if nothing was
    /// selected.
    pub fn delete_selected(&mut self) -> io::Result<bool> {
        let Some(&entry_index) = self.filtered_indices.get(self.selected_index) else {
            return Ok(false);
        };

        self.entries.remove(entry_index);
        self.update_filter();

        self.persist().map(|_| true)
    }

    /// Wipe the whole log. Callers are expected to have confirmed first.
    pub fn clear(&mut self) -> io::Result<()> {
        self.entries.clear();
        self.confirm_clear = false;
        self.update_filter();

        self.persist()
    }

    /// Returns the current search needle.
    pub fn search_query(&self) -> &str {
        self.search_textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Returns a mutable reference to the search TextArea for input handling.
    pub fn search_textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.search_textarea
    }

    /// The search TextArea for rendering.
    pub fn search_textarea(&self) -> &TextArea<'static> {
        &self.search_textarea
    }

    /// Called after TextArea input to refresh the filter.
    pub fn on_search_input_changed(&mut self) {
        self.update_filter();
        self.selected_index = 0;
    }

    /// Selects the next entry in the filtered list, wrapping at the end.
    pub fn select_next(&mut self) {
        if !self.filtered_indices.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.filtered_indices.len();
        }
    }

    /// Selects the previous entry in the filtered list, wrapping at the top.
    pub fn select_previous(&mut self) {
        if !self.filtered_indices.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.filtered_indices.len() - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    /// Returns the currently selected entry, if any.
    pub fn selected_entry(&self) -> Option<&HistoryEntry> {
        self.filtered_indices
            .get(self.selected_index)
            .and_then(|&idx| self.entries.get(idx))
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Total number of entries (unfiltered).
    pub fn total_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries matching the current filter.
    pub fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Iterator over the filtered entries in display order.
    pub fn filtered_entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.filtered_indices
            .iter()
            .filter_map(|&idx| self.entries.get(idx))
    }

    /// Case-insensitive substring match against source or translation.
    /// An empty needle keeps every entry.
    fn update_filter(&mut self) {
        let needle = self.search_query().to_lowercase();
        self.filtered_indices = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                needle.is_empty()
                    || e.source.to_lowercase().contains(&needle)
                    || e.translation.to_lowercase().contains(&needle)
            })
            .map(|(i, _)| i)
            .collect();

        if self.selected_index >= self.filtered_indices.len() {
            self.selected_index = self.filtered_indices.len().saturating_sub(1);
        }
    }

    fn persist(&self) -> io::Result<()> {
        if !self.persist_to_disk {
            return Ok(());
        }
        storage::save_history(&self.entries)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
