mod file_ops;

use std::{collections::VecDeque, fmt, path::PathBuf};

use self::file_ops::FileOps;

/// Maximum number of history entries kept in memory and on disk.
pub const HIST_MAX: usize = 4096;

/// File name of the history file inside the home directory.
pub const HIST_FILE: &str = ".simple_shell_history";

#[derive(Debug)]
pub enum HistoryError {
    Read(PathBuf, std::io::Error),
    Write(PathBuf, std::io::Error),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Read(path, e) => {
                write!(f, "cannot read history file {}: {}", path.display(), e)
            }
            HistoryError::Write(path, e) => {
                write!(f, "cannot write history file {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for HistoryError {}

/// Input lines in the order they were entered, oldest first.
pub struct History {
    entries: VecDeque<String>,
    file_ops: Option<FileOps>,
    max_entries: usize,
}

impl History {
    /// Loads the history stored at `history_file`.
    pub fn new(history_file: PathBuf, max_entries: usize) -> Result<Self, HistoryError> {
        let file_ops = FileOps::new(history_file);
        let entries = file_ops.load_entries(max_entries)?;

        Ok(History {
            entries,
            file_ops: Some(file_ops),
            max_entries,
        })
    }

    /// A history that is never persisted.
    pub fn in_memory(max_entries: usize) -> Self {
        History {
            entries: VecDeque::new(),
            file_ops: None,
            max_entries,
        }
    }

    /// Records `entry` unless it is blank. Returns whether it was recorded.
    pub fn add(&mut self, entry: &str) -> bool {
        let entry = entry.trim_end_matches(['\n', '\r']);
        if entry.trim().is_empty() {
            return false;
        }

        self.entries.push_back(entry.to_owned());
        self.trim_entries();
        true
    }

    /// Entries paired with their 1-based position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (index + 1, entry.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes every entry back to the history file, replacing its contents.
    pub fn save(&self) -> Result<(), HistoryError> {
        match &self.file_ops {
            Some(file_ops) => {
                log::debug!(
                    "history event=save entries={} path={}",
                    self.entries.len(),
                    file_ops.path().display()
                );
                file_ops.write_entries(self.entries.iter().map(String::as_str))
            }
            None => Ok(()),
        }
    }

    fn trim_entries(&mut self) {
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }
}
