use std::fmt;
use std::path::PathBuf;

use super::aliases::AliasManager;
use super::env::EnvVarManager;
use crate::input::history::History;

/// Everything one shell session carries from line to line.
pub struct ShellState {
    /// Program name used to prefix diagnostics.
    pub program: String,
    pub env: EnvVarManager,
    pub aliases: AliasManager,
    pub history: History,
    /// Words of the segment being executed.
    pub argv: Vec<String>,
    /// Resolved executable of the current external command.
    pub command_path: Option<PathBuf>,
    pub last_status: i32,
    /// Lines ever recorded, loaded ones included. Unlike `history.len()` it
    /// keeps counting once the oldest entries are dropped.
    pub history_count: usize,
    pub line_number: usize,
    pub error_count: usize,
    /// Set by `exit`; the loop stops once this is present.
    pub exit_code: Option<i32>,
}

impl ShellState {
    pub fn new(program: impl Into<String>, env: EnvVarManager, history: History) -> Self {
        let history_count = history.len();
        Self {
            program: program.into(),
            env,
            aliases: AliasManager::new(),
            history,
            argv: Vec::new(),
            command_path: None,
            last_status: 0,
            history_count,
            line_number: 0,
            error_count: 0,
            exit_code: None,
        }
    }

    /// Installs the words of the next segment, dropping the previous ones.
    pub fn set_argv(&mut self, argv: Vec<String>) {
        self.argv = argv;
        self.command_path = None;
    }

    /// The command name of the current segment.
    pub fn command_name(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or_default()
    }

    /// Arguments of the current segment, without the command name.
    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }

    /// Adds an input line to the history, counting it if it was kept.
    pub fn record_history(&mut self, line: &str) {
        if self.history.add(line) {
            self.history_count += 1;
        }
    }

    /// Prints `<program>: <line>: <command>: <message>` to stderr.
    pub fn report(&mut self, command: &str, message: impl fmt::Display) {
        self.error_count += 1;
        eprintln!(
            "{}: {}: {}: {}",
            self.program, self.line_number, command, message
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_count_outlives_the_cap() {
        let mut state = ShellState::new("hsh", EnvVarManager::new(), History::in_memory(2));
        for line in ["one", "", "two", "three"] {
            state.record_history(line);
        }

        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history_count, 3);
    }

    #[test]
    fn test_set_argv_resets_command_path() {
        let mut state = ShellState::new("hsh", EnvVarManager::new(), History::in_memory(10));
        state.set_argv(vec!["ls".into(), "-l".into()]);
        state.command_path = Some(PathBuf::from("/bin/ls"));

        state.set_argv(vec!["pwd".into()]);
        assert_eq!(state.command_name(), "pwd");
        assert!(state.args().is_empty());
        assert!(state.command_path.is_none());
    }

    #[test]
    fn test_report_counts_errors() {
        let mut state = ShellState::new("hsh", EnvVarManager::new(), History::in_memory(10));
        state.report("cd", "can't cd to nowhere");
        state.report("foo", "not found");
        assert_eq!(state.error_count, 2);
    }
}
