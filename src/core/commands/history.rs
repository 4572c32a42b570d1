use std::io::{self, Write};

use super::{Command, CommandError};
use crate::core::state::ShellState;

#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryCommand;

impl HistoryCommand {
    fn format_entry(index: usize, line: &str) -> String {
        format!("{:5}  {}", index, line)
    }
}

impl Command for HistoryCommand {
    fn execute(&self, state: &mut ShellState) -> Result<i32, CommandError> {
        if !state.args().is_empty() {
            return Err(CommandError::InvalidArguments(
                "usage: history".to_string(),
            ));
        }

        let mut out = io::stdout().lock();
        for (index, line) in state.history.iter() {
            writeln!(out, "{}", Self::format_entry(index, line))?;
        }
        out.flush()?;
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::test_support::state_with;

    #[test]
    fn test_format_entry() {
        assert_eq!(HistoryCommand::format_entry(1, "ls -l"), "    1  ls -l");
        assert_eq!(HistoryCommand::format_entry(4096, "pwd"), " 4096  pwd");
    }

    #[test]
    fn test_history_lists_entries() {
        let mut state = state_with(&["history"]);
        state.history.add("ls");
        state.history.add("history");
        assert_eq!(HistoryCommand.execute(&mut state).expect("history"), 0);
    }

    #[test]
    fn test_history_rejects_arguments() {
        let mut state = state_with(&["history", "clear"]);
        assert!(matches!(
            HistoryCommand.execute(&mut state),
            Err(CommandError::InvalidArguments(_))
        ));
    }
}
