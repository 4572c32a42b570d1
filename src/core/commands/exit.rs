use super::{Command, CommandError, STATUS_USAGE};
use crate::core::state::ShellState;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl ExitCommand {
    /// Accepts a non-negative decimal that fits in an `i32`.
    fn parse_status(arg: &str) -> Result<i32, CommandError> {
        if !arg.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CommandError::NumericArgumentRequired(arg.to_string()));
        }
        arg.parse::<i32>()
            .map_err(|_| CommandError::NumericArgumentRequired(arg.to_string()))
    }
}

impl Command for ExitCommand {
    /// Always ends the session. A bad argument is still reported, and the
    /// shell leaves with the usage status.
    fn execute(&self, state: &mut ShellState) -> Result<i32, CommandError> {
        let code = match state.args().first().filter(|arg| !arg.is_empty()) {
            Some(arg) => match Self::parse_status(arg) {
                Ok(code) => code,
                Err(e) => {
                    state.exit_code = Some(STATUS_USAGE);
                    return Err(e);
                }
            },
            None => state.last_status,
        };

        state.exit_code = Some(code);
        Ok(code)
    }
}
