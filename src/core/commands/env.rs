use std::io::{self, Write};

use super::{Command, CommandError};
use crate::core::state::ShellState;

/// `env`: prints the session environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCommand;

impl Command for EnvCommand {
    fn execute(&self, state: &mut ShellState) -> Result<i32, CommandError> {
        let mut out = io::stdout().lock();
        for entry in state.env.iter() {
            writeln!(out, "{}", entry)?;
        }
        out.flush()?;
        Ok(0)
    }
}

/// `setenv NAME VALUE`
#[derive(Debug, Clone, Copy, Default)]
pub struct SetenvCommand;

impl Command for SetenvCommand {
    fn execute(&self, state: &mut ShellState) -> Result<i32, CommandError> {
        let [name, value] = state.args() else {
            return Err(CommandError::InvalidArguments(
                "usage: setenv NAME VALUE".to_string(),
            ));
        };
        let (name, value) = (name.clone(), value.clone());

        state.env.set(&name, &value)?;
        Ok(0)
    }
}

/// `unsetenv NAME`
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsetenvCommand;

impl Command for UnsetenvCommand {
    fn execute(&self, state: &mut ShellState) -> Result<i32, CommandError> {
        let [name] = state.args() else {
            return Err(CommandError::InvalidArguments(
                "usage: unsetenv NAME".to_string(),
            ));
        };
        let name = name.clone();

        state.env.unset(&name);
        Ok(0)
    }
}
