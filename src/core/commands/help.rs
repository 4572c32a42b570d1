use std::io::{self, Write};

use super::{Builtin, Command, CommandError};
use crate::core::state::ShellState;

#[derive(Debug, Clone, Copy, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, state: &mut ShellState) -> Result<i32, CommandError> {
        let mut out = io::stdout().lock();

        match state.args() {
            [] => {
                writeln!(out, "{}, a simple command interpreter", state.program)?;
                writeln!(out, "Commands may be chained with ';', '&&' and '||'.")?;
                writeln!(out, "Builtins:")?;
                for builtin in Builtin::ALL {
                    writeln!(out, "  {}", builtin.usage())?;
                }
            }
            names => {
                for name in names {
                    let builtin = Builtin::lookup(name).ok_or_else(|| {
                        CommandError::ExecutionError(format!("no help topics match '{}'", name))
                    })?;
                    writeln!(out, "  {}", builtin.usage())?;
                }
            }
        }

        out.flush()?;
        Ok(0)
    }
}
