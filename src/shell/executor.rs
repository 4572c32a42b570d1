use log::debug;

use super::expand::Expander;
use crate::core::commands::{Builtin, Command};
use crate::error::ShellError;

pub(crate) trait CommandHandler {
    /// Expands and runs one segment, returning the status it leaves behind.
    fn execute_segment(&mut self, segment: &str) -> Result<i32, ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_segment(&mut self, segment: &str) -> Result<i32, ShellError> {
        let argv = Expander::new(&self.state).expand(segment);
        self.state.set_argv(argv);

        let name = self.state.command_name();
        let status = if name.is_empty() {
            0
        } else if let Some(builtin) = Builtin::lookup(name) {
            self.run_builtin(builtin)
        } else {
            self.run_external()?
        };

        self.state.last_status = status;
        Ok(status)
    }
}

impl super::Shell {
    fn run_builtin(&mut self, builtin: Builtin) -> i32 {
        debug!("builtin {} args={:?}", builtin.name(), self.state.args());
        match builtin.execute(&mut self.state) {
            Ok(status) => status,
            Err(e) => {
                self.state.report(builtin.name(), &e);
                e.status()
            }
        }
    }

    /// Resolves and runs the current words as an external command. Only
    /// errors that leave the shell unable to continue are returned.
    fn run_external(&mut self) -> Result<i32, ShellError> {
        let name = self.state.command_name().to_string();

        let result = match self.executor.resolve(&name, &self.state.env) {
            Ok(path) => {
                debug!("resolved {} to {}", name, path.display());
                let status = self.executor.run(&path, &self.state.argv, &self.state.env);
                self.state.command_path = Some(path);
                status
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(status) => Ok(status),
            Err(e) if e.is_fatal() => Err(e.into()),
            Err(e) => {
                self.state.report(&name, &e);
                Ok(e.status())
            }
        }
    }
}

