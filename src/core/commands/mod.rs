mod alias;
mod cd;
mod env;
mod exit;
mod help;
mod history;

pub use alias::AliasCommand;
pub use cd::CdCommand;
pub use env::{EnvCommand, SetenvCommand, UnsetenvCommand};
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use history::HistoryCommand;

use crate::core::env::EnvError;
use crate::core::state::ShellState;

/// Status for usage errors and rejected arguments.
pub const STATUS_USAGE: i32 = 2;

#[derive(Debug)]
pub enum CommandError {
    /// Wrong number or shape of arguments.
    InvalidArguments(String),
    /// `exit` with an argument that is not a valid status.
    NumericArgumentRequired(String),
    /// `cd` could not enter the directory.
    CannotCd(String),
    /// The builtin ran but did not succeed.
    ExecutionError(String),
    IoError(std::io::Error),
    EnvError(EnvError),
}

impl CommandError {
    /// Status recorded when a builtin fails with this error.
    pub fn status(&self) -> i32 {
        match self {
            CommandError::InvalidArguments(_)
            | CommandError::NumericArgumentRequired(_)
            | CommandError::CannotCd(_)
            | CommandError::EnvError(_) => STATUS_USAGE,
            CommandError::ExecutionError(_) | CommandError::IoError(_) => 1,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::NumericArgumentRequired(_) => write!(f, "numeric argument required"),
            CommandError::CannotCd(dir) => write!(f, "can't cd to {}", dir),
            CommandError::ExecutionError(msg) => write!(f, "{}", msg),
            CommandError::IoError(err) => write!(f, "{}", err),
            CommandError::EnvError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::EnvError(err)
    }
}

/// A command implemented inside the shell.
pub trait Command {
    /// Runs against the session, reading the current words from
    /// `state.argv`, and returns the status to record.
    fn execute(&self, state: &mut ShellState) -> Result<i32, CommandError>;
}

/// The fixed set of builtins, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Env,
    Setenv,
    Unsetenv,
    Cd,
    Help,
    History,
    Alias,
}

impl Builtin {
    pub const ALL: [Builtin; 8] = [
        Builtin::Exit,
        Builtin::Env,
        Builtin::Setenv,
        Builtin::Unsetenv,
        Builtin::Cd,
        Builtin::Help,
        Builtin::History,
        Builtin::Alias,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Exit => "exit",
            Builtin::Env => "env",
            Builtin::Setenv => "setenv",
            Builtin::Unsetenv => "unsetenv",
            Builtin::Cd => "cd",
            Builtin::Help => "help",
            Builtin::History => "history",
            Builtin::Alias => "alias",
        }
    }

    /// One-line usage shown by `help`.
    pub fn usage(self) -> &'static str {
        match self {
            Builtin::Exit => "exit [n]            leave the shell with status n (default: last status)",
            Builtin::Env => "env                 print the environment",
            Builtin::Setenv => "setenv NAME VALUE   set or overwrite an environment variable",
            Builtin::Unsetenv => "unsetenv NAME       remove an environment variable",
            Builtin::Cd => "cd [DIR | -]        change directory (default: $HOME, -: $OLDPWD)",
            Builtin::Help => "help [NAME]         show this help",
            Builtin::History => "history             list previous input lines",
            Builtin::Alias => "alias [NAME[=VALUE] ...]  define or show aliases",
        }
    }

    /// Exact match on the command name; no prefixes or abbreviations.
    pub fn lookup(name: &str) -> Option<Builtin> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }
}

impl Command for Builtin {
    fn execute(&self, state: &mut ShellState) -> Result<i32, CommandError> {
        match self {
            Builtin::Exit => ExitCommand.execute(state),
            Builtin::Env => EnvCommand.execute(state),
            Builtin::Setenv => SetenvCommand.execute(state),
            Builtin::Unsetenv => UnsetenvCommand.execute(state),
            Builtin::Cd => CdCommand.execute(state),
            Builtin::Help => HelpCommand.execute(state),
            Builtin::History => HistoryCommand.execute(state),
            Builtin::Alias => AliasCommand.execute(state),
        }
    }
}
