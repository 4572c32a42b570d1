use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::ProcessExecutor;
pub use signal::InterruptFlag;

/// Status reported when a command cannot be found.
pub const STATUS_NOT_FOUND: i32 = 127;
/// Status reported when a command exists but cannot be executed.
pub const STATUS_NOT_EXECUTABLE: i32 = 126;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    PermissionDenied(String),
    Spawn(String, std::io::Error),
    Wait(std::io::Error),
    SignalError(std::io::Error),
}

impl ProcessError {
    /// Status recorded for the command that failed.
    pub fn status(&self) -> i32 {
        match self {
            ProcessError::CommandNotFound(_) => STATUS_NOT_FOUND,
            ProcessError::PermissionDenied(_) | ProcessError::Spawn(..) => STATUS_NOT_EXECUTABLE,
            ProcessError::Wait(_) | ProcessError::SignalError(_) => 1,
        }
    }

    /// Whether the shell can keep running after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProcessError::Wait(_) | ProcessError::SignalError(_))
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(_) => write!(f, "not found"),
            ProcessError::PermissionDenied(_) => write!(f, "Permission denied"),
            ProcessError::Spawn(_, e) => write!(f, "cannot execute: {}", e),
            ProcessError::Wait(e) => write!(f, "failed to wait for child process: {}", e),
            ProcessError::SignalError(e) => write!(f, "failed to install signal handler: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
