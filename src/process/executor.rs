use std::io::ErrorKind;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use super::{InterruptFlag, ProcessError};
use crate::core::env::EnvVarManager;
use crate::shell::tokenizer::split_fields;

/// Status recorded for a foreground command interrupted from the keyboard.
pub const STATUS_INTERRUPTED: i32 = 128 + libc::SIGINT;

/// Resolves and runs external commands, one at a time, in the foreground.
#[derive(Clone, Debug)]
pub struct ProcessExecutor {
    interrupts: InterruptFlag,
}

impl ProcessExecutor {
    pub fn new(interrupts: InterruptFlag) -> Self {
        Self { interrupts }
    }

    /// Finds the executable for `name`.
    ///
    /// Names containing `/` are used as given. Anything else is looked up in
    /// each `PATH` directory in order; an empty directory means the current
    /// one. Nothing is spawned when no candidate exists.
    pub fn resolve(&self, name: &str, env: &EnvVarManager) -> Result<PathBuf, ProcessError> {
        if name.contains('/') {
            return Ok(PathBuf::from(name));
        }

        let path_var = env
            .get("PATH")
            .ok_or_else(|| ProcessError::CommandNotFound(name.to_string()))?;

        split_fields(path_var, ':')
            .into_iter()
            .map(|dir| if dir.is_empty() { Path::new(".") } else { Path::new(dir) })
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| ProcessError::CommandNotFound(name.to_string()))
    }

    /// Runs `path` with `argv` and the session environment, waiting for it to
    /// finish. Returns the status to record for the command.
    pub fn run(&self, path: &Path, argv: &[String], env: &EnvVarManager) -> Result<i32, ProcessError> {
        let Some((name, args)) = argv.split_first() else {
            return Err(ProcessError::CommandNotFound(String::new()));
        };

        let mut command = Command::new(path);
        command
            .arg0(name)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(env.iter().map(|entry| (entry.name(), entry.value())));

        // Interrupts that arrived before this command belong to nobody.
        self.interrupts.take();

        let mut child = command.spawn().map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProcessError::CommandNotFound(name.clone()),
            ErrorKind::PermissionDenied => ProcessError::PermissionDenied(name.clone()),
            _ => ProcessError::Spawn(name.clone(), e),
        })?;
        debug!("process event=spawn pid={} path={}", child.id(), path.display());

        let status = child.wait().map_err(ProcessError::Wait)?;
        let code = if self.interrupts.take() {
            STATUS_INTERRUPTED
        } else {
            exit_code(status)
        };
        debug!("process event=exit status={} code={}", status, code);

        Ok(code)
    }
}

/// Exit code for a normal exit, `128 + n` for death by signal `n`.
pub fn exit_code(status: ExitStatus) -> i32 {
    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(1)
}
