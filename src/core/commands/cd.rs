use std::env;
use std::io::{self, Write};

use log::debug;

use super::{Command, CommandError};
use crate::core::state::ShellState;

#[derive(Debug, Clone, Copy, Default)]
pub struct CdCommand;

impl CdCommand {
    /// Directory to enter, or `None` to stay put. The flag is set for
    /// `cd -`, which echoes the directory it lands in.
    fn target(state: &ShellState) -> Result<(Option<String>, bool), CommandError> {
        match state.args() {
            [] => Ok((
                state.env.get("HOME").filter(|home| !home.is_empty()).map(str::to_owned),
                false,
            )),
            [dash] if dash == "-" => state
                .env
                .get("OLDPWD")
                .filter(|old| !old.is_empty())
                .map(|old| (Some(old.to_owned()), true))
                .ok_or_else(|| CommandError::ExecutionError("OLDPWD not set".to_string())),
            [dir] => Ok((Some(dir.clone()), false)),
            _ => Err(CommandError::InvalidArguments("too many arguments".to_string())),
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, state: &mut ShellState) -> Result<i32, CommandError> {
        let (target, echo) = Self::target(state)?;
        let Some(target) = target else {
            debug!("cd event=skip reason=no-home");
            return Ok(0);
        };

        let previous = env::current_dir()
            .map(|dir| dir.to_string_lossy().into_owned())
            .ok()
            .or_else(|| state.env.get("PWD").map(str::to_owned))
            .unwrap_or_default();

        env::set_current_dir(&target).map_err(|_| CommandError::CannotCd(target.clone()))?;
        let current = env::current_dir()?.to_string_lossy().into_owned();

        state.env.set("OLDPWD", &previous)?;
        state.env.set("PWD", &current)?;

        if echo {
            let mut out = io::stdout().lock();
            writeln!(out, "{}", current)?;
            out.flush()?;
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::test_support::{set_argv, state_with};

    #[test]
    fn test_cd_invalid_keeps_directory() {
        let mut state = state_with(&["cd", "/nonexistent/path/for/hsh"]);

        let err = CdCommand.execute(&mut state).expect_err("missing dir");
        assert!(matches!(err, CommandError::CannotCd(ref dir) if dir == "/nonexistent/path/for/hsh"));
        assert_ne!(err.status(), 0);
        assert_eq!(state.env.get("OLDPWD"), None);
    }

    #[test]
    fn test_cd_dash_without_oldpwd() {
        let mut state = state_with(&["cd", "-"]);
        let err = CdCommand.execute(&mut state).expect_err("no OLDPWD");
        assert_eq!(err.to_string(), "OLDPWD not set");
        assert_eq!(err.status(), 1);
    }

    #[test]
    fn test_cd_without_home_stays() {
        let mut state = state_with(&["cd"]);
        state.env.unset("HOME");
        assert_eq!(CdCommand.execute(&mut state).expect("cd"), 0);
        assert_eq!(state.env.get("PWD"), None);
    }

    #[test]
    fn test_cd_too_many_arguments() {
        let mut state = state_with(&["cd", "/tmp", "/"]);
        assert!(matches!(
            CdCommand.execute(&mut state),
            Err(CommandError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_cd_updates_pwd_and_oldpwd() {
        let original = env::current_dir().expect("cwd");
        let temp = tempfile::tempdir().expect("tempdir");
        let target = temp.path().canonicalize().expect("canonical");
        let target = target.to_string_lossy().into_owned();
        let original_str = original.to_string_lossy().into_owned();

        let mut state = state_with(&["cd", target.as_str()]);
        assert_eq!(CdCommand.execute(&mut state).expect("cd"), 0);
        assert_eq!(state.env.get("PWD"), Some(target.as_str()));
        assert_eq!(state.env.get("OLDPWD"), Some(original_str.as_str()));

        set_argv(&mut state, &["cd", "-"]);
        assert_eq!(CdCommand.execute(&mut state).expect("cd -"), 0);
        assert_eq!(state.env.get("PWD"), Some(original_str.as_str()));
        assert_eq!(env::current_dir().expect("cwd"), original);
    }
}
