use std::io::IsTerminal;
use std::path::PathBuf;

use crate::flags::Flags;
use crate::input::history::{HIST_FILE, HIST_MAX};

/// Where the shell takes its lines from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// A terminal: prompt, line editing, completion.
    Interactive,
    /// Non-terminal stdin, read without a prompt.
    Stream,
    Script(PathBuf),
    /// A single `-c` argument.
    Command(String),
}

#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Name used to prefix diagnostics, as the shell was invoked.
    pub program: String,
    pub mode: InputMode,
    pub quiet: bool,
    pub debug: bool,
    /// `None` keeps history in memory only.
    pub history_path: Option<PathBuf>,
    pub history_max: usize,
}

impl ShellConfig {
    /// Resolves the session settings from parsed flags. `home` is the
    /// inherited `HOME`; the platform home directory is used when it is
    /// unset or empty.
    pub fn from_flags(program: impl Into<String>, flags: &Flags, home: Option<&str>) -> Self {
        let mode = Self::input_mode(flags, std::io::stdin().is_terminal());

        let history_path = match &mode {
            InputMode::Command(_) => None,
            _ => flags
                .get_value("history")
                .map(PathBuf::from)
                .or_else(|| Self::default_history_path(home)),
        };

        ShellConfig {
            program: program.into(),
            mode,
            quiet: flags.is_set("quiet"),
            debug: flags.is_set("debug"),
            history_path,
            history_max: HIST_MAX,
        }
    }

    fn input_mode(flags: &Flags, stdin_is_terminal: bool) -> InputMode {
        if let Some(line) = flags.get_value("command") {
            InputMode::Command(line.clone())
        } else if let Some(script) = flags.positional().first() {
            InputMode::Script(PathBuf::from(script))
        } else if stdin_is_terminal {
            InputMode::Interactive
        } else {
            InputMode::Stream
        }
    }

    fn default_history_path(home: Option<&str>) -> Option<PathBuf> {
        home.filter(|h| !h.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .map(|home| home.join(HIST_FILE))
    }

    pub fn is_interactive(&self) -> bool {
        self.mode == InputMode::Interactive
    }
}
