pub mod chain;
pub mod expand;
pub mod tokenizer;

mod executor;

use std::fs::File;
use std::io::{self, BufReader, Cursor};

use log::{debug, warn};

use crate::{
    config::{InputMode, ShellConfig},
    core::{env::EnvVarManager, state::ShellState},
    error::ShellError,
    input::{
        history::History, EditorSource, LineSource, ReadOutcome, StreamSource,
    },
    process::{InterruptFlag, ProcessExecutor},
};

use chain::{strip_comment, ChainResolver};
use executor::CommandHandler;

const PROMPT: &str = "$ ";

pub struct Shell {
    pub(crate) state: ShellState,
    pub(crate) executor: ProcessExecutor,
    interrupts: InterruptFlag,
    input: Box<dyn LineSource>,
    prompt: String,
}

impl Shell {
    /// Builds a session from the resolved configuration: installs the
    /// interrupt flag, snapshots the environment, loads history and opens
    /// the input source.
    pub fn new(config: &ShellConfig) -> Result<Self, ShellError> {
        let interrupts = InterruptFlag::install()?;
        let history = Self::load_history(config);
        let state = ShellState::new(config.program.clone(), EnvVarManager::inherit(), history);

        let input: Box<dyn LineSource> = match &config.mode {
            InputMode::Interactive => Box::new(EditorSource::new(&state)?),
            InputMode::Stream => Box::new(StreamSource::new(io::stdin().lock())),
            InputMode::Script(path) => {
                let file =
                    File::open(path).map_err(|e| ShellError::ScriptOpen(path.clone(), e))?;
                Box::new(StreamSource::new(BufReader::new(file)))
            }
            InputMode::Command(line) => {
                Box::new(StreamSource::new(Cursor::new(line.clone().into_bytes())))
            }
        };

        let prompt = if config.is_interactive() { PROMPT } else { "" };
        Ok(Self::with_input(state, interrupts, input, prompt))
    }

    pub fn with_input(
        state: ShellState,
        interrupts: InterruptFlag,
        input: Box<dyn LineSource>,
        prompt: &str,
    ) -> Self {
        Shell {
            state,
            executor: ProcessExecutor::new(interrupts.clone()),
            interrupts,
            input,
            prompt: prompt.to_string(),
        }
    }

    fn load_history(config: &ShellConfig) -> History {
        let Some(path) = &config.history_path else {
            return History::in_memory(config.history_max);
        };
        History::new(path.clone(), config.history_max).unwrap_or_else(|e| {
            warn!("{}", e);
            History::in_memory(config.history_max)
        })
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Reads and executes lines until end of input or `exit`, then saves
    /// history. Returns the status the process should exit with.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        let result = self.run_loop();

        if let Err(e) = self.state.history.save() {
            warn!("{}", e);
        }
        result?;

        Ok(self.state.exit_code.unwrap_or(self.state.last_status))
    }

    fn run_loop(&mut self) -> Result<(), ShellError> {
        while self.state.exit_code.is_none() {
            if self.interrupts.take() {
                debug!("discarding interrupt received outside a command");
            }
            self.input.refresh(&self.state);

            match self.input.read_line(&self.prompt)? {
                ReadOutcome::Line(line) => {
                    self.execute_line(&line)?;
                }
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => {
                    if self.input.is_interactive() {
                        println!();
                    }
                    break;
                }
            }
        }
        Ok(())
    }

    /// Runs every segment of one input line, honoring `;`, `&&` and `||`.
    pub fn execute_line(&mut self, raw: &str) -> Result<i32, ShellError> {
        self.state.line_number += 1;
        self.state.record_history(raw);

        let line = strip_comment(raw);
        for segment in ChainResolver::new(line) {
            if !segment.op.should_run(self.state.last_status) {
                debug!(
                    "skip segment op={:?} last_status={} text={:?}",
                    segment.op,
                    self.state.last_status,
                    segment.text(line)
                );
                continue;
            }
            if segment.is_empty(line) {
                continue;
            }

            let command = segment.command(line);
            let status = self.execute_segment(&command)?;
            debug!("segment {:?} exited with {}", command, status);

            if self.state.exit_code.is_some() {
                break;
            }
        }

        Ok(self.state.last_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell(input: &str) -> Shell {
        let env = EnvVarManager::from_vars([
            ("HOME", "/home/test"),
            ("PATH", "/bin:/usr/bin"),
        ]);
        let state = ShellState::new("hsh", env, History::in_memory(16));
        let source = StreamSource::new(Cursor::new(input.as_bytes().to_vec()));
        let interrupts = InterruptFlag::install().expect("install handlers");
        Shell::with_input(state, interrupts, Box::new(source), "")
    }

    #[test]
    fn test_sequence_runs_every_segment() {
        let mut shell = shell("");
        shell
            .execute_line("setenv A 1 ; setenv B 2")
            .expect("line");
        assert_eq!(shell.state().env.get("A"), Some("1"));
        assert_eq!(shell.state().env.get("B"), Some("2"));
    }

    #[test]
    fn test_and_skips_after_failure() {
        let mut shell = shell("");
        let status = shell
            .execute_line("false && setenv RAN yes")
            .expect("line");
        assert_eq!(status, 1);
        assert_eq!(shell.state().env.get("RAN"), None);
    }

    #[test]
    fn test_or_skips_after_success() {
        let mut shell = shell("");
        let status = shell.execute_line("true || setenv RAN yes").expect("line");
        assert_eq!(status, 0);
        assert_eq!(shell.state().env.get("RAN"), None);
    }

    #[test]
    fn test_or_after_skipped_and() {
        let mut shell = shell("");
        shell
            .execute_line("false && setenv A 1 || setenv B 2")
            .expect("line");
        assert_eq!(shell.state().env.get("A"), None);
        assert_eq!(shell.state().env.get("B"), Some("2"));
    }

    #[test]
    fn test_sequence_after_failure() {
        let mut shell = shell("");
        shell
            .execute_line("false ; setenv AFTER yes")
            .expect("line");
        assert_eq!(shell.state().env.get("AFTER"), Some("yes"));
    }

    #[test]
    fn test_status_variable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let script = dir.path().join("three.sh");
        std::fs::write(&script, "exit 3\n").expect("write");

        let mut shell = shell("");
        shell
            .execute_line(&format!("sh {}", script.display()))
            .expect("line");
        assert_eq!(shell.state().last_status, 3);
        shell.execute_line("setenv CODE $?").expect("line");
        assert_eq!(shell.state().env.get("CODE"), Some("3"));
    }

    #[test]
    fn test_not_found() {
        let mut shell = shell("");
        let status = shell
            .execute_line("definitely-not-a-command-hsh")
            .expect("line");
        assert_eq!(status, 127);
        assert_eq!(shell.state().error_count, 1);
    }

    #[test]
    fn test_empty_segments_and_comments() {
        let mut shell = shell("");
        assert_eq!(shell.execute_line(" ; ; ").expect("line"), 0);
        assert_eq!(shell.execute_line("# nothing here").expect("line"), 0);
        shell
            .execute_line("setenv X 1 # trailing comment")
            .expect("line");
        assert_eq!(shell.state().env.get("X"), Some("1"));
        assert_eq!(shell.state().error_count, 0);
    }

    #[test]
    fn test_line_numbers_and_history() {
        let mut shell = shell("");
        shell.execute_line("true").expect("line");
        shell.execute_line("").expect("line");
        assert_eq!(shell.state().line_number, 2);
        assert_eq!(shell.state().history.len(), 1);
        assert_eq!(shell.state().history_count, 1);
    }

    #[test]
    fn test_exit_stops_line() {
        let mut shell = shell("");
        shell
            .execute_line("exit 4 ; setenv AFTER yes")
            .expect("line");
        assert_eq!(shell.state().exit_code, Some(4));
        assert_eq!(shell.state().env.get("AFTER"), None);
    }

    #[test]
    fn test_run_until_exit() {
        let mut shell = shell("setenv A 1\nexit 5\nsetenv B 2\n");
        assert_eq!(shell.run().expect("run"), 5);
        assert_eq!(shell.state().env.get("B"), None);
    }

    #[test]
    fn test_run_returns_last_status_at_eof() {
        let mut shell = shell("true\nfalse");
        assert_eq!(shell.run().expect("run"), 1);
    }

    #[test]
    fn test_non_numeric_exit_ends_session() {
        let mut shell = shell("exit abc ; setenv SAME yes\nsetenv AFTER yes\n");
        assert_eq!(shell.run().expect("run"), 2);
        assert_eq!(shell.state().env.get("SAME"), None);
        assert_eq!(shell.state().env.get("AFTER"), None);
        assert_eq!(shell.state().error_count, 1);
    }

    #[test]
    fn test_interrupt_during_wait_records_130() {
        let mut shell = shell("");
        let interrupts = shell.interrupts.clone();
        let raiser = std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(300));
            interrupts.raise();
        });

        let status = shell
            .execute_line("sleep 1 && setenv RAN yes ; setenv CODE $?")
            .expect("line");
        raiser.join().expect("join");

        assert_eq!(status, 0);
        assert_eq!(shell.state().env.get("RAN"), None);
        assert_eq!(shell.state().env.get("CODE"), Some("130"));
    }

    #[test]
    fn test_alias_in_chain() {
        let mut shell = shell("");
        shell
            .execute_line("alias mark='setenv MARK'")
            .expect("line");
        shell.execute_line("true && mark on").expect("line");
        assert_eq!(shell.state().env.get("MARK"), Some("on"));
    }

    #[test]
    fn test_unset_variable_as_command_is_noop() {
        let mut shell = shell("");
        assert_eq!(shell.execute_line("$NOPE").expect("line"), 0);
        assert_eq!(shell.state().error_count, 0);
    }
}
