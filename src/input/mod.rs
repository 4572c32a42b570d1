mod completer;
pub mod history;

use std::io::BufRead;

use rustyline::{error::ReadlineError, history::FileHistory, Editor};

pub use completer::ShellHelper;

use crate::core::state::ShellState;
use crate::error::ShellError;

/// Result of asking an input source for the next line.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// The user pressed Ctrl-C; the partial line is gone.
    Interrupted,
    Eof,
}

/// Where the shell loop reads its lines from.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError>;

    /// Called before each read so the source can pick up session changes.
    fn refresh(&mut self, _state: &ShellState) {}

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Reads lines from any buffered reader: piped stdin, a script, or a `-c`
/// argument. The prompt is ignored.
pub struct StreamSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> StreamSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for StreamSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadOutcome, ShellError> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(ReadOutcome::Eof);
        }

        let mut line = String::from_utf8_lossy(&self.buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(ReadOutcome::Line(line))
    }
}

/// Terminal input through `rustyline`, with completion, hints and
/// highlighting.
pub struct EditorSource {
    editor: Editor<ShellHelper, FileHistory>,
}

impl EditorSource {
    /// Creates the editor and seeds its recall list with the session history.
    pub fn new(state: &ShellState) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellHelper, FileHistory>::new()?;
        let mut helper = ShellHelper::new();
        helper.refresh(state);
        editor.set_helper(Some(helper));

        for (_, entry) in state.history.iter() {
            editor.add_history_entry(entry)?;
        }

        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn refresh(&mut self, state: &ShellState) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.refresh(state);
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_all(input: &str) -> Vec<String> {
        let mut source = StreamSource::new(Cursor::new(input.as_bytes().to_vec()));
        let mut lines = Vec::new();
        while let ReadOutcome::Line(line) = source.read_line("$ ").expect("read") {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn test_stream_lines() {
        assert_eq!(read_all("ls\npwd\n"), ["ls", "pwd"]);
    }

    #[test]
    fn test_stream_final_line_without_newline() {
        assert_eq!(read_all("ls\nexit 3"), ["ls", "exit 3"]);
    }

    #[test]
    fn test_stream_crlf_and_blank_lines() {
        assert_eq!(read_all("a\r\n\nb\n"), ["a", "", "b"]);
    }

    #[test]
    fn test_stream_eof_is_sticky() {
        let mut source = StreamSource::new(Cursor::new(Vec::new()));
        assert_eq!(source.read_line("").expect("read"), ReadOutcome::Eof);
        assert_eq!(source.read_line("").expect("read"), ReadOutcome::Eof);
        assert!(!source.is_interactive());
    }

    #[test]
    fn test_stream_invalid_utf8_is_lossy() {
        let mut source = StreamSource::new(Cursor::new(vec![b'a', 0xff, b'\n']));
        assert_eq!(
            source.read_line("").expect("read"),
            ReadOutcome::Line("a\u{fffd}".to_string())
        );
    }
}
