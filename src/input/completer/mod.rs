mod command;

use std::borrow::Cow;

use rustyline::{
    completion::{Completer, FilenameCompleter, Pair},
    highlight::{CmdKind, Highlighter},
    hint::{Hinter, HistoryHinter},
    validate::Validator,
    Context, Helper,
};

use self::command::CommandCompleter;
use crate::core::state::ShellState;
use crate::highlight::SyntaxHighlighter;

/// Line-editor helper: completion, history hints and highlighting.
pub struct ShellHelper {
    command_completer: CommandCompleter,
    file_completer: FilenameCompleter,
    hinter: HistoryHinter,
    highlighter: SyntaxHighlighter,
}

impl Default for ShellHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellHelper {
    pub fn new() -> Self {
        ShellHelper {
            command_completer: CommandCompleter::new(),
            file_completer: FilenameCompleter::new(),
            hinter: HistoryHinter::new(),
            highlighter: SyntaxHighlighter::new(),
        }
    }

    /// Picks up commands and aliases from the session.
    pub fn refresh(&mut self, state: &ShellState) {
        self.command_completer.refresh_commands(state.env.get("PATH"));
        self.command_completer.update_aliases(state.aliases.names());
    }
}

/// Start of the word under the cursor and whether it is in command position.
fn current_word(line: &str) -> (usize, bool) {
    let start = line
        .rfind(|c: char| c.is_whitespace() || matches!(c, ';' | '&' | '|'))
        .map_or(0, |i| i + 1);
    let before = line[..start].trim_end();
    let is_command = before.is_empty()
        || before.ends_with(';')
        || before.ends_with("&&")
        || before.ends_with("||");
    (start, is_command)
}

impl Helper for ShellHelper {}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        self.highlighter.is_enabled()
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Validator for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, is_command) = current_word(&line[..pos]);
        if is_command {
            let word = &line[start..pos];
            Ok((start, self.command_completer.complete_command(word)))
        } else {
            self.file_completer.complete(line, pos, ctx)
        }
    }
}
