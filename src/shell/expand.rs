use std::borrow::Cow;

use crate::core::{aliases::AliasManager, env::EnvVarManager, state::ShellState};
use crate::path::PathExpander;

use super::tokenizer::{split_words, WORD_DELIMITERS};

/// Turns the text of one segment into the words that get executed.
///
/// The segment is split into words, the first word goes through alias
/// expansion, then every word is checked for `$?`, `$$`, `$NAME` and `~`.
/// Substitution works on whole words, so a variable that is unset leaves an
/// empty word behind instead of removing it.
pub struct Expander<'a> {
    env: &'a EnvVarManager,
    aliases: &'a AliasManager,
    last_status: i32,
    pid: u32,
    paths: PathExpander,
}

impl<'a> Expander<'a> {
    pub fn new(state: &'a ShellState) -> Self {
        Self {
            env: &state.env,
            aliases: &state.aliases,
            last_status: state.last_status,
            pid: std::process::id(),
            paths: PathExpander::new(state.env.get("HOME")),
        }
    }

    pub fn expand(&self, segment: &str) -> Vec<String> {
        let words = split_words(segment, WORD_DELIMITERS);
        self.aliases
            .expand_words(words)
            .into_iter()
            .map(|word| self.expand_word(&word).into_owned())
            .collect()
    }

    pub fn expand_word<'w>(&self, word: &'w str) -> Cow<'w, str> {
        match word {
            "$?" => Cow::Owned(self.last_status.to_string()),
            "$$" => Cow::Owned(self.pid.to_string()),
            _ => match word.strip_prefix('$') {
                Some(name) if !name.is_empty() => {
                    Cow::Owned(self.env.get(name).unwrap_or_default().to_string())
                }
                _ => self.paths.expand(word),
            },
        }
    }
}
