use crate::core::entries::{Entry, EntryList};
use crate::shell::tokenizer::{split_words, WORD_DELIMITERS};

/// How many times the first word of a command may be replaced by an alias.
const MAX_ALIAS_EXPANSIONS: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct AliasManager {
    aliases: EntryList,
}

impl AliasManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, command: &str) {
        self.aliases.set(name, command);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.aliases.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.aliases.iter().map(Entry::name)
    }

    /// Replaces the first word with its alias value, then tries once more on
    /// the new first word. An alias is never expanded inside its own value.
    pub fn expand_words(&self, mut words: Vec<String>) -> Vec<String> {
        let mut expanded: Vec<String> = Vec::with_capacity(MAX_ALIAS_EXPANSIONS);

        for _ in 0..MAX_ALIAS_EXPANSIONS {
            let Some(first) = words.first() else {
                break;
            };
            if expanded.contains(first) {
                break;
            }
            let Some(value) = self.get(first) else {
                break;
            };

            let mut replaced = split_words(value, WORD_DELIMITERS);
            replaced.extend(words.drain(1..));
            expanded.push(std::mem::replace(&mut words, replaced).swap_remove(0));
        }

        words
    }
}
