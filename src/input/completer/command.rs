use std::{collections::BTreeSet, fs};

use rustyline::completion::Pair;

use crate::core::commands::Builtin;
use crate::shell::tokenizer::split_fields;

/// Completes the command word from builtins, aliases and `PATH`.
#[derive(Clone, Default)]
pub struct CommandCompleter {
    commands: BTreeSet<String>,
    aliases: BTreeSet<String>,
    /// `PATH` the command list was last built from; `None` until built.
    indexed_path: Option<Option<String>>,
}

impl CommandCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the command list from the builtins and every directory of
    /// `path_var`. Nothing is rescanned while `path_var` is unchanged.
    pub fn refresh_commands(&mut self, path_var: Option<&str>) {
        if self.indexed_path.as_ref().map(Option::as_deref) == Some(path_var) {
            return;
        }
        self.indexed_path = Some(path_var.map(str::to_owned));

        self.commands.clear();
        self.add_builtin_commands();
        if let Some(path_var) = path_var {
            self.add_path_commands(path_var);
        }
    }

    fn add_builtin_commands(&mut self) {
        for builtin in Builtin::ALL {
            self.commands.insert(builtin.name().to_string());
        }
    }

    fn add_path_commands(&mut self, path_var: &str) {
        for dir in split_fields(path_var, ':').into_iter().filter(|d| !d.is_empty()) {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                let is_candidate = entry
                    .file_type()
                    .map(|t| t.is_file() || t.is_symlink())
                    .unwrap_or(false);
                if let (true, Some(name)) = (is_candidate, entry.file_name().to_str()) {
                    self.commands.insert(name.to_string());
                }
            }
        }
    }

    pub fn update_aliases<'a>(&mut self, names: impl Iterator<Item = &'a str>) {
        self.aliases = names.map(str::to_owned).collect();
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        let mut matches = Vec::new();
        self.add_command_matches(&mut matches, input);
        self.add_alias_matches(&mut matches, input);
        matches
    }

    fn add_command_matches(&self, matches: &mut Vec<Pair>, input: &str) {
        for cmd in self.commands.iter().filter(|cmd| cmd.starts_with(input)) {
            matches.push(Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            });
        }
    }

    fn add_alias_matches(&self, matches: &mut Vec<Pair>, input: &str) {
        for alias in self.aliases.iter().filter(|alias| alias.starts_with(input)) {
            matches.push(Pair {
                display: format!("{} (alias)", alias),
                replacement: alias.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements(pairs: Vec<Pair>) -> Vec<String> {
        pairs.into_iter().map(|p| p.replacement).collect()
    }

    #[test]
    fn test_builtins_are_completed() {
        let mut completer = CommandCompleter::new();
        completer.refresh_commands(None);

        assert_eq!(replacements(completer.complete_command("unset")), ["unsetenv"]);
        assert_eq!(replacements(completer.complete_command("hi")), ["history"]);
    }

    #[test]
    fn test_path_commands_and_aliases() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("zzhsh-tool"), "").expect("write");

        let mut completer = CommandCompleter::new();
        completer.refresh_commands(Some(&dir.path().display().to_string()));
        completer.update_aliases(["zzhsh-alias"].into_iter());

        let found = completer.complete_command("zzhsh");
        assert_eq!(replacements(found.clone()), ["zzhsh-tool", "zzhsh-alias"]);
        assert_eq!(found[1].display, "zzhsh-alias (alias)");
    }

    #[test]
    fn test_path_is_rescanned_only_when_it_changes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path_var = dir.path().display().to_string();
        fs::write(dir.path().join("zzhsh-first"), "").expect("write");

        let mut completer = CommandCompleter::new();
        completer.refresh_commands(Some(&path_var));
        fs::write(dir.path().join("zzhsh-second"), "").expect("write");

        completer.refresh_commands(Some(&path_var));
        assert_eq!(replacements(completer.complete_command("zzhsh")), ["zzhsh-first"]);

        completer.refresh_commands(Some(&format!("{}:", path_var)));
        assert_eq!(
            replacements(completer.complete_command("zzhsh")),
            ["zzhsh-first", "zzhsh-second"]
        );
    }
}
