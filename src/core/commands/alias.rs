use std::io::{self, Write};

use super::{Command, CommandError};
use crate::core::entries::Entry;
use crate::core::state::ShellState;
use crate::shell::tokenizer::split_assignment;

#[derive(Debug, Clone, Copy, Default)]
pub struct AliasCommand;

impl AliasCommand {
    /// Re-joins assignments whose quoted value was split into several words,
    /// e.g. `ll='ls` `-la'` becomes `ll='ls -la'`.
    fn gather_assignments(args: &[String]) -> Vec<String> {
        let mut items = Vec::with_capacity(args.len());
        let mut args = args.iter();

        while let Some(arg) = args.next() {
            let mut item = arg.clone();
            let open_quote = split_assignment(arg).and_then(|(_, value)| {
                let quote = value.chars().next().filter(|c| *c == '\'' || *c == '"')?;
                let closed = value.len() > 1 && value.ends_with(quote);
                (!closed).then_some(quote)
            });

            if let Some(quote) = open_quote {
                for next in args.by_ref() {
                    item.push(' ');
                    item.push_str(next);
                    if next.ends_with(quote) {
                        break;
                    }
                }
            }
            items.push(item);
        }

        items
    }

    fn unquote(value: &str) -> &str {
        for quote in ['\'', '"'] {
            if let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
            {
                return inner;
            }
        }
        value
    }

    fn format_alias(name: &str, value: &str) -> String {
        format!("{}='{}'", name, value)
    }
}

impl Command for AliasCommand {
    fn execute(&self, state: &mut ShellState) -> Result<i32, CommandError> {
        let mut out = io::stdout().lock();

        if state.args().is_empty() {
            for entry in state.aliases.iter() {
                writeln!(out, "{}", Self::format_alias(entry.name(), entry.value()))?;
            }
            out.flush()?;
            return Ok(0);
        }

        let mut missing = Vec::new();
        for item in Self::gather_assignments(state.args()) {
            match Entry::parse(&item) {
                Some(entry) if entry.name().is_empty() => {
                    return Err(CommandError::InvalidArguments(format!(
                        "invalid alias name in '{}'",
                        item
                    )));
                }
                Some(entry) => {
                    state.aliases.add(entry.name(), Self::unquote(entry.value()));
                }
                None => match state.aliases.get(&item) {
                    Some(value) => writeln!(out, "{}", Self::format_alias(&item, value))?,
                    None => missing.push(item),
                },
            }
        }
        out.flush()?;

        if missing.is_empty() {
            Ok(0)
        } else {
            Err(CommandError::ExecutionError(format!(
                "{} not found",
                missing.join(" ")
            )))
        }
    }
}
