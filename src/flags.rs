use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
    positional: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn new(short: &str, long: &str, description: &str, takes_value: bool) -> Self {
        Flag {
            short: short.to_string(),
            long: long.to_string(),
            description: description.to_string(),
            takes_value,
            value: None,
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag::new("-h", "--help", "Print this help message", false),
        );
        flags.insert(
            "version".to_string(),
            Flag::new("-v", "--version", "Show version information", false),
        );
        flags.insert(
            "command".to_string(),
            Flag::new("-c", "--command", "Run the given command line and exit", true),
        );
        flags.insert(
            "quiet".to_string(),
            Flag::new("-q", "--quiet", "Suppress warnings", false),
        );
        flags.insert(
            "debug".to_string(),
            Flag::new("-d", "--debug", "Enable debug output", false),
        );
        flags.insert(
            "history".to_string(),
            Flag::new("-H", "--history", "Use PATH as the history file", true),
        );

        Flags {
            flags,
            positional: Vec::new(),
        }
    }

    /// Parses options up to the first non-option word. That word and
    /// everything after it are kept as positional arguments.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut args = args.iter();

        while let Some(arg) = args.next() {
            if arg == "--" {
                self.positional.extend(args.cloned());
                break;
            }
            if !arg.starts_with('-') || arg == "-" {
                self.positional.push(arg.clone());
                self.positional.extend(args.cloned());
                break;
            }

            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("Illegal option {}", arg)))?;

            if flag.takes_value {
                let value = args.next().ok_or_else(|| {
                    ShellError::FlagError(format!("Flag {} requires a value", arg))
                })?;
                flag.value = Some(value.clone());
            } else {
                flag.value = Some("true".to_string());
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub fn print_help(&self) {
        println!("Usage: hsh [OPTIONS] [SCRIPT]");
        println!("\nOptions:");
        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.sort_by(|a, b| a.long.cmp(&b.long));
        for flag in flags {
            let long = if flag.takes_value {
                format!("{} <ARG>", flag.long)
            } else {
                flag.long.clone()
            };
            println!("  {}, {:<17} {}", flag.short, long, flag.description);
        }
    }
}
