use std::borrow::Cow;
use std::path::PathBuf;

/// Expands a leading `~` against a home directory.
#[derive(Debug, Clone)]
pub struct PathExpander {
    home: Option<PathBuf>,
}

impl PathExpander {
    /// Uses `home` when given, otherwise the user's home directory.
    pub fn new(home: Option<&str>) -> Self {
        let home = home
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir);
        Self { home }
    }

    pub fn expand<'a>(&self, word: &'a str) -> Cow<'a, str> {
        let Some(home) = self.home.as_ref() else {
            return Cow::Borrowed(word);
        };

        if word == "~" {
            Cow::Owned(home.to_string_lossy().into_owned())
        } else if let Some(rest) = word.strip_prefix("~/") {
            // "~username/path" is left alone
            Cow::Owned(home.join(rest).to_string_lossy().into_owned())
        } else {
            Cow::Borrowed(word)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        let expander = PathExpander::new(Some("/home/test"));
        assert_eq!(expander.expand("~"), "/home/test");
        assert_eq!(expander.expand("~/bin/tool"), "/home/test/bin/tool");
    }

    #[test]
    fn test_leaves_other_words_alone() {
        let expander = PathExpander::new(Some("/home/test"));
        assert!(matches!(expander.expand("ls"), Cow::Borrowed("ls")));
        assert_eq!(expander.expand("~other/x"), "~other/x");
        assert_eq!(expander.expand("a~b"), "a~b");
    }
}
