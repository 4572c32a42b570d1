/// Characters separating words on a command line.
pub const WORD_DELIMITERS: &[char] = &[' ', '\t', '\r', '\n', '\x07'];

/// Splits `input` into words. Runs of delimiters count as one separator and
/// never produce empty words, so blank input yields an empty vector.
pub fn split_words(input: &str, delimiters: &[char]) -> Vec<String> {
    input
        .split(|c: char| delimiters.contains(&c))
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Splits `input` on every `delimiter`, keeping empty fields.
///
/// `"=foo"` split on `'='` gives `["", "foo"]` and `"/bin::"` split on `':'`
/// gives `["/bin", "", ""]`.
pub fn split_fields(input: &str, delimiter: char) -> Vec<&str> {
    input.split(delimiter).collect()
}

/// Splits a `NAME=VALUE` assignment at its first `=`.
pub fn split_assignment(text: &str) -> Option<(&str, &str)> {
    text.split_once('=')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_repeated_delimiters() {
        assert_eq!(split_words("  a   b  ", WORD_DELIMITERS), ["a", "b"]);
        assert_eq!(split_words("ls\t-l\r\n", WORD_DELIMITERS), ["ls", "-l"]);
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(split_words("", WORD_DELIMITERS).is_empty());
        assert!(split_words(" \t \n", WORD_DELIMITERS).is_empty());
    }

    #[test]
    fn test_custom_delimiter_set() {
        assert_eq!(split_words("a,b;;c", &[',', ';']), ["a", "b", "c"]);
    }

    #[test]
    fn test_fields_keep_empty_edges() {
        assert_eq!(split_fields("=foo", '='), ["", "foo"]);
        assert_eq!(split_fields("/bin::/usr/bin:", ':'), ["/bin", "", "/usr/bin", ""]);
        assert_eq!(split_fields("", ':'), [""]);
    }

    #[test]
    fn test_assignment_splits_at_first_equals() {
        assert_eq!(split_assignment("ll=ls -la"), Some(("ll", "ls -la")));
        assert_eq!(split_assignment("x=a=b"), Some(("x", "a=b")));
        assert_eq!(split_assignment("=foo"), Some(("", "foo")));
        assert_eq!(split_assignment("name="), Some(("name", "")));
        assert_eq!(split_assignment("name"), None);
    }
}
