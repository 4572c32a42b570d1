use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colors the command word of every segment, chain operators, variables
    /// and flags. Whitespace is preserved so cursor positions stay valid.
    pub fn highlight_command(&self, input: &str) -> String {
        if !self.is_enabled() {
            return input.to_string();
        }

        let mut out = String::with_capacity(input.len() * 2);
        let mut expect_command = true;

        for piece in input.split_inclusive(char::is_whitespace) {
            let word = piece.trim_end();
            let gap = &piece[word.len()..];

            if word.is_empty() {
                out.push_str(gap);
                continue;
            }

            let styled = match word {
                "&&" | "||" | ";" => {
                    expect_command = true;
                    paint(word, Color::RGB(198, 120, 221), true)
                }
                _ if expect_command => {
                    expect_command = word.ends_with(';');
                    paint(word, Color::Cyan, true)
                }
                _ if word.starts_with('$') => paint(word, Color::Green, false),
                _ if word.starts_with('-') => paint(word, Color::Yellow, false),
                _ => word.to_string(),
            };
            out.push_str(&styled);
            out.push_str(gap);
        }

        out
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if !self.is_enabled() {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();

        hint.style(hint_style).to_string()
    }
}

fn paint(word: &str, color: Color, bold: bool) -> String {
    let style = if bold {
        Style::builder().foreground(color).bold().build()
    } else {
        Style::builder().foreground(color).build()
    };
    word.style(style).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_when_colors_disabled() {
        let highlighter = SyntaxHighlighter {
            color_support: ColorSupport::NoColor,
        };
        let line = "ls -l && echo $HOME ; pwd";
        assert_eq!(highlighter.highlight_command(line), line);
    }

    #[test]
    fn test_highlight_keeps_text() {
        let highlighter = SyntaxHighlighter::new();
        let line = "ls  -l && echo $HOME";
        let highlighted = highlighter.highlight_command(line);
        for word in ["ls", "-l", "&&", "echo", "$HOME"] {
            assert!(highlighted.contains(word));
        }
    }
}
