use std::{borrow::Cow, iter::Peekable, ops::Range, str::CharIndices};

/// Operator that preceded a segment on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOp {
    None,     // first segment
    And,      // &&
    Or,       // ||
    Sequence, // ;
}

impl ChainOp {
    /// Whether a segment preceded by this operator runs after a segment that
    /// finished with `last_status`.
    pub fn should_run(self, last_status: i32) -> bool {
        match self {
            ChainOp::None | ChainOp::Sequence => true,
            ChainOp::And => last_status == 0,
            ChainOp::Or => last_status != 0,
        }
    }
}

/// One chain-delimited unit of a line, as a byte range into that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub range: Range<usize>,
    pub op: ChainOp,
}

impl Segment {
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        line[self.range.clone()].trim()
    }

    /// The segment text with escaped separators (`\;`) turned back into `;`.
    pub fn command<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let text = self.text(line);
        if text.contains("\\;") {
            Cow::Owned(text.replace("\\;", ";"))
        } else {
            Cow::Borrowed(text)
        }
    }

    pub fn is_empty(&self, line: &str) -> bool {
        self.text(line).is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    FoundSemi,
    FoundAnd,
    FoundOr,
}

/// Splits a line into segments at `;`, `&&` and `||`.
///
/// The line itself is never modified; every segment is a range into it.
/// A lone `&` or `|` is ordinary text.
pub struct ChainResolver<'a> {
    chars: Peekable<CharIndices<'a>>,
    len: usize,
    start: usize,
    next_op: ChainOp,
    done: bool,
}

impl<'a> ChainResolver<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            chars: line.char_indices().peekable(),
            len: line.len(),
            start: 0,
            next_op: ChainOp::None,
            done: false,
        }
    }

    /// Advances to the next operator, returning the scan result and the byte
    /// offset where the current segment ends.
    fn scan(&mut self) -> (ScanState, usize) {
        let mut escaped = false;

        while let Some((index, c)) = self.chars.next() {
            let state = match c {
                ';' if !escaped => ScanState::FoundSemi,
                '&' if self.chars.peek().map(|&(_, next)| next) == Some('&') => {
                    self.chars.next();
                    ScanState::FoundAnd
                }
                '|' if self.chars.peek().map(|&(_, next)| next) == Some('|') => {
                    self.chars.next();
                    ScanState::FoundOr
                }
                _ => ScanState::Scanning,
            };
            escaped = c == '\\' && !escaped;

            if state != ScanState::Scanning {
                return (state, index);
            }
        }

        (ScanState::Scanning, self.len)
    }
}

impl Iterator for ChainResolver<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.done {
            return None;
        }

        let op = self.next_op;
        let (state, end) = self.scan();
        let segment = Segment {
            range: self.start..end,
            op,
        };

        self.next_op = match state {
            ScanState::Scanning => {
                self.done = true;
                ChainOp::None
            }
            ScanState::FoundSemi => ChainOp::Sequence,
            ScanState::FoundAnd => ChainOp::And,
            ScanState::FoundOr => ChainOp::Or,
        };
        self.start = match state {
            ScanState::Scanning => self.len,
            ScanState::FoundSemi => end + 1,
            ScanState::FoundAnd | ScanState::FoundOr => end + 2,
        };

        Some(segment)
    }
}

/// Removes a trailing `#` comment. A `#` only starts a comment at the
/// beginning of the line or after whitespace.
pub fn strip_comment(line: &str) -> &str {
    let mut previous: Option<char> = None;
    for (index, c) in line.char_indices() {
        if c == '#' && previous.map_or(true, char::is_whitespace) {
            return &line[..index];
        }
        previous = Some(c);
    }
    line
}
