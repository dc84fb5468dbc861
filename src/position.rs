use std::iter::Peekable;
use std::str::CharIndices;

/// Position in a text file (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, in characters)
    pub column: usize,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };
}

/// Where a single character sits in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located {
    /// Zero-based character offset in the newline-normalised text
    pub char_index: usize,
    /// Zero-based byte offset of the character's first byte in the raw text
    pub byte_offset: usize,
    /// Line and column of the character
    pub position: Position,
}

/// Walks a string one character at a time, tracking every kind of offset
/// the scanner reports.
///
/// Line endings are read as text: `\r\n` and a lone `\r` each come out as a
/// single `\n` and take up one character index.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    chars: Peekable<CharIndices<'a>>,
    char_index: usize,
    position: Position,
}

impl<'a> Cursor<'a> {
    pub fn new(content: &'a str) -> Self {
        Cursor {
            chars: content.char_indices().peekable(),
            char_index: 0,
            position: Position::START,
        }
    }
}

impl Iterator for Cursor<'_> {
    type Item = (Located, char);

    fn next(&mut self) -> Option<Self::Item> {
        let (byte_offset, mut ch) = self.chars.next()?;
        if ch == '\r' {
            self.chars.next_if(|&(_, next)| next == '\n');
            ch = '\n';
        }

        let located = Located {
            char_index: self.char_index,
            byte_offset,
            position: self.position,
        };

        self.char_index += 1;
        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }

        Some((located, ch))
    }
}
