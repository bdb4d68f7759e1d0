use std::ops::Range;

use crate::diagnostics::ParseError;

/// A line of source text together with its position.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Line<'a> {
    pub number: usize,
    pub start: usize,
    pub text: &'a str,
}

impl Line<'_> {
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Byte range of `part`, which must be a subslice of this line.
    pub fn span_of(&self, part: &str) -> Range<usize> {
        let offset = part.as_ptr() as usize - self.text.as_ptr() as usize;
        let start = self.start + offset;
        start..start + part.len()
    }
}

/// Line-by-line reader over one world-data file.
pub(crate) struct Cursor<'a> {
    file: &'a str,
    lines: Vec<Line<'a>>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(file: &'a str, source: &'a str) -> Self {
        let mut lines = Vec::new();
        let mut start = 0;
        for (idx, raw) in source.split_inclusive('\n').enumerate() {
            let text = raw.trim_end_matches(['\n', '\r']);
            lines.push(Line {
                number: idx + 1,
                start,
                text,
            });
            start += raw.len();
        }
        Self {
            file,
            lines,
            pos: 0,
        }
    }

    pub fn peek(&self) -> Option<Line<'a>> {
        self.lines.get(self.pos).copied()
    }

    pub fn next_line(&mut self) -> Option<Line<'a>> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// Advances past blank lines; returns false at end of input.
    pub fn skip_blank(&mut self) -> bool {
        while let Some(line) = self.peek() {
            if !line.is_blank() {
                return true;
            }
            self.pos += 1;
        }
        false
    }

    /// The next line, or an end-of-file error mentioning `expected`.
    pub fn expect_line(&mut self, expected: &str) -> Result<Line<'a>, ParseError> {
        self.next_line()
            .ok_or_else(|| self.eof_error(format!("unexpected end of file, expected {expected}")))
    }

    pub fn error(&self, line: Line<'_>, span: Range<usize>, message: impl Into<String>) -> ParseError {
        ParseError::new(self.file, line.number, span, message)
    }

    fn eof_error(&self, message: String) -> ParseError {
        let (number, end) = self
            .lines
            .last()
            .map(|l| (l.number, l.start + l.text.len()))
            .unwrap_or((1, 0));
        ParseError::new(self.file, number, end..end, message)
    }
}

/// Parses a positive room number token.
pub(crate) fn parse_number(token: &str) -> Option<u32> {
    token.trim().parse::<u32>().ok()
}
