use std::fmt;
use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};

/// A syntax error in a world-data file, with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Name of the file being parsed.
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// Byte range of the offending text.
    pub span: Range<usize>,
    /// What went wrong.
    pub message: String,
    /// Optional label shown under the offending text.
    pub label: Option<String>,
}

impl ParseError {
    /// Creates an error at `line` covering `span`.
    pub fn new(
        file: impl Into<String>,
        line: usize,
        span: Range<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            span,
            message: message.into(),
            label: None,
        }
    }

    /// Attaches a label to the highlighted span.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Renders the error against its source text using ariadne.
    pub fn render(&self, source: &str) -> String {
        let mut output = Vec::new();
        let filename = self.file.as_str();

        let span = (filename, self.span.clone());
        let label_text = self.label.as_deref().unwrap_or(&self.message);
        Report::build(ReportKind::Error, span)
            .with_message(&self.message)
            .with_label(
                Label::new((filename, self.span.clone()))
                    .with_message(label_text)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut output)
            .ok();

        String::from_utf8(output).unwrap_or_default()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.message)
    }
}

impl std::error::Error for ParseError {}
