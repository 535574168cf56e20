//! Location and error types shared by the fastint crates
//!
//! Every field read from a record keeps its byte span so failures can be
//! reported as `file:line:column`.

use fastint_scanner::ScanError;

/// Byte range within the record text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Line and column position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Convert byte offsets to line/column positions
pub struct SourceMap {
    line_starts: Vec<usize>,
}

impl SourceMap {
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (pos, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(pos + 1);
            }
        }
        Self { line_starts }
    }

    #[must_use]
    pub fn position(&self, byte_offset: usize) -> Position {
        match self.line_starts.binary_search(&byte_offset) {
            Ok(line) => Position::new(line + 1, 1),
            Err(line) => {
                let line_start = self.line_starts[line - 1];
                Position::new(line, byte_offset - line_start + 1)
            }
        }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

/// A value together with where it was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    #[must_use]
    pub const fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Record reading errors with location information
#[derive(thiserror::Error, Debug)]
pub enum FastIntError {
    #[error("fastint:{filename}:{line}:{column}: ERR_SCAN: {field:?}: {source}")]
    Scan {
        source: ScanError,
        field: String,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },

    #[error("fastint:{filename}:{line}:{column}: ERR_TRAILING: {field:?} has trailing characters")]
    TrailingCharacters {
        field: String,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },

    #[error("fastint: ERR_LAYOUT: {message}")]
    Layout { message: String },
}

impl FastIntError {
    /// Build a scan error; the reported column points at the byte the
    /// scanner rejected when it knows one, else at the start of the field.
    #[must_use]
    pub fn scan(
        source: ScanError,
        field: &str,
        span: Span,
        source_map: &SourceMap,
        filename: &str,
    ) -> Self {
        let offset = span.start + source.offset().unwrap_or(0);
        let pos = source_map.position(offset);
        Self::Scan {
            source,
            field: field.to_string(),
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub fn trailing_characters(
        field: &str,
        consumed: usize,
        span: Span,
        source_map: &SourceMap,
        filename: &str,
    ) -> Self {
        let pos = source_map.position(span.start + consumed);
        Self::TrailingCharacters {
            field: field.to_string(),
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub fn layout(message: impl Into<String>) -> Self {
        Self::Layout {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::Scan { span, .. } | Self::TrailingCharacters { span, .. } => Some(*span),
            Self::Layout { .. } => None,
        }
    }
}
