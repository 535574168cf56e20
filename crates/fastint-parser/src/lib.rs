//! Integer record reader for fastint
//!
//! Reads blocks of integer records, either whitespace-separated (the body of
//! a VASP `<v type="int">` element) or laid out in fixed Fortran columns,
//! running every field through the scanner.

use fastint_ast::{FastIntError, SourceMap, Span};
use fastint_lexer::{Lexer, is_blank};
use fastint_scanner::{OVERFLOW_MARKER, is_white_space, scan_prefix, scan_strict_prefix};
use log::{debug, trace};

pub mod layout;

pub use layout::FixedLayout;

/// How malformed fields are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Never fail: malformed fields read as `0`, overflowing digits wrap
    #[default]
    Legacy,
    /// Reject fields that are not exactly one well-formed integer
    Strict,
}

/// Reads integer records from one block of text, keeping the filename and
/// a source map so strict-mode errors carry `file:line:column`
pub struct RecordReader<'input> {
    input: &'input str,
    source_map: SourceMap,
    filename: String,
}

impl<'input> RecordReader<'input> {
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self::new_with_filename(input, "<input>")
    }

    #[must_use]
    pub fn new_with_filename(input: &'input str, filename: &str) -> Self {
        Self {
            input,
            source_map: SourceMap::new(input),
            filename: filename.to_string(),
        }
    }

    /// Read one row per non-blank line, one value per whitespace-separated field
    ///
    /// # Errors
    ///
    /// In strict mode, returns `FastIntError` for the first field that is not
    /// a well-formed integer
    pub fn read_rows(&self, mode: ScanMode) -> Result<Vec<Vec<i32>>, FastIntError> {
        let records = Lexer::new(self.input).records();
        debug!("{}: {} records ({mode:?})", self.filename, records.len());

        records
            .iter()
            .map(|record| {
                record
                    .iter()
                    .map(|token| self.scan_field(token.text.as_bytes(), token.span, mode))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect()
    }

    /// Read every field in the input as one flat list
    ///
    /// # Errors
    ///
    /// Same as [`RecordReader::read_rows`]
    pub fn read_values(&self, mode: ScanMode) -> Result<Vec<i32>, FastIntError> {
        Ok(self.read_rows(mode)?.into_iter().flatten().collect())
    }

    /// Read one row per non-blank line, slicing columns with `layout`
    ///
    /// # Errors
    ///
    /// In strict mode, returns `FastIntError` for the first column that is
    /// blank or not a well-formed integer
    pub fn read_fixed(
        &self,
        layout: &FixedLayout,
        mode: ScanMode,
    ) -> Result<Vec<Vec<i32>>, FastIntError> {
        debug!(
            "{}: fixed layout {:?} ({mode:?})",
            self.filename,
            layout.widths()
        );

        let mut rows = Vec::new();
        let mut line_start = 0;
        for raw in self.input.split_inclusive('\n') {
            let line = raw.trim_end_matches(['\n', '\r']).as_bytes();
            if !line.iter().all(|&byte| is_blank(byte)) {
                let row = layout
                    .split(line)
                    .into_iter()
                    .map(|field| {
                        let span =
                            Span::new(line_start + field.span.start, line_start + field.span.end);
                        self.scan_field(field.node, span, mode)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                rows.push(row);
            }
            line_start += raw.len();
        }

        debug!("{}: {} fixed records", self.filename, rows.len());
        Ok(rows)
    }

    fn scan_field(&self, field: &[u8], span: Span, mode: ScanMode) -> Result<i32, FastIntError> {
        match mode {
            ScanMode::Legacy => {
                let scanned = scan_prefix::<i32>(field);
                trace!("{span:?}: {}", scanned.value);
                Ok(scanned.value)
            }
            ScanMode::Strict => {
                let scanned = scan_strict_prefix::<i32>(field).map_err(|error| {
                    FastIntError::scan(
                        error,
                        &String::from_utf8_lossy(field),
                        span,
                        &self.source_map,
                        &self.filename,
                    )
                })?;

                // A marker field may be filled out with more asterisks.
                let rest = &field[scanned.consumed..];
                let clean = rest.iter().all(|&byte| {
                    is_white_space(byte) || (scanned.marker && byte == OVERFLOW_MARKER)
                });
                if !clean {
                    return Err(FastIntError::trailing_characters(
                        &String::from_utf8_lossy(field),
                        scanned.consumed,
                        span,
                        &self.source_map,
                        &self.filename,
                    ));
                }

                trace!("{span:?}: {}", scanned.value);
                Ok(scanned.value)
            }
        }
    }

    #[must_use]
    pub const fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub const fn input(&self) -> &'input str {
        self.input
    }
}
