//! Fixed-column layouts
//!
//! Fortran writes integer records with `Iw` edit descriptors: every field is
//! exactly `w` columns wide, right-justified, and filled with `*` when the
//! value does not fit. A layout such as `"3I5,I8"` describes one such record.

use fastint_ast::{FastIntError, Span, Spanned};
use fastint_scanner::scan_strict_prefix;

/// Upper bound on the number of columns one layout may describe
pub const MAX_COLUMNS: usize = 4096;

/// Column widths of a fixed-format integer record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLayout {
    widths: Vec<usize>,
}

impl FixedLayout {
    /// Create a layout from explicit column widths
    ///
    /// # Errors
    ///
    /// Returns `FastIntError::Layout` if no widths are given, any width is
    /// zero, or there are more than [`MAX_COLUMNS`] of them
    pub fn new(widths: Vec<usize>) -> Result<Self, FastIntError> {
        if widths.is_empty() {
            return Err(FastIntError::layout("layout has no columns"));
        }
        if widths.len() > MAX_COLUMNS {
            return Err(too_many_columns());
        }
        if let Some(column) = widths.iter().position(|&width| width == 0) {
            return Err(FastIntError::layout(format!(
                "column {} has zero width",
                column + 1
            )));
        }
        Ok(Self { widths })
    }

    /// Parse a Fortran-style format such as `"(3I5, I8)"` or `"2i4.2"`
    ///
    /// # Errors
    ///
    /// Returns `FastIntError::Layout` if an item is not an `[r]Iw[.m]` descriptor
    pub fn parse(descriptor: &str) -> Result<Self, FastIntError> {
        let trimmed = descriptor.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let mut widths = Vec::new();
        for item in inner.split(',') {
            let (repeat, width) = parse_item(item)?;
            if repeat == 0 {
                return Err(FastIntError::layout(format!(
                    "repeat count in {:?} must be positive",
                    item.trim()
                )));
            }
            let within_limit = widths
                .len()
                .checked_add(repeat)
                .is_some_and(|columns| columns <= MAX_COLUMNS);
            if !within_limit {
                return Err(too_many_columns());
            }
            widths.extend(std::iter::repeat_n(width, repeat));
        }
        Self::new(widths)
    }

    #[must_use]
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Total number of columns in one record
    #[must_use]
    pub fn record_width(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Slice a line into its fields. Spans are relative to the line.
    ///
    /// A line shorter than the layout yields a truncated last field and no
    /// fields for the columns it does not reach.
    #[must_use]
    pub fn split<'a>(&self, line: &'a [u8]) -> Vec<Spanned<&'a [u8]>> {
        let mut fields = Vec::with_capacity(self.widths.len());
        let mut start = 0;
        for &width in &self.widths {
            if start >= line.len() {
                break;
            }
            let end = (start + width).min(line.len());
            fields.push(Spanned::new(&line[start..end], Span::new(start, end)));
            start = end;
        }
        fields
    }
}

fn too_many_columns() -> FastIntError {
    FastIntError::layout(format!("layout has more than {MAX_COLUMNS} columns"))
}

fn parse_item(item: &str) -> Result<(usize, usize), FastIntError> {
    let item = item.trim();
    let Some(edit) = item.find(['I', 'i']) else {
        return Err(FastIntError::layout(format!(
            "{item:?} is not an integer edit descriptor"
        )));
    };

    let repeat = match &item[..edit] {
        "" => 1,
        count => parse_count(count, item)?,
    };
    // Minimum-digits suffix (`I5.3`) only affects output.
    let (width, min_digits) = match item[edit + 1..].split_once('.') {
        Some((width, min_digits)) => (width, Some(min_digits)),
        None => (&item[edit + 1..], None),
    };
    if let Some(min_digits) = min_digits {
        parse_count(min_digits, item)?;
    }
    Ok((repeat, parse_count(width, item)?))
}

fn parse_count(text: &str, item: &str) -> Result<usize, FastIntError> {
    let invalid = || FastIntError::layout(format!("invalid count {text:?} in {item:?}"));

    let scanned = scan_strict_prefix::<i32>(text.as_bytes()).map_err(|_| invalid())?;
    if scanned.marker || scanned.consumed != text.len() || text.starts_with([' ', '\t', '-']) {
        return Err(invalid());
    }
    usize::try_from(scanned.value).map_err(|_| invalid())
}
