//! ASCII integer scanner for fixed-column numeric fields
//!
//! Converts text such as `"  -42"` or `"*****"` into a native integer. The
//! default path never fails: malformed text degrades to `0` and digit runs
//! past the type's range wrap around. A field starting with `*` (Fortran's
//! "does not fit in the column" fill) saturates to the type's maximum.
//!
//! [`scan_strict`] is the checked counterpart for callers that want to know
//! when a field was not a well-formed integer.

/// Fortran fills a field with asterisks when the value is too wide for it.
pub const OVERFLOW_MARKER: u8 = b'*';

/// End-of-text sentinel; the end of the slice reads as this byte too.
pub const NUL: u8 = 0;

const MINUS: u8 = b'-';

/// Space and horizontal tab. Newlines, carriage returns and form feeds are
/// not whitespace to the scanner.
#[must_use]
pub const fn is_white_space(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// ASCII `'0'..='9'`
#[must_use]
pub const fn is_valid_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Integer types the scanner can produce
pub trait ScanInt: Copy + Eq + std::fmt::Debug {
    const ZERO: Self;
    const MAX: Self;

    /// `self * 10 + digit`, wrapping on overflow
    #[must_use]
    fn push_digit_wrapping(self, digit: u8) -> Self;

    /// `self * 10 + digit` (or `- digit` for a negative accumulator),
    /// `None` when the result leaves the type's range
    fn push_digit_checked(self, digit: u8, negative: bool) -> Option<Self>;

    /// Multiply by -1 when `negative`, wrapping `MIN` onto itself
    #[must_use]
    fn apply_sign(self, negative: bool) -> Self;
}

macro_rules! impl_scan_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ScanInt for $ty {
                const ZERO: Self = 0;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn push_digit_wrapping(self, digit: u8) -> Self {
                    self.wrapping_mul(10).wrapping_add(Self::from(digit))
                }

                #[inline]
                fn push_digit_checked(self, digit: u8, negative: bool) -> Option<Self> {
                    let shifted = self.checked_mul(10)?;
                    if negative {
                        shifted.checked_sub(Self::from(digit))
                    } else {
                        shifted.checked_add(Self::from(digit))
                    }
                }

                #[inline]
                fn apply_sign(self, negative: bool) -> Self {
                    if negative { self.wrapping_neg() } else { self }
                }
            }
        )*
    };
}

impl_scan_int!(i16, i32, i64);

/// Outcome of a prefix scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanned<T> {
    pub value: T,
    /// Cursor position where scanning stopped (bytes consumed, including
    /// leading whitespace, the sign and the overflow marker)
    pub consumed: usize,
    /// Number of digits accumulated
    pub digits: usize,
    /// Whether the overflow marker produced the value
    pub marker: bool,
}

impl<T: ScanInt> Scanned<T> {
    const fn saturated(marker_at: usize) -> Self {
        Self {
            value: T::MAX,
            consumed: marker_at + 1,
            digits: 0,
            marker: true,
        }
    }
}

/// Strict-mode failures
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    #[error("no integer before end of input")]
    EmptyInput,

    #[error("expected a digit, found {found:?} at offset {offset}")]
    InvalidLeadingCharacter { found: char, offset: usize },

    #[error("integer out of range at offset {offset}")]
    OutOfRange { offset: usize },
}

impl ScanError {
    /// Byte offset of the failure within the scanned input, if any
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::EmptyInput => None,
            Self::InvalidLeadingCharacter { offset, .. } | Self::OutOfRange { offset } => {
                Some(*offset)
            }
        }
    }
}

#[inline]
fn byte_at(input: &[u8], cursor: usize) -> u8 {
    input.get(cursor).copied().unwrap_or(NUL)
}

/// The character starting at `cursor`, decoded as UTF-8. Bytes that do not
/// start a valid sequence read as U+FFFD.
fn char_at(input: &[u8], cursor: usize) -> char {
    input
        .get(cursor..)
        .and_then(|rest| rest.utf8_chunks().next())
        .and_then(|chunk| chunk.valid().chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[inline]
fn skip_white_space(input: &[u8]) -> usize {
    input.iter().take_while(|&&byte| is_white_space(byte)).count()
}

/// Scan a native `int`.
///
/// Never fails: `""`, `"abc"` and `"-"` all give `0`, `"*"` gives
/// `i32::MAX`, and `"2147483648"` wraps to `i32::MIN`.
#[must_use]
pub fn scan<S: AsRef<[u8]> + ?Sized>(input: &S) -> i32 {
    scan_prefix(input.as_ref()).value
}

/// [`scan`] for any supported width
#[must_use]
pub fn scan_as<T: ScanInt, S: AsRef<[u8]> + ?Sized>(input: &S) -> T {
    scan_prefix(input.as_ref()).value
}

/// Legacy scan that also reports where the cursor stopped
#[must_use]
pub fn scan_prefix<T: ScanInt>(input: &[u8]) -> Scanned<T> {
    let mut cursor = skip_white_space(input);

    // The marker is only honoured before the sign; "-*" reads as zero digits.
    if byte_at(input, cursor) == OVERFLOW_MARKER {
        return Scanned::saturated(cursor);
    }

    let negative = byte_at(input, cursor) == MINUS;
    if negative {
        cursor += 1;
    }

    let start = cursor;
    let mut value = T::ZERO;
    while is_valid_digit(byte_at(input, cursor)) {
        value = value.push_digit_wrapping(byte_at(input, cursor) - b'0');
        cursor += 1;
    }

    Scanned {
        value: value.apply_sign(negative),
        consumed: cursor,
        digits: cursor - start,
        marker: false,
    }
}

/// Checked scan of a native `int`.
///
/// # Errors
///
/// Returns `ScanError` when no digits follow the whitespace and optional
/// sign, or when the digit run does not fit in an `i32`.
pub fn scan_strict<S: AsRef<[u8]> + ?Sized>(input: &S) -> Result<i32, ScanError> {
    scan_strict_prefix(input.as_ref()).map(|scanned| scanned.value)
}

/// Checked scan that also reports where the cursor stopped
///
/// # Errors
///
/// Returns `ScanError` when no digits follow the whitespace and optional
/// sign, or when the digit run does not fit in `T`.
pub fn scan_strict_prefix<T: ScanInt>(input: &[u8]) -> Result<Scanned<T>, ScanError> {
    let mut cursor = skip_white_space(input);

    let negative = match byte_at(input, cursor) {
        NUL => return Err(ScanError::EmptyInput),
        OVERFLOW_MARKER => return Ok(Scanned::saturated(cursor)),
        MINUS => {
            cursor += 1;
            true
        }
        _ => false,
    };

    let start = cursor;
    let mut value = T::ZERO;
    while is_valid_digit(byte_at(input, cursor)) {
        // Accumulating toward the sign keeps MIN representable.
        value = value
            .push_digit_checked(byte_at(input, cursor) - b'0', negative)
            .ok_or(ScanError::OutOfRange { offset: cursor })?;
        cursor += 1;
    }

    if cursor == start {
        return Err(match byte_at(input, cursor) {
            NUL => ScanError::EmptyInput,
            _ => ScanError::InvalidLeadingCharacter {
                found: char_at(input, cursor),
                offset: cursor,
            },
        });
    }

    Ok(Scanned {
        value,
        consumed: cursor,
        digits: cursor - start,
        marker: false,
    })
}
