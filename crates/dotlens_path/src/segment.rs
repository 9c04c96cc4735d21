//! Provide single-segment views of a dotted path.

use core::fmt;

// -----------------------------------------------------------------------------
// Numeric detection

/// Parses a segment as a sequence index.
///
/// A segment is numeric when it is non-empty, made only of ASCII digits and
/// fits in a `usize`. Leading zeros are accepted, everything else (signs,
/// whitespace, decimal points, exponents) is not.
///
/// # Examples
///
/// ```
/// use dotlens_path::parse_index;
///
/// assert_eq!(parse_index("0"), Some(0));
/// assert_eq!(parse_index("12"), Some(12));
/// assert_eq!(parse_index("007"), Some(7));
///
/// assert_eq!(parse_index(""), None);
/// assert_eq!(parse_index("a"), None);
/// assert_eq!(parse_index("-1"), None);
/// assert_eq!(parse_index("1.5"), None);
/// ```
pub fn parse_index(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Only overflow can fail here.
    text.parse().ok()
}

// -----------------------------------------------------------------------------
// Segment

/// A **singular** component of a [`DotPath`](crate::DotPath).
///
/// Every segment can address a mapping key through [`text`](Segment::text).
/// Numeric segments can address a sequence element as well, see
/// [`index`](Segment::index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<'a> {
    pub(crate) text: &'a str,
    pub(crate) index: Option<usize>,
    pub(crate) offset: usize,
    pub(crate) position: usize,
}

impl<'a> Segment<'a> {
    /// Returns the raw text of the segment, used as a mapping key.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the sequence index if this segment is numeric.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns `true` if the segment is numeric.
    #[inline]
    pub fn is_index(&self) -> bool {
        self.index.is_some()
    }

    /// Byte offset of the segment in its source path.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Zero-based position of the segment within its path.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` for the first segment of a path.
    #[inline]
    pub fn is_first(&self) -> bool {
        self.position == 0
    }
}

impl fmt::Display for Segment<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}
