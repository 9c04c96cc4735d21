//! Provide the parsed, reusable form of a dotted path.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::iter::{Enumerate, FusedIterator};
use core::{fmt, slice};

use crate::segment::{Segment, parse_index};

// -----------------------------------------------------------------------------
// Span

/// Byte range of one segment, plus its cached numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Span {
    start: usize,
    end: usize,
    index: Option<usize>,
}

fn scan(source: &str) -> Box<[Span]> {
    let mut spans = Vec::with_capacity(source.bytes().filter(|&b| b == b'.').count() + 1);
    let mut start = 0;
    for text in source.split('.') {
        let end = start + text.len();
        spans.push(Span {
            start,
            end,
            index: parse_index(text),
        });
        // skip the '.'
        start = end + 1;
    }
    spans.into_boxed_slice()
}

// -----------------------------------------------------------------------------
// DotPath

/// A path split on `"."` into [`Segment`]s.
///
/// Parsing never fails: `""` is a path with one empty segment and `"a."` ends
/// with an empty segment. Whether those segments resolve is up to the caller.
///
/// The path can borrow its source or own it; parse it once and reuse it for
/// as many lookups as needed.
///
/// # Examples
///
/// ```
/// use dotlens_path::DotPath;
///
/// let path = DotPath::parse("d.0.a");
/// assert_eq!(path.len(), 3);
///
/// let texts: Vec<&str> = path.segments().map(|s| s.text()).collect();
/// assert_eq!(texts, ["d", "0", "a"]);
///
/// assert_eq!(path.get(1).unwrap().index(), Some(0));
/// assert_eq!(path.prefix(2), Some("d.0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DotPath<'a> {
    source: Cow<'a, str>,
    spans: Box<[Span]>,
}

impl<'a> DotPath<'a> {
    /// Parses a borrowed path string.
    #[inline]
    pub fn parse(path: &'a str) -> Self {
        Self::from_source(Cow::Borrowed(path))
    }

    /// Parses an owned path string.
    #[inline]
    pub fn parse_owned(path: String) -> DotPath<'static> {
        DotPath::from_source(Cow::Owned(path))
    }

    fn from_source(source: Cow<'a, str>) -> Self {
        let spans = scan(&source);
        Self { source, spans }
    }

    /// Converts this into an "owned" value.
    #[inline]
    pub fn into_owned(self) -> DotPath<'static> {
        DotPath {
            source: Cow::Owned(self.source.into_owned()),
            spans: self.spans,
        }
    }

    /// Returns the original path string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the number of segments, always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns the segment at `position`.
    #[inline]
    pub fn get(&self, position: usize) -> Option<Segment<'_>> {
        self.spans
            .get(position)
            .map(|span| self.segment(position, span))
    }

    /// Returns the first segment.
    #[inline]
    pub fn first(&self) -> Segment<'_> {
        self.segment(0, &self.spans[0])
    }

    /// Returns the terminal segment.
    #[inline]
    pub fn last(&self) -> Segment<'_> {
        let position = self.spans.len() - 1;
        self.segment(position, &self.spans[position])
    }

    /// Returns the terminal segment and an iterator over the intermediate ones.
    pub fn split_last(&self) -> (Segment<'_>, Segments<'_>) {
        let intermediate = &self.spans[..self.spans.len() - 1];
        let segments = Segments {
            source: &self.source,
            spans: intermediate.iter().enumerate(),
        };
        (self.last(), segments)
    }

    /// Returns an iterator over all segments.
    #[inline]
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            source: &self.source,
            spans: self.spans.iter().enumerate(),
        }
    }

    /// Returns the `"."`-joined text of the segments before `position`.
    ///
    /// Returns `None` for the first segment, which has no prefix, and for
    /// positions past the end of the path.
    ///
    /// ```
    /// # use dotlens_path::DotPath;
    /// let path = DotPath::parse("c.cA.x");
    /// assert_eq!(path.prefix(0), None);
    /// assert_eq!(path.prefix(1), Some("c"));
    /// assert_eq!(path.prefix(2), Some("c.cA"));
    /// assert_eq!(path.prefix(3), Some("c.cA.x"));
    /// assert_eq!(path.prefix(4), None);
    /// ```
    pub fn prefix(&self, position: usize) -> Option<&str> {
        if position == 0 {
            return None;
        }
        let end = self.spans.get(position - 1)?.end;
        Some(&self.source[..end])
    }

    #[inline]
    fn segment(&self, position: usize, span: &Span) -> Segment<'_> {
        make_segment(&self.source, position, span)
    }
}

#[inline]
fn make_segment<'s>(source: &'s str, position: usize, span: &Span) -> Segment<'s> {
    Segment {
        text: &source[span.start..span.end],
        index: span.index,
        offset: span.start,
        position,
    }
}

impl fmt::Display for DotPath<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl<'a> From<&'a str> for DotPath<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::parse(value)
    }
}

impl<'a> From<&'a String> for DotPath<'a> {
    #[inline]
    fn from(value: &'a String) -> Self {
        Self::parse(value)
    }
}

impl From<String> for DotPath<'_> {
    #[inline]
    fn from(value: String) -> Self {
        Self::from_source(Cow::Owned(value))
    }
}

impl<'a> From<&'a DotPath<'_>> for DotPath<'a> {
    /// Borrows an already parsed path without scanning it again.
    #[inline]
    fn from(value: &'a DotPath<'_>) -> Self {
        Self {
            source: Cow::Borrowed(value.as_str()),
            spans: value.spans.clone(),
        }
    }
}

// -----------------------------------------------------------------------------
// Iterator

/// Iterator over the [`Segment`]s of a [`DotPath`].
#[derive(Debug, Clone)]
pub struct Segments<'s> {
    source: &'s str,
    spans: Enumerate<slice::Iter<'s, Span>>,
}

impl<'s> Iterator for Segments<'s> {
    type Item = Segment<'s>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (position, span) = self.spans.next()?;
        Some(make_segment(self.source, position, span))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.spans.size_hint()
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl FusedIterator for Segments<'_> {}

#[cfg(test)]
mod tests {
    use super::DotPath;
    use alloc::string::String;
    use alloc::vec::Vec;

    fn texts<'a>(path: &'a DotPath<'_>) -> Vec<&'a str> {
        path.segments().map(|s| s.text()).collect()
    }

    #[test]
    fn single_segment() {
        let path = DotPath::parse("a");
        assert_eq!(path.len(), 1);
        assert_eq!(path.first(), path.last());
        assert_eq!(path.first().text(), "a");
        assert!(path.first().is_first());
    }

    #[test]
    fn empty_segments() {
        assert_eq!(texts(&DotPath::parse("")), [""]);
        assert_eq!(texts(&DotPath::parse("a.")), ["a", ""]);
        assert_eq!(texts(&DotPath::parse(".a")), ["", "a"]);
        assert_eq!(texts(&DotPath::parse("a..b")), ["a", "", "b"]);
    }

    #[test]
    fn offsets_and_indices() {
        let path = DotPath::parse("d.10.abc");
        let segments: Vec<_> = path.segments().collect();

        assert_eq!(segments[0].offset(), 0);
        assert_eq!(segments[1].offset(), 2);
        assert_eq!(segments[2].offset(), 5);

        assert_eq!(segments[0].index(), None);
        assert_eq!(segments[1].index(), Some(10));
        assert_eq!(segments[2].position(), 2);
    }

    #[test]
    fn split_last() {
        let path = DotPath::parse("a.b.c");
        let (last, rest) = path.split_last();
        assert_eq!(last.text(), "c");
        assert_eq!(last.position(), 2);
        assert_eq!(rest.map(|s| s.text()).collect::<Vec<_>>(), ["a", "b"]);

        let single = DotPath::parse("a");
        let (last, rest) = single.split_last();
        assert_eq!(last.text(), "a");
        assert_eq!(rest.len(), 0);
    }

    #[test]
    fn prefix_is_joined_segments() {
        let path = DotPath::parse("é.ü.x");
        assert_eq!(path.prefix(1), Some("é"));
        assert_eq!(path.prefix(2), Some("é.ü"));
    }

    #[test]
    fn owned_and_borrowed() {
        let source = String::from("x.0");
        let borrowed = DotPath::from(&source);
        let owned = borrowed.clone().into_owned();
        drop(source);

        assert_eq!(owned.as_str(), "x.0");
        assert_eq!(owned.last().index(), Some(0));

        let reborrowed = DotPath::from(&owned);
        assert_eq!(reborrowed, owned);
    }
}
