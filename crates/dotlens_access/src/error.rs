use alloc::string::{String, ToString};
use core::fmt;

use dotlens_path::DotPath;
use thiserror::Error;

// -----------------------------------------------------------------------------
// Operation

/// The accessor operation an [`InvalidPath`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// A read through [`get`](crate::get).
    Get,
    /// A write through [`set`](crate::set).
    Set,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("get"),
            Self::Set => f.write_str("set"),
        }
    }
}

// -----------------------------------------------------------------------------
// Message parts

/// Where the failing segment sits, relative to the segments before it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Anchor {
    First,
    After(String),
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => Ok(()),
            Self::After(prefix) => write!(f, " after `{prefix}`"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Caret {
    column: usize,
}

impl fmt::Display for Caret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>width$}", '^', width = self.column + 1)
    }
}

// -----------------------------------------------------------------------------
// Error

/// A path segment that could not be resolved, or created, during a `get` or
/// a `set`.
///
/// The message quotes the full path with a caret under the failing place:
/// column 0 for the first segment, otherwise the column right after the
/// prefix of segments that did resolve.
///
/// ```text
/// cannot set `d.x.y`: segment `x` after `d` does not resolve
///     d.x.y
///      ^
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
#[error(
    "cannot {operation} `{path}`: segment `{segment}`{anchor} does not resolve\n    {path}\n    {caret}"
)]
pub struct InvalidPath {
    operation: Operation,
    path: String,
    segment: String,
    position: usize,
    anchor: Anchor,
    caret: Caret,
}

impl InvalidPath {
    pub(crate) fn new(operation: Operation, path: &DotPath<'_>, position: usize) -> Self {
        let (segment, offset) = path
            .get(position)
            .map(|segment| (segment.text().to_string(), segment.offset()))
            .unwrap_or_default();

        let anchor = match path.prefix(position) {
            Some(prefix) => Anchor::After(prefix.to_string()),
            None => Anchor::First,
        };
        // A later segment points at the '.' right before it.
        let column = path.as_str()[..offset].chars().count().saturating_sub(1);

        Self {
            operation,
            path: path.as_str().to_string(),
            segment,
            position,
            anchor,
            caret: Caret { column },
        }
    }

    /// Returns the operation that failed.
    #[inline]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns the full path as given by the caller.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the text of the failing segment.
    #[inline]
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Returns the zero-based position of the failing segment.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` if the path failed on its first segment.
    #[inline]
    pub fn is_first_segment(&self) -> bool {
        matches!(self.anchor, Anchor::First)
    }

    /// Returns the `"."`-joined segments before the failing one.
    #[inline]
    pub fn prefix(&self) -> Option<&str> {
        match &self.anchor {
            Anchor::First => None,
            Anchor::After(prefix) => Some(prefix),
        }
    }

    /// Returns the caret column, in characters.
    #[inline]
    pub fn column(&self) -> usize {
        self.caret.column
    }
}
