#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod path;
mod segment;

// -----------------------------------------------------------------------------
// Top-level exports

pub use path::{DotPath, Segments};
pub use segment::{Segment, parse_index};
