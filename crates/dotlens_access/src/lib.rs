#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod lens;
mod options;
mod resolve;
mod step;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use error::{InvalidPath, Operation};
pub use lens::{PathLens, ValuePathExt};
pub use options::AccessOptions;
pub use resolve::{get, set};

pub use dotlens_path::{DotPath, Segment};
pub use serde_json::Value;
