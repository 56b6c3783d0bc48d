#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! Core library of the `dcmtree` decoder, holding the concepts shared by
//! every other crate of the workspace.
//!
//! - [`header`] comprises the data types of a DICOM element header:
//!   tags, value representations and lengths.
//! - [`dictionary`] describes how tags are mapped to canonical names and,
//!   under implicit VR encoding, to their value representation.
//! - [`value`] holds the generic value type that decoded scalars and
//!   lists are stored as.
//! - [`tree`] contains the hierarchical, multi-valued property tree
//!   which decoded elements are written into.

pub mod dictionary;
pub mod header;
pub mod tree;
pub mod value;

pub use dictionary::{DataDictionary, DictionaryEntry};
pub use header::{DataElementHeader, Length, Tag, VR};
pub use tree::{Entry, Property, PropertyTree};
pub use value::{ConvertValueError, Value};

// re-export crates that are part of the public API
pub use chrono;
pub use smallvec;
