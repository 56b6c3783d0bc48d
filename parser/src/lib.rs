//! This crate works on top of the `dcmtree-encoding` primitives
//! to read whole element streams out of an in-memory buffer.
//!
//! - [`cursor`] walks over element headers and slices out their values,
//!   checking every access against the buffer bounds.
//! - [`dataset`] drives the cursor over nested sequences and items,
//!   storing decoded values in a property tree
//!   and binary values in a [`BlobTable`].
//! - [`csa`] parses the Siemens CSA header found in one private binary value.
//!
//! All reading is synchronous and allocation is limited to the values
//! being produced.
#![warn(missing_debug_implementations, unused_qualifications)]

pub mod blob;
pub mod csa;
pub mod cursor;
pub mod dataset;
pub mod error;

pub use blob::BlobTable;
pub use cursor::{Cursor, Element};
pub use dataset::{read_dataset, DataSet, DataSetReader, Terminator};
pub use error::{Error, Result};
