//! This crate implements the standard data element dictionary
//! used by the `dcmtree` decoder.
//!
//! ## Run-time dictionary
//!
//! - [`data_element`]: maps a tag to the canonical name under which the
//!   element is stored in the property tree, and to the value representation
//!   assumed under implicit VR encoding.
//!   Names are also synthesized for private creator elements
//!   (`Private Code for (gggg,xx00)-(gggg,xxff)`)
//!   and for the overlay group (`DICOM overlay info/0xNNNN`).
//!
//! The dictionary is provided as a singleton
//! behind a unit type for efficiency and ease of use.
//!
//! ## Constants
//!
//! - [`tags`], which map an attribute alias to a DICOM tag
pub mod data_element;
pub mod tags;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
