//! This module contains a stub dictionary.

use super::{DataDictionary, DictionaryEntry};
use crate::header::Tag;

/// An empty attribute dictionary.
///
/// Every element decoded with it is named `UnknownTag/(gggg,eeee)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StubDataDictionary;

impl DataDictionary for StubDataDictionary {
    fn by_tag(&self, _: Tag) -> Option<DictionaryEntry> {
        None
    }
}
