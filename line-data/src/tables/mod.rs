//! Lookup tables published for the dashboard.
//!
//! Both tables are keyed by every code a rider might type for a line: the
//! code as exported, and its Latin transliteration when that differs. Keys
//! keep first-insertion order; a later record with the same key replaces
//! the value in place.

mod details;
mod mapping;

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::dataset::LineRecord;
use crate::translit::Transliterator;

pub use details::build_details;
pub use mapping::build_mapping;

/// Line code → internal line identifier.
pub type CodeMapping = IndexMap<String, String>;

/// Line code → line metadata.
///
/// The original and transliterated keys of a line share one `LineInfo`.
pub type LineDetails = IndexMap<String, Arc<LineInfo>>;

/// Metadata published for one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineInfo {
    /// Internal line identifier.
    pub id: String,

    /// Line type, as exported.
    #[serde(rename = "type")]
    pub line_type: String,

    /// Line category, as exported.
    pub category: String,

    /// Streets in direction A, or `None` if the export has none.
    #[serde(rename = "streetsA")]
    pub streets_a: Option<Vec<String>>,

    /// Streets in direction B, or `None` if the export has none.
    #[serde(rename = "streetsB")]
    pub streets_b: Option<Vec<String>>,
}

/// The codes under which an eligible record is published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordKeys<'a> {
    pub id: &'a str,
    pub original: &'a str,
    /// Transliterated code, present only when it differs from `original`.
    pub latin: Option<String>,
}

impl<'a> RecordKeys<'a> {
    /// Returns `None` for records lacking a display code or identifier.
    pub fn for_record(record: &'a LineRecord, translit: &Transliterator) -> Option<Self> {
        let (original, id) = record.identity()?;
        let latin = translit.transliterate(original);
        Some(Self {
            id,
            original,
            latin: (latin != original).then_some(latin),
        })
    }

    /// Original code first, then the Latin variant.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.original).chain(self.latin.as_deref())
    }
}
