//! Code → line metadata table.

use std::sync::Arc;

use tracing::{debug, info};

use super::{LineDetails, LineInfo, RecordKeys};
use crate::dataset::LineRecord;
use crate::streets::parse_streets;
use crate::translit::Transliterator;

impl LineInfo {
    /// Build the published metadata for a record with the given identifier.
    ///
    /// Street lists come from the first route version only; a record with
    /// no versions has neither direction.
    pub fn from_record(record: &LineRecord, id: &str) -> Self {
        let version = record.current_version();
        let streets_a = version.and_then(|v| parse_streets(v.streets_direction_a.as_deref()));
        let streets_b = version.and_then(|v| parse_streets(v.streets_direction_b.as_deref()));

        Self {
            id: id.to_string(),
            line_type: record.line_type.clone(),
            category: record.category.clone(),
            streets_a,
            streets_b,
        }
    }
}

/// Build the line details table from records in export order.
///
/// Uses the same eligibility and last-write-wins rules as
/// [`build_mapping`](super::build_mapping).
pub fn build_details(records: &[LineRecord], translit: &Transliterator) -> LineDetails {
    let mut details = LineDetails::new();

    for record in records {
        let Some(keys) = RecordKeys::for_record(record, translit) else {
            continue;
        };

        let info = Arc::new(LineInfo::from_record(record, keys.id));

        for code in keys.codes() {
            if let Some(previous) = details.insert(code.to_string(), Arc::clone(&info)) {
                debug!(code, previous = %previous.id, id = keys.id, "line details replaced");
            }
        }
    }

    info!(entries = details.len(), "built line details");
    details
}
