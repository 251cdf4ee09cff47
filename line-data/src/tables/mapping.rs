//! Code → identifier mapping.

use tracing::{debug, info, trace};

use super::{CodeMapping, RecordKeys};
use crate::dataset::LineRecord;
use crate::translit::Transliterator;

/// Build the line code mapping from records in export order.
///
/// Ineligible records are skipped. When two records share a code, the later
/// one wins.
pub fn build_mapping(records: &[LineRecord], translit: &Transliterator) -> CodeMapping {
    let mut mapping = CodeMapping::new();

    for (index, record) in records.iter().enumerate() {
        let Some(keys) = RecordKeys::for_record(record, translit) else {
            debug!(index, code = %record.display_code, "skipping line without code or id");
            continue;
        };

        for code in keys.codes() {
            trace!(code, id = keys.id, "mapping line code");
            if let Some(previous) = mapping.insert(code.to_string(), keys.id.to_string())
                && previous != keys.id
            {
                debug!(code, previous = %previous, id = keys.id, "line code reassigned");
            }
        }
    }

    info!(entries = mapping.len(), "built line code mapping");
    mapping
}
