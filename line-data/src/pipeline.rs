//! One generator run: load, build, write.

use std::path::PathBuf;

use tracing::info;

use crate::config::GeneratorConfig;
use crate::dataset::{DatasetError, load_dataset};
use crate::report::Report;
use crate::tables::{CodeMapping, LineDetails, build_details, build_mapping};
use crate::translit::Transliterator;
use crate::writer::{WriteError, write_table};

/// Fatal errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The dataset is missing or could not be parsed
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// An output table could not be written
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Records in the dataset, eligible or not.
    pub record_count: usize,

    /// The written code mapping.
    pub mapping: CodeMapping,

    /// The written line details.
    pub details: LineDetails,

    /// Where the mapping was written.
    pub mapping_path: PathBuf,

    /// Where the details were written.
    pub details_path: PathBuf,
}

impl RunSummary {
    /// Statistics over the written tables.
    pub fn report(&self) -> Report {
        Report::from_tables(&self.mapping, &self.details)
    }
}

/// Regenerate both tables from the dataset named in `config`.
///
/// Tables are rebuilt from scratch and overwrite any previous output. The
/// first fatal error stops the run; the mapping may already have been
/// written when the details fail.
pub fn run(
    config: &GeneratorConfig,
    translit: &Transliterator,
) -> Result<RunSummary, GenerateError> {
    let dataset = load_dataset(&config.input)?;

    let mapping = build_mapping(&dataset.lines, translit);
    write_table(&mapping, &config.mapping_output)?;
    info!(
        entries = mapping.len(),
        path = %config.mapping_output.display(),
        "saved line code mapping"
    );

    let details = build_details(&dataset.lines, translit);
    write_table(&details, &config.details_output)?;
    info!(
        entries = details.len(),
        path = %config.details_output.display(),
        "saved line details"
    );

    Ok(RunSummary {
        record_count: dataset.lines.len(),
        mapping,
        details,
        mapping_path: config.mapping_output.clone(),
        details_path: config.details_output.clone(),
    })
}
