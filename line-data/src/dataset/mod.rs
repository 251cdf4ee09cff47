//! Raw line dataset.
//!
//! The dataset is a JSON document of the form `{ "linije": [ ... ] }`
//! exported by the transit operator, with Serbian field names. This module
//! maps it onto [`LineRecord`]s and loads it from disk, failing fast when
//! the file is absent or not shaped as expected.

mod error;
mod loader;
mod types;

pub use error::DatasetError;
pub use loader::{load_dataset, parse_dataset};
pub use types::{Dataset, LineRecord, RouteVersion};
