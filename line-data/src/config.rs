//! Input and output locations for the generator.

use std::path::{Path, PathBuf};

/// Dataset file, relative to the project root.
pub const DEFAULT_INPUT: &str = "lines";

/// Code mapping output, relative to the project root.
pub const DEFAULT_MAPPING_OUTPUT: &str = "src/client/line_mapping.json";

/// Line details output, relative to the project root.
pub const DEFAULT_DETAILS_OUTPUT: &str = "src/client/line_details.json";

/// Environment variable overriding the project root.
pub const ENV_ROOT: &str = "LINE_DATA_ROOT";

/// Environment variable overriding the dataset path.
pub const ENV_INPUT: &str = "LINE_DATA_INPUT";

/// Environment variable overriding the code mapping path.
pub const ENV_MAPPING_OUTPUT: &str = "LINE_MAPPING_OUTPUT";

/// Environment variable overriding the line details path.
pub const ENV_DETAILS_OUTPUT: &str = "LINE_DETAILS_OUTPUT";

/// Where the generator reads the dataset and writes its tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path to the raw line dataset.
    pub input: PathBuf,

    /// Path of the code mapping JSON.
    pub mapping_output: PathBuf,

    /// Path of the line details JSON.
    pub details_output: PathBuf,
}

impl GeneratorConfig {
    /// Create a config with the default layout under `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            input: root.join(DEFAULT_INPUT),
            mapping_output: root.join(DEFAULT_MAPPING_OUTPUT),
            details_output: root.join(DEFAULT_DETAILS_OUTPUT),
        }
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from a variable lookup.
    ///
    /// Relative overrides are resolved against the root; empty values are
    /// ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        let root = var(ENV_ROOT).unwrap_or_default();
        let mut config = Self::new(&root);

        if let Some(input) = var(ENV_INPUT) {
            config.input = root.join(input);
        }
        if let Some(mapping) = var(ENV_MAPPING_OUTPUT) {
            config.mapping_output = root.join(mapping);
        }
        if let Some(details) = var(ENV_DETAILS_OUTPUT) {
            config.details_output = root.join(details);
        }

        config
    }

    /// Set the dataset path.
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = path.into();
        self
    }

    /// Set the code mapping output path.
    pub fn with_mapping_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.mapping_output = path.into();
        self
    }

    /// Set the line details output path.
    pub fn with_details_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.details_output = path.into();
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        // Relative to the current directory
        Self::new("")
    }
}
