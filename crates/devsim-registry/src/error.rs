#![deny(unsafe_code)]

use std::path::PathBuf;

use devsim_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to read reference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON reference file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse TOML reference file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported reference file format {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid reference record: {0}")]
    InvalidRecord(#[from] ModelError),

    #[error("brand {brand}, model {model}: {source}")]
    InvalidModel {
        brand: String,
        model: String,
        #[source]
        source: ModelError,
    },

    #[error("duplicate region in reference tables: {0}")]
    DuplicateRegion(String),

    #[error("duplicate brand in reference tables: {0}")]
    DuplicateBrand(String),
}

impl RegistryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
