use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaintenanceError {
    #[error("cannot read model file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode model: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("invalid model: {0}")]
    InvalidModel(String),

    #[error("unknown feature `{0}`")]
    UnknownFeature(String),

    #[error("model produced a non-finite score for the given vehicle data")]
    NonFiniteScore,
}
