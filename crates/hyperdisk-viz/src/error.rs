use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("scene references unknown node {0}")]
    MissingNode(usize),
}
