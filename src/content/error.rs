//! Content errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving and loading articles
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid front-matter in {path:?}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ContentError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound(_))
    }
}
