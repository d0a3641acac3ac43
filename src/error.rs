use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a snippet catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("snippet catalog is empty")]
    Empty,

    #[error("snippet #{index} has no text")]
    EmptySnippet { index: usize },

    #[error("no built-in snippet set named `{name}`")]
    UnknownBuiltin { name: String },

    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
