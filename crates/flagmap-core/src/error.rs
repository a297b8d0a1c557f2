//! Errors raised while mapping enum declarations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing a name table.
#[derive(Debug, Error)]
pub enum FlagmapError {
    #[error("cannot open input {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read input {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to format table: {0}")]
    Format(#[from] std::fmt::Error),
}
