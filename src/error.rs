use std::path::PathBuf;

use thiserror::Error;

use crate::target::Target;

/// Errors raised by the file-operation and target-dispatch layers.
///
/// Absence is only an error for copy/move sources; `remove` and `backup`
/// tolerate missing paths (first-run and already-cleaned states are expected).
#[derive(Debug, Error)]
pub enum Error {
    /// A copy or move source does not exist.
    #[error("{path:?} not found")]
    NotFound { path: PathBuf },

    /// An exclusive copy found an existing entry at the destination.
    #[error("{path:?} already exists")]
    AlreadyExists { path: PathBuf },

    /// A target tag outside the closed set {neovim, tmux, bash}.
    #[error("unknown target {tag:?} (expected one of: neovim, tmux, bash)")]
    UnknownTarget { tag: String },

    /// Restore is declared for API completeness but has no specified
    /// semantics yet.
    #[error("restore is not implemented for target {target}")]
    RestoreUnimplemented { target: Target },

    /// Underlying filesystem failure, tagged with the path it concerns.
    #[error("{path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
