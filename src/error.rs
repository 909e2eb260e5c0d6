//! Errors raised while loading maps, settings and records

use std::path::PathBuf;

use thiserror::Error;

/// Malformed or inconsistent map source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapFormatError {
    #[error("line {line}: invalid tile id {token:?}")]
    InvalidToken { line: usize, token: String },

    #[error("line {line}: expected {expected} tiles, found {found}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("map contains no tiles")]
    Empty,
}

/// Failure to read or parse one of the files the game loads
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid map {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: MapFormatError,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
