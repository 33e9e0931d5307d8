// ============================================================
// Layer 3 - Error Taxonomy
// ============================================================
// One enum per failing layer:
//   CorpusError  - reading novels and metadata from disk
//   TrainerError - rejected configuration or an unusable corpus
//   VectorsError - reading/writing vector files and bad queries
//
// Every variant is fatal to a run. The application layer wraps
// these in anyhow with file-path context; nothing retries.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    /// Missing directory, missing file, permission denied, ...
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file's bytes are not valid UTF-8 text
    #[error("'{}' is not valid UTF-8 text: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("malformed metadata table '{}': {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrainerError {
    #[error("invalid training configuration: {0}")]
    InvalidConfig(String),

    /// No token reached min_count, so there is nothing to embed
    #[error("vocabulary is empty: no token occurs at least {min_count} times")]
    EmptyVocabulary { min_count: usize },
}

#[derive(Debug, Error)]
pub enum VectorsError {
    #[error("vector file I/O on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `line` is 1-based, the header being line 1
    #[error("malformed vector file at line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("token '{0}' not present in vocabulary")]
    UnknownToken(String),

    #[error("query needs at least one token")]
    EmptyQuery,
}
