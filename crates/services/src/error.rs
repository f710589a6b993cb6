//! Shared error types for the services crate.

use thiserror::Error;

use storage::http::HttpInitError;
use storage::repository::StorageError;

/// Errors emitted while loading or syncing the sentence quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SentenceQuizError {
    #[error("no sentences available")]
    NoSentences,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while loading the noun quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NounQuizError {
    #[error("no nouns available")]
    NoNouns,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while fetching verb questions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VerbQuizError {
    #[error("no verbs available")]
    NoVerbs,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `LookupService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LookupError {
    #[error("enter a word to look up")]
    EmptyWord,
    #[error("no entry found for {0:?}")]
    NotFound(String),
    #[error("dictionary error: {0}")]
    Dictionary(String),
    #[error("example generation failed: {0}")]
    Generation(String),
    #[error("dictionary payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Http(#[from] HttpInitError),
}
