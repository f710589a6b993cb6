use std::sync::Arc;

use quiz_core::model::{ExamplePair, LookupResult, Translation};
use storage::repository::{LookupRepository, StorageError};

use crate::error::LookupError;

/// Word lookup form backing.
#[derive(Clone)]
pub struct LookupService {
    repo: Arc<dyn LookupRepository>,
}

impl LookupService {
    #[must_use]
    pub fn new(repo: Arc<dyn LookupRepository>) -> Self {
        Self { repo }
    }

    /// Look up a word on the backend.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::EmptyWord` for blank input, `LookupError::NotFound`
    /// for an unknown word, or `LookupError::Storage` when the request fails.
    pub async fn lookup(&self, word: &str) -> Result<LookupResult, LookupError> {
        let word = normalized(word)?;
        self.repo
            .lookup(word)
            .await
            .map_err(|err| storage_error(word, err))
    }

    /// Dictionary translations for a word.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Dictionary` when the dictionary reports an error,
    /// `LookupError::Decode` for an unreadable payload, and the same input and
    /// storage errors as [`LookupService::lookup`].
    pub async fn translations(&self, word: &str) -> Result<Vec<Translation>, LookupError> {
        let word = normalized(word)?;
        let response = self
            .repo
            .dictionary(word)
            .await
            .map_err(|err| storage_error(word, err))?;
        if response.is_cached {
            tracing::debug!(word, "dictionary answer served from cache");
        }

        let set = response.translations()?;
        match set.error {
            Some(message) if set.translations.is_empty() => Err(LookupError::Dictionary(message)),
            _ => Ok(set.translations),
        }
    }

    /// Ask the backend to generate example sentences for a word.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Generation` when the generator reports a failure,
    /// and the same input and storage errors as [`LookupService::lookup`].
    pub async fn examples(&self, word: &str) -> Result<Vec<ExamplePair>, LookupError> {
        let word = normalized(word)?;
        match self.repo.examples(word).await {
            Ok(examples) => Ok(examples),
            Err(StorageError::Backend(message)) => {
                tracing::warn!(word, %message, "example generation failed");
                Err(LookupError::Generation(message))
            }
            Err(err) => Err(storage_error(word, err)),
        }
    }
}

fn normalized(word: &str) -> Result<&str, LookupError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(LookupError::EmptyWord);
    }
    Ok(word)
}

fn storage_error(word: &str, err: StorageError) -> LookupError {
    match err {
        StorageError::NotFound => LookupError::NotFound(word.to_string()),
        other => {
            tracing::warn!(word, error = %other, "lookup failed");
            LookupError::Storage(other)
        }
    }
}
