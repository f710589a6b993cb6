use async_trait::async_trait;
use quiz_core::model::{
    ExamplePair, LookupResult, NounRecord, PonsResponse, ProgressHistory, ProgressRecord,
    SentenceRecord, VerbChallenge,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::http::{ApiConfig, HttpInitError, HttpRepository};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("backend responded with status {0}")]
    HttpStatus(u16),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("backend reported an error: {0}")]
    Backend(String),
}

/// Source of noun records for the article quiz.
#[async_trait]
pub trait NounRepository: Send + Sync {
    /// Fetch every valid noun. Malformed records are skipped.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be fetched or decoded.
    async fn list_nouns(&self) -> Result<Vec<NounRecord>, StorageError>;
}

/// Source of sentence pairs for the reorder quiz.
#[async_trait]
pub trait SentenceRepository: Send + Sync {
    /// Fetch every valid sentence pair, in backend order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be fetched or decoded.
    async fn list_sentences(&self) -> Result<Vec<SentenceRecord>, StorageError>;
}

/// Day-keyed quiz progress store.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the whole progress map.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the map cannot be fetched or decoded.
    async fn load_progress(&self) -> Result<ProgressHistory, StorageError>;

    /// Upsert one day's counts.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store rejects the write.
    async fn save_progress(&self, record: &ProgressRecord) -> Result<(), StorageError>;
}

/// Source of fill-in-the-blank verb questions.
#[async_trait]
pub trait VerbRepository: Send + Sync {
    /// Fetch the next question. The backend picks the verb.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` when no verbs are available, or other storage errors.
    async fn next_verb(&self) -> Result<VerbChallenge, StorageError>;
}

/// Word lookup, dictionary translation and generated examples.
#[async_trait]
pub trait LookupRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the word is unknown, or other storage errors.
    async fn lookup(&self, word: &str) -> Result<LookupResult, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the word is unknown, or other storage errors.
    async fn dictionary(&self, word: &str) -> Result<PonsResponse, StorageError>;

    /// Freshly generated example sentences for `word`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Backend` when generation failed on the server, or other storage errors.
    async fn examples(&self, word: &str) -> Result<Vec<ExamplePair>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    nouns: Arc<Mutex<Vec<NounRecord>>>,
    sentences: Arc<Mutex<Vec<SentenceRecord>>>,
    progress: Arc<Mutex<ProgressHistory>>,
    lookups: Arc<Mutex<HashMap<String, LookupResult>>>,
    dictionary: Arc<Mutex<HashMap<String, PonsResponse>>>,
    examples: Arc<Mutex<HashMap<String, Vec<ExamplePair>>>>,
    verbs: Arc<Mutex<VerbQueue>>,
}

/// Verb questions served in order, wrapping at the end.
#[derive(Default)]
struct VerbQueue {
    challenges: Vec<VerbChallenge>,
    next: usize,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_nouns(self, nouns: Vec<NounRecord>) -> Self {
        if let Ok(mut guard) = self.nouns.lock() {
            *guard = nouns;
        }
        self
    }

    #[must_use]
    pub fn with_sentences(self, sentences: Vec<SentenceRecord>) -> Self {
        if let Ok(mut guard) = self.sentences.lock() {
            *guard = sentences;
        }
        self
    }

    #[must_use]
    pub fn with_progress(self, progress: ProgressHistory) -> Self {
        if let Ok(mut guard) = self.progress.lock() {
            *guard = progress;
        }
        self
    }

    #[must_use]
    pub fn with_verbs(self, challenges: Vec<VerbChallenge>) -> Self {
        if let Ok(mut guard) = self.verbs.lock() {
            *guard = VerbQueue {
                challenges,
                next: 0,
            };
        }
        self
    }

    /// Register a lookup result under its `word`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn insert_lookup(&self, result: LookupResult) -> Result<(), StorageError> {
        let mut guard = self
            .lookups
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(result.word.clone(), result);
        Ok(())
    }

    /// Register a dictionary response under its `word`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn insert_dictionary(&self, response: PonsResponse) -> Result<(), StorageError> {
        let mut guard = self
            .dictionary
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(response.word.clone(), response);
        Ok(())
    }

    /// Register generated examples for `word`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn insert_examples(
        &self,
        word: impl Into<String>,
        examples: Vec<ExamplePair>,
    ) -> Result<(), StorageError> {
        let mut guard = self
            .examples
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(word.into(), examples);
        Ok(())
    }
}

#[async_trait]
impl VerbRepository for InMemoryRepository {
    async fn next_verb(&self) -> Result<VerbChallenge, StorageError> {
        let mut guard = self
            .verbs
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let queue = &mut *guard;
        if queue.challenges.is_empty() {
            return Err(StorageError::NotFound);
        }
        let challenge = queue.challenges[queue.next % queue.challenges.len()].clone();
        queue.next = (queue.next + 1) % queue.challenges.len();
        Ok(challenge)
    }
}

#[async_trait]
impl NounRepository for InMemoryRepository {
    async fn list_nouns(&self) -> Result<Vec<NounRecord>, StorageError> {
        let guard = self
            .nouns
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl SentenceRepository for InMemoryRepository {
    async fn list_sentences(&self) -> Result<Vec<SentenceRecord>, StorageError> {
        let guard = self
            .sentences
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load_progress(&self) -> Result<ProgressHistory, StorageError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let mut guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.upsert(record);
        Ok(())
    }
}

#[async_trait]
impl LookupRepository for InMemoryRepository {
    async fn lookup(&self, word: &str) -> Result<LookupResult, StorageError> {
        let guard = self
            .lookups
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.get(word).cloned().ok_or(StorageError::NotFound)
    }

    async fn dictionary(&self, word: &str) -> Result<PonsResponse, StorageError> {
        let guard = self
            .dictionary
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.get(word).cloned().ok_or(StorageError::NotFound)
    }

    async fn examples(&self, word: &str) -> Result<Vec<ExamplePair>, StorageError> {
        let guard = self
            .examples
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.get(word).cloned().ok_or(StorageError::NotFound)
    }
}

/// Aggregates the backend repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub nouns: Arc<dyn NounRepository>,
    pub sentences: Arc<dyn SentenceRepository>,
    pub progress: Arc<dyn ProgressRepository>,
    pub lookup: Arc<dyn LookupRepository>,
    pub verbs: Arc<dyn VerbRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_in_memory(InMemoryRepository::new())
    }

    /// Build storage that talks to the backend at `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns `HttpInitError` if the base URL is unusable.
    pub fn http(config: &ApiConfig) -> Result<Self, HttpInitError> {
        let repo = HttpRepository::new(config)?;
        tracing::info!(base_url = %repo.base_url(), "using http storage");
        let nouns: Arc<dyn NounRepository> = Arc::new(repo.clone());
        let sentences: Arc<dyn SentenceRepository> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo.clone());
        let lookup: Arc<dyn LookupRepository> = Arc::new(repo.clone());
        let verbs: Arc<dyn VerbRepository> = Arc::new(repo);
        Ok(Self {
            nouns,
            sentences,
            progress,
            lookup,
            verbs,
        })
    }

    #[must_use]
    pub fn from_in_memory(repo: InMemoryRepository) -> Self {
        let nouns: Arc<dyn NounRepository> = Arc::new(repo.clone());
        let sentences: Arc<dyn SentenceRepository> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo.clone());
        let lookup: Arc<dyn LookupRepository> = Arc::new(repo.clone());
        let verbs: Arc<dyn VerbRepository> = Arc::new(repo);
        Self {
            nouns,
            sentences,
            progress,
            lookup,
            verbs,
        }
    }
}
