use std::sync::Arc;

use storage::http::ApiConfig;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::lookup_service::LookupService;
use crate::noun_quiz::NounQuizService;
use crate::sentence_quiz::SentenceQuizService;
use crate::verb_quiz::VerbQuizService;

/// Assembles the app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    sentence_quiz: Arc<SentenceQuizService>,
    noun_quiz: Arc<NounQuizService>,
    verb_quiz: Arc<VerbQuizService>,
    lookup: Arc<LookupService>,
}

impl AppServices {
    /// Build services that talk to the backend at `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Http` if the base URL is unusable.
    pub fn new_http(
        config: &ApiConfig,
        clock: Clock,
        seed: Option<u64>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::http(config)?;
        Ok(Self::from_storage(&storage, clock, seed))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, seed: Option<u64>) -> Self {
        let sentence_quiz = Arc::new(
            SentenceQuizService::new(
                clock,
                Arc::clone(&storage.sentences),
                Arc::clone(&storage.progress),
            )
            .with_seed(seed),
        );
        let noun_quiz =
            Arc::new(NounQuizService::new(Arc::clone(&storage.nouns)).with_seed(seed));
        let verb_quiz = Arc::new(VerbQuizService::new(Arc::clone(&storage.verbs)));
        let lookup = Arc::new(LookupService::new(Arc::clone(&storage.lookup)));

        Self {
            sentence_quiz,
            noun_quiz,
            verb_quiz,
            lookup,
        }
    }

    #[must_use]
    pub fn sentence_quiz(&self) -> Arc<SentenceQuizService> {
        Arc::clone(&self.sentence_quiz)
    }

    #[must_use]
    pub fn noun_quiz(&self) -> Arc<NounQuizService> {
        Arc::clone(&self.noun_quiz)
    }

    #[must_use]
    pub fn verb_quiz(&self) -> Arc<VerbQuizService> {
        Arc::clone(&self.verb_quiz)
    }

    #[must_use]
    pub fn lookup(&self) -> Arc<LookupService> {
        Arc::clone(&self.lookup)
    }
}
