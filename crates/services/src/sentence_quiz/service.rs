use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::SentenceRecord;
use rand::SeedableRng;
use rand::rngs::StdRng;
use storage::repository::{ProgressRepository, SentenceRepository};

use super::controller::{LoadState, SentenceOrderController};
use super::progress::ProgressTracker;
use crate::error::SentenceQuizError;

/// Loads sentences and progress, then hands out a ready controller.
#[derive(Clone)]
pub struct SentenceQuizService {
    clock: Clock,
    sentences: Arc<dyn SentenceRepository>,
    progress: Arc<dyn ProgressRepository>,
    seed: Option<u64>,
}

impl SentenceQuizService {
    #[must_use]
    pub fn new(
        clock: Clock,
        sentences: Arc<dyn SentenceRepository>,
        progress: Arc<dyn ProgressRepository>,
    ) -> Self {
        Self {
            clock,
            sentences,
            progress,
            seed: None,
        }
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Fetch the sentence list.
    ///
    /// # Errors
    ///
    /// Returns `SentenceQuizError::NoSentences` for an empty list, or
    /// `SentenceQuizError::Storage` when the fetch fails.
    pub async fn load_sentences(&self) -> Result<Vec<SentenceRecord>, SentenceQuizError> {
        let sentences = self.sentences.list_sentences().await?;
        if sentences.is_empty() {
            return Err(SentenceQuizError::NoSentences);
        }
        Ok(sentences)
    }

    /// Build a controller positioned on the first sentence.
    ///
    /// Fetch failures are logged and leave the controller in a degraded state
    /// rather than failing the start.
    pub async fn start(&self) -> SentenceOrderController {
        let today = self.clock.today_key();
        let mut progress = ProgressTracker::new(today.clone());
        match self.progress.load_progress().await {
            Ok(history) => progress.adopt(&history, today),
            Err(err) => tracing::error!(error = %err, "failed to load progress"),
        }

        let (sentences, load) = match self.load_sentences().await {
            Ok(sentences) => {
                tracing::info!(count = sentences.len(), "sentences loaded");
                (sentences, LoadState::Ready)
            }
            Err(SentenceQuizError::NoSentences) => {
                tracing::warn!("sentence list is empty");
                (Vec::new(), LoadState::Empty)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load sentences");
                (Vec::new(), LoadState::Failed)
            }
        };

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        SentenceOrderController::new(
            self.clock,
            Arc::clone(&self.progress),
            sentences,
            load,
            progress,
            rng,
        )
    }
}
