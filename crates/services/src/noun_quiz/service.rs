use std::sync::Arc;

use quiz_core::model::NounRecord;
use quiz_core::quiz::QuizMode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use storage::repository::NounRepository;

use super::controller::ArticleNounController;
use crate::error::NounQuizError;

/// Loads the noun list and hands out a controller.
#[derive(Clone)]
pub struct NounQuizService {
    nouns: Arc<dyn NounRepository>,
    seed: Option<u64>,
}

impl NounQuizService {
    #[must_use]
    pub fn new(nouns: Arc<dyn NounRepository>) -> Self {
        Self { nouns, seed: None }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// # Errors
    ///
    /// Returns `NounQuizError::NoNouns` for an empty list, or
    /// `NounQuizError::Storage` when the fetch fails.
    pub async fn load_nouns(&self) -> Result<Vec<NounRecord>, NounQuizError> {
        let nouns = self.nouns.list_nouns().await?;
        if nouns.is_empty() {
            return Err(NounQuizError::NoNouns);
        }
        Ok(nouns)
    }

    /// Build a controller in `mode`. A failed fetch leaves it without a round.
    pub async fn start(&self, mode: QuizMode) -> ArticleNounController {
        let nouns = match self.load_nouns().await {
            Ok(nouns) => {
                tracing::info!(count = nouns.len(), "nouns loaded");
                nouns
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load nouns");
                Vec::new()
            }
        };
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        ArticleNounController::new(nouns, mode, rng)
    }
}
