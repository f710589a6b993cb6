use std::sync::Arc;

use quiz_core::model::VerbChallenge;
use storage::repository::{StorageError, VerbRepository};

use super::controller::VerbQuizController;
use crate::error::VerbQuizError;

/// Fetches verb questions one at a time.
#[derive(Clone)]
pub struct VerbQuizService {
    verbs: Arc<dyn VerbRepository>,
}

impl VerbQuizService {
    #[must_use]
    pub fn new(verbs: Arc<dyn VerbRepository>) -> Self {
        Self { verbs }
    }

    /// # Errors
    ///
    /// Returns `VerbQuizError::NoVerbs` when the backend has nothing to ask,
    /// or `VerbQuizError::Storage` when the fetch fails.
    pub async fn next_challenge(&self) -> Result<VerbChallenge, VerbQuizError> {
        match self.verbs.next_verb().await {
            Ok(challenge) => {
                tracing::debug!(verb = %challenge.verb.infinitive, "verb question fetched");
                Ok(challenge)
            }
            Err(StorageError::NotFound) => Err(VerbQuizError::NoVerbs),
            Err(err) => Err(err.into()),
        }
    }

    /// Build a controller holding the first question.
    pub async fn start(&self) -> VerbQuizController {
        let mut controller = VerbQuizController::new();
        controller.load(self.next_challenge().await);
        controller
    }

    /// Fetch the next question into `controller`.
    pub async fn advance(&self, controller: &mut VerbQuizController) {
        controller.load(self.next_challenge().await);
    }
}

#[cfg(test)]
mod tests {
    use quiz_core::model::VerbForms;
    use storage::repository::InMemoryRepository;

    use super::*;
    use crate::verb_quiz::VerbLoad;

    fn verb(infinitive: &str) -> VerbChallenge {
        VerbChallenge {
            verb: VerbForms {
                meaning: "meaning".into(),
                infinitive: infinitive.into(),
                ..VerbForms::default()
            },
            sentence: None,
            has_perfect_form: false,
        }
    }

    #[tokio::test]
    async fn empty_backend_reports_no_verbs() {
        let service = VerbQuizService::new(Arc::new(InMemoryRepository::new()));
        assert!(matches!(service.next_challenge().await, Err(VerbQuizError::NoVerbs)));

        let controller = service.start().await;
        assert_eq!(controller.load_state(), VerbLoad::Empty);
    }

    #[tokio::test]
    async fn advance_loads_the_following_verb() {
        let repo = InMemoryRepository::new().with_verbs(vec![verb("gehen"), verb("kommen")]);
        let service = VerbQuizService::new(Arc::new(repo));

        let mut controller = service.start().await;
        let first = controller.round().map(|r| r.challenge().verb.infinitive.clone());
        assert_eq!(first.as_deref(), Some("gehen"));

        service.advance(&mut controller).await;
        let second = controller.round().map(|r| r.challenge().verb.infinitive.clone());
        assert_eq!(second.as_deref(), Some("kommen"));
    }
}
