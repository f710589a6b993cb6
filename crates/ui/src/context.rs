use std::sync::Arc;

use services::{LookupService, NounQuizService, SentenceQuizService, VerbQuizService};

/// What the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn sentence_quiz(&self) -> Arc<SentenceQuizService>;
    fn noun_quiz(&self) -> Arc<NounQuizService>;
    fn verb_quiz(&self) -> Arc<VerbQuizService>;
    fn lookup(&self) -> Arc<LookupService>;
}

#[derive(Clone)]
pub struct AppContext {
    sentence_quiz: Arc<SentenceQuizService>,
    noun_quiz: Arc<NounQuizService>,
    verb_quiz: Arc<VerbQuizService>,
    lookup: Arc<LookupService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            sentence_quiz: app.sentence_quiz(),
            noun_quiz: app.noun_quiz(),
            verb_quiz: app.verb_quiz(),
            lookup: app.lookup(),
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

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
