use quiz_core::model::VerbChallenge;
use quiz_core::quiz::{VerbCheck, VerbRound};

use crate::error::VerbQuizError;

/// Where the current question came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbLoad {
    Loading,
    Ready,
    Empty,
    Failed,
}

/// What the confirm key did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbConfirm {
    Checked(VerbCheck),
    /// The round is finished; the caller should fetch the next question.
    NextRequested,
    Unavailable,
}

/// Abstract input events for the verb quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerbIntent {
    Fill(String),
    Check,
    Reveal,
    /// Enter in the answer field: check first, request the next verb once solved.
    Confirm(String),
    Next,
}

/// Result of one intent. `next_requested` asks the caller to fetch a new question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerbEffect {
    pub changed: bool,
    pub next_requested: bool,
}

/// Fill-in-the-blank verb quiz. Fetching lives in `VerbQuizService`, so every
/// method here is synchronous.
#[derive(Debug, Clone)]
pub struct VerbQuizController {
    round: Option<VerbRound>,
    load: VerbLoad,
    solved: u32,
}

impl Default for VerbQuizController {
    fn default() -> Self {
        Self::new()
    }
}

impl VerbQuizController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            round: None,
            load: VerbLoad::Loading,
            solved: 0,
        }
    }

    #[must_use]
    pub fn round(&self) -> Option<&VerbRound> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn load_state(&self) -> VerbLoad {
        self.load
    }

    /// Questions answered correctly since start.
    #[must_use]
    pub fn solved(&self) -> u32 {
        self.solved
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&'static str> {
        match self.load {
            VerbLoad::Loading => Some("Loading..."),
            VerbLoad::Ready => None,
            VerbLoad::Empty => Some("No verbs available"),
            VerbLoad::Failed => Some("Error loading verbs"),
        }
    }

    /// Install the outcome of a fetch. A failed fetch keeps the current round.
    pub fn load(&mut self, fetched: Result<VerbChallenge, VerbQuizError>) {
        match fetched {
            Ok(challenge) => {
                self.round = Some(VerbRound::new(challenge));
                self.load = VerbLoad::Ready;
            }
            Err(VerbQuizError::NoVerbs) => {
                self.round = None;
                self.load = VerbLoad::Empty;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load verb question");
                if self.round.is_none() {
                    self.load = VerbLoad::Failed;
                }
            }
        }
    }

    pub fn fill(&mut self, answer: impl Into<String>) -> bool {
        self.round.as_mut().is_some_and(|round| round.fill(answer))
    }

    pub fn check(&mut self) -> Option<VerbCheck> {
        let outcome = self.round.as_mut()?.check();
        if outcome == VerbCheck::Correct {
            self.solved += 1;
        }
        Some(outcome)
    }

    pub fn reveal(&mut self) -> bool {
        self.round.as_mut().and_then(VerbRound::reveal).is_some()
    }

    /// Two-stage confirm: check the typed form, then ask for the next verb once solved.
    /// A question without a sentence has nothing to check and moves straight on.
    pub fn confirm(&mut self, answer: &str) -> VerbConfirm {
        let Some(round) = self.round.as_mut() else {
            return VerbConfirm::Unavailable;
        };
        if round.is_solved() || round.challenge().sentence.is_none() {
            return VerbConfirm::NextRequested;
        }
        round.fill(answer);
        self.check().map_or(VerbConfirm::Unavailable, VerbConfirm::Checked)
    }

    /// Apply one input event.
    pub fn apply(&mut self, intent: VerbIntent) -> VerbEffect {
        match intent {
            VerbIntent::Fill(answer) => VerbEffect {
                changed: self.fill(answer),
                next_requested: false,
            },
            VerbIntent::Check => VerbEffect {
                changed: self.check().is_some(),
                next_requested: false,
            },
            VerbIntent::Reveal => VerbEffect {
                changed: self.reveal(),
                next_requested: false,
            },
            VerbIntent::Confirm(answer) => match self.confirm(&answer) {
                VerbConfirm::Checked(_) => VerbEffect {
                    changed: true,
                    next_requested: false,
                },
                VerbConfirm::NextRequested => VerbEffect {
                    changed: false,
                    next_requested: true,
                },
                VerbConfirm::Unavailable => VerbEffect::default(),
            },
            VerbIntent::Next => VerbEffect {
                changed: false,
                next_requested: self.load != VerbLoad::Loading,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use quiz_core::model::{VerbForms, VerbSentence};
    use storage::repository::StorageError;

    use super::*;

    fn challenge(infinitive: &str, form: &str) -> VerbChallenge {
        VerbChallenge {
            verb: VerbForms {
                meaning: "to do".into(),
                infinitive: infinitive.into(),
                ..VerbForms::default()
            },
            sentence: Some(VerbSentence {
                english: "We do it.".into(),
                german: format!("Wir {form} es."),
                blanked_sentence: "wir ____ es.".into(),
                correct_form: form.into(),
                sentence_index: Some(0),
            }),
            has_perfect_form: false,
        }
    }

    fn loaded() -> VerbQuizController {
        let mut controller = VerbQuizController::new();
        controller.load(Ok(challenge("machen", "machen")));
        controller
    }

    #[test]
    fn starts_loading_without_a_round() {
        let controller = VerbQuizController::new();
        assert_eq!(controller.load_state(), VerbLoad::Loading);
        assert_eq!(controller.status_message(), Some("Loading..."));
        assert!(controller.round().is_none());
    }

    #[test]
    fn confirm_checks_then_requests_next() {
        let mut controller = loaded();

        assert_eq!(controller.confirm("macht"), VerbConfirm::Checked(VerbCheck::Incorrect));
        assert_eq!(controller.confirm(" Machen "), VerbConfirm::Checked(VerbCheck::Correct));
        assert_eq!(controller.solved(), 1);
        assert_eq!(
            controller.round().and_then(VerbRound::display_sentence).as_deref(),
            Some("wir machen es.")
        );
        assert_eq!(controller.confirm("ignored"), VerbConfirm::NextRequested);
    }

    #[test]
    fn reveal_shows_form_without_counting() {
        let mut controller = loaded();
        assert!(controller.reveal());
        assert_eq!(controller.round().and_then(VerbRound::revealed_form), Some("machen"));
        assert_eq!(controller.solved(), 0);
        assert!(!controller.round().is_some_and(VerbRound::is_solved));
    }

    #[test]
    fn sentence_free_question_moves_on() {
        let mut controller = VerbQuizController::new();
        let mut bare = challenge("sein", "sind");
        bare.sentence = None;
        controller.load(Ok(bare));

        assert!(controller.apply(VerbIntent::Check).changed);
        assert!(!controller.reveal());
        let effect = controller.apply(VerbIntent::Confirm(String::new()));
        assert!(effect.next_requested);
    }

    #[test]
    fn failed_fetch_keeps_current_round() {
        let mut controller = loaded();
        controller.load(Err(VerbQuizError::Storage(StorageError::Connection("down".into()))));
        assert_eq!(controller.load_state(), VerbLoad::Ready);
        assert!(controller.round().is_some());

        let mut fresh = VerbQuizController::new();
        fresh.load(Err(VerbQuizError::Storage(StorageError::Connection("down".into()))));
        assert_eq!(fresh.status_message(), Some("Error loading verbs"));

        fresh.load(Err(VerbQuizError::NoVerbs));
        assert_eq!(fresh.status_message(), Some("No verbs available"));
    }

    #[test]
    fn next_replaces_round_with_fresh_answer() {
        let mut controller = loaded();
        controller.apply(VerbIntent::Fill("mach".into()));
        assert!(controller.apply(VerbIntent::Next).next_requested);

        controller.load(Ok(challenge("gehen", "gehen")));
        let round = controller.round().unwrap();
        assert_eq!(round.challenge().verb.infinitive, "gehen");
        assert_eq!(round.answer(), "");
        assert_eq!(round.result(), None);
    }
}
