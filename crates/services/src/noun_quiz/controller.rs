use quiz_core::model::{Article, NounRecord};
use quiz_core::quiz::{GuessOutcome, NounRound, QuizMode};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// What the confirm key did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Checked(GuessOutcome),
    Advanced,
    Unavailable,
}

/// Abstract input events for the noun quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NounIntent {
    SwitchMode(QuizMode),
    PickArticle(Article),
    SubmitTyped(String),
    /// Enter in the typed-answer field: check first, advance once solved.
    Confirm(String),
    ShowHint,
    Next,
}

/// Random-order noun quiz in article or typed mode.
pub struct ArticleNounController {
    nouns: Vec<NounRecord>,
    mode: QuizMode,
    round: Option<NounRound>,
    rng: StdRng,
}

impl ArticleNounController {
    pub(crate) fn new(nouns: Vec<NounRecord>, mode: QuizMode, rng: StdRng) -> Self {
        let mut controller = Self {
            nouns,
            mode,
            round: None,
            rng,
        };
        controller.next_round();
        controller
    }

    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    #[must_use]
    pub fn round(&self) -> Option<&NounRound> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    /// Switch modes and start a fresh round, even when the mode is unchanged.
    pub fn switch_mode(&mut self, mode: QuizMode) {
        self.mode = mode;
        self.next_round();
    }

    /// Pick a new noun uniformly at random. Returns `false` when none are loaded.
    pub fn next_round(&mut self) -> bool {
        let Some(record) = self.nouns.choose(&mut self.rng).cloned() else {
            self.round = None;
            return false;
        };
        tracing::debug!(noun = record.full_word(), mode = ?self.mode, "next noun");
        self.round = Some(NounRound::new(record, self.mode));
        true
    }

    pub fn pick_article(&mut self, article: Article) -> GuessOutcome {
        self.round
            .as_mut()
            .map_or(GuessOutcome::Ignored, |round| round.pick_article(article))
    }

    pub fn submit_typed(&mut self, input: &str) -> GuessOutcome {
        self.round
            .as_mut()
            .map_or(GuessOutcome::Ignored, |round| round.submit_typed(input))
    }

    pub fn show_hint(&mut self) -> bool {
        self.round.as_mut().is_some_and(NounRound::show_hint)
    }

    /// Two-stage confirm: the first press checks, the press after a correct answer advances.
    pub fn confirm(&mut self, input: &str) -> ConfirmOutcome {
        let Some(round) = self.round.as_mut() else {
            return ConfirmOutcome::Unavailable;
        };
        if round.is_submitted() {
            self.next_round();
            ConfirmOutcome::Advanced
        } else {
            ConfirmOutcome::Checked(round.submit_typed(input))
        }
    }

    /// Apply one input event. Returns `true` when state may have changed.
    pub fn dispatch(&mut self, intent: NounIntent) -> bool {
        match intent {
            NounIntent::SwitchMode(mode) => {
                self.switch_mode(mode);
                true
            }
            NounIntent::PickArticle(article) => {
                self.pick_article(article) != GuessOutcome::Ignored
            }
            NounIntent::SubmitTyped(input) => self.submit_typed(&input) != GuessOutcome::Ignored,
            NounIntent::Confirm(input) => self.confirm(&input) != ConfirmOutcome::Unavailable,
            NounIntent::ShowHint => self.show_hint(),
            NounIntent::Next => self.next_round(),
        }
    }
}
