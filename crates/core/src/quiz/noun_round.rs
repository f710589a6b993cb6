use serde::{Deserialize, Serialize};

use crate::model::{Article, NounRecord};

/// Which kind of answer the noun quiz asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizMode {
    /// Pick der/die/das for the shown singular.
    #[default]
    Article,
    /// Type the full word (article + noun) for the shown meaning.
    Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleMark {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
    /// Input arrived after a correct answer or in the wrong mode.
    Ignored,
}

/// What a correct answer reveals about the noun.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounReveal {
    pub full_word: String,
    pub plural: Option<String>,
    pub example: Option<String>,
}

/// Transient state of one noun question.
#[derive(Debug, Clone)]
pub struct NounRound {
    record: NounRecord,
    mode: QuizMode,
    marks: [Option<ArticleMark>; 3],
    submitted: bool,
    hint_available: bool,
    hint_shown: bool,
    input_error: bool,
}

impl NounRound {
    #[must_use]
    pub fn new(record: NounRecord, mode: QuizMode) -> Self {
        Self {
            record,
            mode,
            marks: [None; 3],
            submitted: false,
            hint_available: false,
            hint_shown: false,
            input_error: false,
        }
    }

    #[must_use]
    pub fn record(&self) -> &NounRecord {
        &self.record
    }

    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    /// Text shown as the question: the singular in article mode, nothing in type mode.
    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        match self.mode {
            QuizMode::Article => Some(self.record.singular()),
            QuizMode::Type => None,
        }
    }

    #[must_use]
    pub fn meaning(&self) -> &str {
        self.record.meaning()
    }

    /// True once the correct answer was given; further answers are ignored.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn mark(&self, article: Article) -> Option<ArticleMark> {
        self.marks[article.index()]
    }

    #[must_use]
    pub fn buttons_disabled(&self) -> bool {
        self.mode == QuizMode::Article && self.submitted
    }

    #[must_use]
    pub fn input_error(&self) -> bool {
        self.input_error
    }

    #[must_use]
    pub fn input_visible(&self) -> bool {
        !(self.mode == QuizMode::Type && self.submitted)
    }

    /// The next-round control shows its "correct" affordance.
    #[must_use]
    pub fn next_armed(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn celebrate(&self) -> bool {
        self.mode == QuizMode::Type && self.submitted
    }

    /// The hint control is visible (after a wrong answer, until solved).
    #[must_use]
    pub fn hint_available(&self) -> bool {
        self.hint_available && !self.submitted
    }

    /// Label of the hint control.
    #[must_use]
    pub fn hint_label(&self) -> String {
        if !self.hint_shown {
            return "Hint".to_string();
        }
        match self.mode {
            QuizMode::Article => format!("Hint: {}", self.record.article()),
            QuizMode::Type => format!("Hint: {}", self.record.singular()),
        }
    }

    /// Reveal the hint. Returns `false` when the hint control is hidden.
    pub fn show_hint(&mut self) -> bool {
        if !self.hint_available() {
            return false;
        }
        self.hint_shown = true;
        true
    }

    /// Article button pressed.
    pub fn pick_article(&mut self, article: Article) -> GuessOutcome {
        if self.mode != QuizMode::Article || self.submitted {
            return GuessOutcome::Ignored;
        }

        if article == self.record.article() {
            self.marks[article.index()] = Some(ArticleMark::Correct);
            self.submitted = true;
            GuessOutcome::Correct
        } else {
            self.marks[article.index()] = Some(ArticleMark::Incorrect);
            self.hint_available = true;
            GuessOutcome::Incorrect
        }
    }

    /// Typed full word submitted. Comparison is trimmed and case-insensitive.
    pub fn submit_typed(&mut self, input: &str) -> GuessOutcome {
        if self.mode != QuizMode::Type || self.submitted {
            return GuessOutcome::Ignored;
        }

        if input.trim().to_lowercase() == self.record.full_word().to_lowercase() {
            self.input_error = false;
            self.submitted = true;
            GuessOutcome::Correct
        } else {
            self.input_error = true;
            self.hint_available = true;
            GuessOutcome::Incorrect
        }
    }

    /// Result panel content, once the noun was answered correctly.
    #[must_use]
    pub fn reveal(&self) -> Option<NounReveal> {
        if !self.submitted {
            return None;
        }
        let reveal = match self.mode {
            QuizMode::Article => NounReveal {
                full_word: self.record.full_word().to_string(),
                plural: Some(self.record.plural().to_string()),
                example: Some(self.record.example().to_string()),
            },
            QuizMode::Type => NounReveal {
                full_word: self.record.full_word().to_string(),
                plural: self.record.known_plural().map(ToString::to_string),
                example: self.record.known_example().map(ToString::to_string),
            },
        };
        Some(reveal)
    }
}
