use crate::model::{BLANK, VerbChallenge};

/// Result of checking the typed verb form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbCheck {
    Correct,
    Incorrect,
    /// Nothing typed yet.
    Empty,
    /// The challenge came without a sentence, so there is no blank to fill.
    NoSentence,
    AlreadySolved,
}

/// State of one fill-in-the-blank verb question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbRound {
    challenge: VerbChallenge,
    answer: String,
    result: Option<bool>,
    revealed: bool,
}

impl VerbRound {
    #[must_use]
    pub fn new(challenge: VerbChallenge) -> Self {
        Self {
            challenge,
            answer: String::new(),
            result: None,
            revealed: false,
        }
    }

    #[must_use]
    pub fn challenge(&self) -> &VerbChallenge {
        &self.challenge
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Last check result; cleared whenever the answer is edited.
    #[must_use]
    pub fn result(&self) -> Option<bool> {
        self.result
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.result == Some(true)
    }

    /// Replace the typed answer. Ignored once solved.
    pub fn fill(&mut self, answer: impl Into<String>) -> bool {
        if self.is_solved() {
            return false;
        }
        self.answer = answer.into();
        self.result = None;
        true
    }

    /// Case-insensitive comparison of the trimmed answer with the blanked form.
    pub fn check(&mut self) -> VerbCheck {
        let Some(sentence) = &self.challenge.sentence else {
            return VerbCheck::NoSentence;
        };
        if self.is_solved() {
            return VerbCheck::AlreadySolved;
        }
        let typed = self.answer.trim();
        if typed.is_empty() {
            return VerbCheck::Empty;
        }

        let correct = typed.to_lowercase() == sentence.correct_form.trim().to_lowercase();
        self.result = Some(correct);
        if correct {
            VerbCheck::Correct
        } else {
            VerbCheck::Incorrect
        }
    }

    /// Show the expected form without solving the round.
    pub fn reveal(&mut self) -> Option<&str> {
        let sentence = self.challenge.sentence.as_ref()?;
        self.revealed = true;
        Some(sentence.correct_form.as_str())
    }

    /// The expected form, once revealed or solved.
    #[must_use]
    pub fn revealed_form(&self) -> Option<&str> {
        let sentence = self.challenge.sentence.as_ref()?;
        (self.revealed || self.is_solved()).then_some(sentence.correct_form.as_str())
    }

    /// The blanked sentence, with the blank filled in once solved.
    #[must_use]
    pub fn display_sentence(&self) -> Option<String> {
        let sentence = self.challenge.sentence.as_ref()?;
        if self.is_solved() {
            Some(
                sentence
                    .blanked_sentence
                    .replace(BLANK, &sentence.correct_form),
            )
        } else {
            Some(sentence.blanked_sentence.clone())
        }
    }
}
