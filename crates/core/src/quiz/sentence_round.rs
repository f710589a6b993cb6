use rand::Rng;

use crate::model::SentenceRecord;
use crate::text::{answer_matches, shuffled, tokenize};

/// Hints that auto-select a token before hints start revealing the sentence.
pub const AUTO_SELECT_HINTS: u32 = 2;

/// Where the learner's answer currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Empty,
    Selecting,
    CheckedCorrect,
    CheckedIncorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Correct,
    Incorrect,
    /// The current selection was already checked; nothing was counted.
    AlreadyChecked,
    /// Nothing is selected yet; nothing was counted.
    NothingSelected,
}

impl CheckOutcome {
    /// Whether this check counted as an attempt.
    #[must_use]
    pub fn counted(self) -> bool {
        matches!(self, CheckOutcome::Correct | CheckOutcome::Incorrect)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    /// The next answer-key token was moved into the builder.
    Selected(String),
    /// An auto-select hint was spent but the next token was not in the bank.
    Unavailable,
    /// The full reference sentence is now shown.
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Bank(usize),
    Builder(usize),
}

/// A word bank entry. `slot` is its position in the shuffled display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankToken {
    pub slot: usize,
    pub text: String,
}

/// State of one reorder-the-words question.
#[derive(Debug, Clone)]
pub struct SentenceRound {
    record: SentenceRecord,
    answer_key: Vec<String>,
    display: Vec<String>,
    selected: Vec<String>,
    checked: Option<bool>,
    hints_used: u32,
    sentence_revealed: bool,
    error_flash: bool,
    focus: Option<FocusTarget>,
}

impl SentenceRound {
    /// Tokenize the record and shuffle a fresh display order.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(record: SentenceRecord, rng: &mut R) -> Self {
        let answer_key = tokenize(record.german());
        let display = shuffled(&answer_key, rng);
        Self {
            record,
            answer_key,
            display,
            selected: Vec::new(),
            checked: None,
            hints_used: 0,
            sentence_revealed: false,
            error_flash: false,
            focus: None,
        }
    }

    #[must_use]
    pub fn record(&self) -> &SentenceRecord {
        &self.record
    }

    #[must_use]
    pub fn answer_key(&self) -> &[String] {
        &self.answer_key
    }

    #[must_use]
    pub fn display_order(&self) -> &[String] {
        &self.display
    }

    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    #[must_use]
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    #[must_use]
    pub fn state(&self) -> RoundState {
        match self.checked {
            Some(true) => RoundState::CheckedCorrect,
            Some(false) => RoundState::CheckedIncorrect,
            None if self.selected.is_empty() => RoundState::Empty,
            None => RoundState::Selecting,
        }
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked.is_some()
    }

    /// Full sentence shown after a correct check.
    #[must_use]
    pub fn correct_sentence(&self) -> Option<&str> {
        (self.checked == Some(true)).then(|| self.record.german())
    }

    /// Full sentence shown by the third and later hints.
    #[must_use]
    pub fn hint_text(&self) -> Option<&str> {
        self.sentence_revealed.then(|| self.record.german())
    }

    /// Transient styling after a wrong answer.
    #[must_use]
    pub fn error_flash(&self) -> bool {
        self.error_flash
    }

    pub fn clear_error_flash(&mut self) {
        self.error_flash = false;
    }

    /// Unselected tokens: display order minus the selected multiset.
    #[must_use]
    pub fn bank(&self) -> Vec<BankToken> {
        let mut pending: Vec<&str> = self.selected.iter().map(String::as_str).collect();
        let mut bank = Vec::with_capacity(self.display.len().saturating_sub(pending.len()));
        for (slot, text) in self.display.iter().enumerate() {
            if let Some(pos) = pending.iter().position(|s| *s == text.as_str()) {
                pending.swap_remove(pos);
                continue;
            }
            bank.push(BankToken {
                slot,
                text: text.clone(),
            });
        }
        bank
    }

    /// Move the bank entry at `bank_index` to the end of the builder.
    pub fn select(&mut self, bank_index: usize) -> bool {
        let Some(token) = self.bank().into_iter().nth(bank_index) else {
            return false;
        };
        self.push_selected(token.text);
        true
    }

    /// Move one copy of `text` from the bank to the builder.
    pub fn select_token(&mut self, text: &str) -> bool {
        if !self.bank().iter().any(|token| token.text == text) {
            return false;
        }
        self.push_selected(text.to_string());
        true
    }

    /// Return the builder token at `builder_index` to the bank.
    pub fn unselect(&mut self, builder_index: usize) -> bool {
        if builder_index >= self.selected.len() {
            return false;
        }
        self.selected.remove(builder_index);
        self.invalidate();
        true
    }

    /// Compare the builder against the reference sentence.
    pub fn check(&mut self) -> CheckOutcome {
        if self.checked.is_some() {
            return CheckOutcome::AlreadyChecked;
        }
        if self.selected.is_empty() {
            return CheckOutcome::NothingSelected;
        }

        let correct = answer_matches(&self.selected, self.record.german());
        self.checked = Some(correct);
        self.error_flash = !correct;
        if correct {
            CheckOutcome::Correct
        } else {
            CheckOutcome::Incorrect
        }
    }

    pub fn hint(&mut self) -> HintOutcome {
        self.hints_used += 1;
        if self.hints_used > AUTO_SELECT_HINTS {
            self.sentence_revealed = true;
            return HintOutcome::Revealed;
        }

        let Some(next) = self.answer_key.get(self.selected.len()).cloned() else {
            return HintOutcome::Unavailable;
        };
        if self.select_token(&next) {
            HintOutcome::Selected(next)
        } else {
            HintOutcome::Unavailable
        }
    }

    #[must_use]
    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    /// Tab: move focus forward through bank tokens then builder tokens.
    pub fn focus_next(&mut self) -> Option<FocusTarget> {
        self.step_focus(true)
    }

    /// Shift+Tab: move focus backwards, wrapping.
    pub fn focus_prev(&mut self) -> Option<FocusTarget> {
        self.step_focus(false)
    }

    /// Enter on the focused token: select it from the bank or unselect it from the builder.
    pub fn activate_focused(&mut self) -> bool {
        match self.focus {
            Some(FocusTarget::Bank(index)) => self.select(index),
            Some(FocusTarget::Builder(index)) => self.unselect(index),
            None => false,
        }
    }

    fn step_focus(&mut self, forward: bool) -> Option<FocusTarget> {
        let bank_len = self.bank().len();
        let len = bank_len + self.selected.len();
        if len == 0 {
            self.focus = None;
            return None;
        }

        let current = self.focus.and_then(|target| match target {
            FocusTarget::Bank(i) if i < bank_len => Some(i),
            FocusTarget::Builder(i) if i < self.selected.len() => Some(bank_len + i),
            _ => None,
        });
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        let target = if next < bank_len {
            FocusTarget::Bank(next)
        } else {
            FocusTarget::Builder(next - bank_len)
        };
        self.focus = Some(target);
        self.focus
    }

    fn push_selected(&mut self, token: String) {
        self.selected.push(token);
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.checked = None;
        self.error_flash = false;
        self.focus = None;
    }
}
