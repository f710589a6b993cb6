use std::sync::Arc;
use std::time::Duration;

use quiz_core::Clock;
use quiz_core::model::{ProgressHistory, ProgressRecord, SentenceRecord};
use quiz_core::quiz::{CheckOutcome, FocusTarget, HintOutcome, SentenceRound};
use rand::rngs::StdRng;
use storage::repository::ProgressRepository;

use super::progress::ProgressTracker;
use crate::error::SentenceQuizError;

/// How long the wrong-answer styling stays on the builder.
pub const ERROR_FLASH: Duration = Duration::from_secs(1);

pub const EMPTY_MESSAGE: &str = "No sentences available";
pub const LOAD_FAILED_MESSAGE: &str = "Error loading sentences";

/// Outcome of the initial sentence fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Ready,
    Empty,
    Failed,
}

/// Result of pressing "next".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Unchecked selection: the press ran a check instead of advancing.
    Checked(CheckOutcome),
    /// The next sentence is loaded.
    Advanced { index: usize },
    /// Nothing to advance through.
    Unavailable,
}

/// Abstract input events for the reorder quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceIntent {
    Select(usize),
    Unselect(usize),
    Check,
    Hint,
    Advance,
    FocusNext,
    FocusPrev,
    Activate,
    ClearErrorFlash,
}

/// Pushes one day's counts and re-fetches the history.
///
/// Holds no reference to the controller, so it can run while the quiz keeps
/// taking input.
#[derive(Clone)]
pub struct ProgressSync {
    repo: Arc<dyn ProgressRepository>,
    record: ProgressRecord,
}

impl ProgressSync {
    #[must_use]
    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    /// # Errors
    ///
    /// Returns `SentenceQuizError::Storage` when the write or the re-fetch fails.
    pub async fn run(self) -> Result<SyncedProgress, SentenceQuizError> {
        self.repo.save_progress(&self.record).await?;
        let history = self.repo.load_progress().await?;
        Ok(SyncedProgress {
            pushed: self.record,
            history,
        })
    }
}

/// A finished push together with the history fetched after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncedProgress {
    pub pushed: ProgressRecord,
    pub history: ProgressHistory,
}

/// What [`SentenceOrderController::apply`] did.
pub struct SentenceEffect {
    /// `true` when state may have changed.
    pub changed: bool,
    /// Progress push to run after a correct check.
    pub sync: Option<ProgressSync>,
}

/// Drives the reorder-the-words exercise over a fixed list of sentences.
pub struct SentenceOrderController {
    clock: Clock,
    progress_repo: Arc<dyn ProgressRepository>,
    sentences: Vec<SentenceRecord>,
    index: usize,
    round: Option<SentenceRound>,
    rng: StdRng,
    progress: ProgressTracker,
    load: LoadState,
}

impl SentenceOrderController {
    pub(crate) fn new(
        clock: Clock,
        progress_repo: Arc<dyn ProgressRepository>,
        sentences: Vec<SentenceRecord>,
        load: LoadState,
        progress: ProgressTracker,
        rng: StdRng,
    ) -> Self {
        let mut controller = Self {
            clock,
            progress_repo,
            sentences,
            index: 0,
            round: None,
            rng,
            progress,
            load,
        };
        controller.load_round();
        controller
    }

    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Static text shown in place of the prompt when nothing could be loaded.
    #[must_use]
    pub fn load_message(&self) -> Option<&'static str> {
        match self.load {
            LoadState::Ready => None,
            LoadState::Empty => Some(EMPTY_MESSAGE),
            LoadState::Failed => Some(LOAD_FAILED_MESSAGE),
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    #[must_use]
    pub fn round(&self) -> Option<&SentenceRound> {
        self.round.as_ref()
    }

    /// English prompt of the current sentence.
    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        self.round.as_ref().map(|round| round.record().english())
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn select(&mut self, bank_index: usize) -> bool {
        self.round
            .as_mut()
            .is_some_and(|round| round.select(bank_index))
    }

    pub fn unselect(&mut self, builder_index: usize) -> bool {
        self.round
            .as_mut()
            .is_some_and(|round| round.unselect(builder_index))
    }

    pub fn hint(&mut self) -> HintOutcome {
        self.round
            .as_mut()
            .map_or(HintOutcome::Unavailable, SentenceRound::hint)
    }

    pub fn focus_next(&mut self) -> Option<FocusTarget> {
        self.round.as_mut().and_then(SentenceRound::focus_next)
    }

    pub fn focus_prev(&mut self) -> Option<FocusTarget> {
        self.round.as_mut().and_then(SentenceRound::focus_prev)
    }

    pub fn activate_focused(&mut self) -> bool {
        self.round
            .as_mut()
            .is_some_and(SentenceRound::activate_focused)
    }

    pub fn clear_error_flash(&mut self) {
        if let Some(round) = self.round.as_mut() {
            round.clear_error_flash();
        }
    }

    /// Check the builder and count the attempt.
    ///
    /// A correct answer also returns the progress push to run.
    pub fn check_round(&mut self) -> (CheckOutcome, Option<ProgressSync>) {
        let Some(round) = self.round.as_mut() else {
            return (CheckOutcome::NothingSelected, None);
        };
        let outcome = round.check();
        if !outcome.counted() {
            return (outcome, None);
        }

        let correct = outcome == CheckOutcome::Correct;
        self.progress.record(&self.clock.today_key(), correct);
        tracing::debug!(?outcome, counts = ?self.progress.counts(), "sentence checked");

        (outcome, correct.then(|| self.progress_sync()))
    }

    /// Check the builder. A correct answer is pushed to the progress store.
    pub async fn check(&mut self) -> CheckOutcome {
        let (outcome, sync) = self.check_round();
        if let Some(sync) = sync {
            self.finish_sync(sync.run().await);
        }
        outcome
    }

    /// A push of today's current counts.
    #[must_use]
    pub fn progress_sync(&self) -> ProgressSync {
        ProgressSync {
            repo: Arc::clone(&self.progress_repo),
            record: self.progress.today_record(),
        }
    }

    /// Apply the outcome of a [`ProgressSync`]. Failures are logged only.
    pub fn finish_sync(&mut self, result: Result<SyncedProgress, SentenceQuizError>) {
        match result {
            Ok(synced) => self.progress.adopt_synced(&synced.history, &synced.pushed),
            Err(err) => tracing::error!(error = %err, "failed to sync progress"),
        }
    }

    /// Push today's counts, then refresh today and the last-day summary.
    ///
    /// # Errors
    ///
    /// Returns `SentenceQuizError::Storage` when the write or the re-fetch fails.
    pub async fn sync_progress(&mut self) -> Result<(), SentenceQuizError> {
        let synced = self.progress_sync().run().await?;
        self.progress.adopt_synced(&synced.history, &synced.pushed);
        Ok(())
    }

    /// Go to the next sentence, or force a check when a selection is pending.
    pub fn advance_round(&mut self) -> (AdvanceOutcome, Option<ProgressSync>) {
        if self.sentences.is_empty() {
            return (AdvanceOutcome::Unavailable, None);
        }
        let pending = self
            .round
            .as_ref()
            .is_some_and(|round| !round.selected().is_empty() && !round.is_checked());
        if pending {
            let (outcome, sync) = self.check_round();
            return (AdvanceOutcome::Checked(outcome), sync);
        }

        self.index = (self.index + 1) % self.sentences.len();
        self.load_round();
        (AdvanceOutcome::Advanced { index: self.index }, None)
    }

    pub async fn advance(&mut self) -> AdvanceOutcome {
        let (outcome, sync) = self.advance_round();
        if let Some(sync) = sync {
            self.finish_sync(sync.run().await);
        }
        outcome
    }

    /// Apply one input event without waiting on the network.
    pub fn apply(&mut self, intent: SentenceIntent) -> SentenceEffect {
        let (changed, sync) = match intent {
            SentenceIntent::Select(index) => (self.select(index), None),
            SentenceIntent::Unselect(index) => (self.unselect(index), None),
            SentenceIntent::Check => {
                let (outcome, sync) = self.check_round();
                (outcome.counted(), sync)
            }
            SentenceIntent::Hint => {
                self.hint();
                (self.round.is_some(), None)
            }
            SentenceIntent::Advance => {
                let (outcome, sync) = self.advance_round();
                (outcome != AdvanceOutcome::Unavailable, sync)
            }
            SentenceIntent::FocusNext => (self.focus_next().is_some(), None),
            SentenceIntent::FocusPrev => (self.focus_prev().is_some(), None),
            SentenceIntent::Activate => (self.activate_focused(), None),
            SentenceIntent::ClearErrorFlash => {
                self.clear_error_flash();
                (true, None)
            }
        };
        SentenceEffect { changed, sync }
    }

    /// Apply one input event and run any progress push it caused.
    /// Returns `true` when state may have changed.
    pub async fn dispatch(&mut self, intent: SentenceIntent) -> bool {
        let effect = self.apply(intent);
        if let Some(sync) = effect.sync {
            self.finish_sync(sync.run().await);
        }
        effect.changed
    }

    fn load_round(&mut self) {
        self.round = self
            .sentences
            .get(self.index)
            .cloned()
            .map(|record| SentenceRound::new(record, &mut self.rng));
    }
}
