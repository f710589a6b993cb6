use quiz_core::model::{LastDaySummary, ProgressEntry, ProgressHistory, ProgressRecord};

/// Today's correct/total counters plus the last-day summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressTracker {
    today: String,
    counts: ProgressEntry,
    last_day: Option<LastDaySummary>,
}

impl ProgressTracker {
    #[must_use]
    pub fn new(today: impl Into<String>) -> Self {
        Self {
            today: today.into(),
            ..Self::default()
        }
    }

    /// Take today's counts and the last-day summary from a fetched history.
    pub fn adopt(&mut self, history: &ProgressHistory, today: impl Into<String>) {
        self.today = today.into();
        self.counts = history.entry_for(&self.today);
        self.last_day = history.last_day_before(&self.today);
    }

    /// Count one check made on `today`.
    ///
    /// A new day moves the running counts into the last-day summary and starts
    /// again from zero.
    pub fn record(&mut self, today: &str, correct: bool) {
        if self.today != today {
            if self.counts.total > 0 {
                self.last_day = Some(LastDaySummary {
                    date: std::mem::take(&mut self.today),
                    entry: self.counts,
                });
            }
            self.today = today.to_string();
            self.counts = ProgressEntry::default();
        }
        self.counts.total += 1;
        if correct {
            self.counts.correct += 1;
        }
    }

    /// Refresh from the history fetched after pushing `pushed`.
    ///
    /// Checks made while the push was in flight are kept: the fetched counts
    /// only replace the local ones when nothing moved since the push.
    pub fn adopt_synced(&mut self, history: &ProgressHistory, pushed: &ProgressRecord) {
        self.last_day = history.last_day_before(&self.today);
        if pushed.date == self.today && pushed.entry() == self.counts {
            self.counts = history.entry_for(&self.today);
        }
    }

    #[must_use]
    pub fn today(&self) -> &str {
        &self.today
    }

    #[must_use]
    pub fn counts(&self) -> ProgressEntry {
        self.counts
    }

    #[must_use]
    pub fn last_day(&self) -> Option<&LastDaySummary> {
        self.last_day.as_ref()
    }

    /// `Last day (<date>): <correct>`, or empty when there is no earlier day.
    #[must_use]
    pub fn last_day_label(&self) -> String {
        self.last_day
            .as_ref()
            .map(LastDaySummary::label)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn today_record(&self) -> ProgressRecord {
        ProgressRecord::new(self.today.clone(), self.counts)
    }
}
