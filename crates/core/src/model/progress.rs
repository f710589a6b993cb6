use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Formats a calendar day the way progress entries are keyed (`YYYY-MM-DD`).
#[must_use]
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Correct/total counts stored for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub correct: u32,
    pub total: u32,
}

impl ProgressEntry {
    #[must_use]
    pub fn new(correct: u32, total: u32) -> Self {
        Self { correct, total }
    }
}

/// Body of a progress upsert: one day's counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub date: String,
    pub correct: u32,
    pub total: u32,
}

impl ProgressRecord {
    #[must_use]
    pub fn new(date: impl Into<String>, entry: ProgressEntry) -> Self {
        Self {
            date: date.into(),
            correct: entry.correct,
            total: entry.total,
        }
    }

    #[must_use]
    pub fn entry(&self) -> ProgressEntry {
        ProgressEntry::new(self.correct, self.total)
    }
}

/// Most recent day before today that has recorded progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastDaySummary {
    pub date: String,
    pub entry: ProgressEntry,
}

impl LastDaySummary {
    #[must_use]
    pub fn label(&self) -> String {
        format!("Last day ({}): {}", self.date, self.entry.correct)
    }
}

/// Day-keyed progress map as returned by the backend.
///
/// Keys are kept as the backend sent them and ordered as strings, so ISO dates
/// sort chronologically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressHistory {
    entries: BTreeMap<String, ProgressEntry>,
}

impl ProgressHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, day: &str) -> Option<ProgressEntry> {
        self.entries.get(day).copied()
    }

    /// Counts for `today`, or zero when nothing was recorded yet.
    #[must_use]
    pub fn entry_for(&self, today: &str) -> ProgressEntry {
        self.get(today).unwrap_or_default()
    }

    /// Replace the entry for the record's day.
    pub fn upsert(&mut self, record: &ProgressRecord) {
        self.entries.insert(record.date.clone(), record.entry());
    }

    /// The greatest key that is not `today`.
    #[must_use]
    pub fn last_day_before(&self, today: &str) -> Option<LastDaySummary> {
        self.entries
            .iter()
            .rev()
            .find(|(date, _)| date.as_str() != today)
            .map(|(date, entry)| LastDaySummary {
                date: date.clone(),
                entry: *entry,
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ProgressEntry)> {
        self.entries.iter().map(|(date, entry)| (date.as_str(), *entry))
    }
}

impl FromIterator<(String, ProgressEntry)> for ProgressHistory {
    fn from_iter<I: IntoIterator<Item = (String, ProgressEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> ProgressHistory {
        [
            ("2024-01-01".to_string(), ProgressEntry::new(3, 5)),
            ("2024-01-03".to_string(), ProgressEntry::new(7, 9)),
            ("2024-01-02".to_string(), ProgressEntry::new(1, 4)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn day_key_is_iso_date() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(day_key(day), "2024-01-05");
    }

    #[test]
    fn missing_today_is_zero() {
        assert_eq!(history().entry_for("2024-02-01"), ProgressEntry::default());
        assert_eq!(history().entry_for("2024-01-03"), ProgressEntry::new(7, 9));
    }

    #[test]
    fn last_day_skips_today() {
        let last = history().last_day_before("2024-01-03").unwrap();
        assert_eq!(last.date, "2024-01-02");
        assert_eq!(last.label(), "Last day (2024-01-02): 1");

        let last = history().last_day_before("2024-02-01").unwrap();
        assert_eq!(last.date, "2024-01-03");
    }

    #[test]
    fn last_day_absent_when_only_today() {
        let only_today: ProgressHistory =
            [("2024-01-03".to_string(), ProgressEntry::new(1, 1))].into_iter().collect();
        assert!(only_today.last_day_before("2024-01-03").is_none());
        assert!(ProgressHistory::new().last_day_before("2024-01-03").is_none());
    }

    #[test]
    fn upsert_replaces_day() {
        let mut history = history();
        history.upsert(&ProgressRecord::new("2024-01-01", ProgressEntry::new(4, 6)));
        assert_eq!(history.get("2024-01-01"), Some(ProgressEntry::new(4, 6)));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn decodes_backend_map() {
        let json = r#"{"2024-01-01": {"correct": 3, "total": 5}}"#;
        let history: ProgressHistory = serde_json::from_str(json).unwrap();
        assert_eq!(history.get("2024-01-01"), Some(ProgressEntry::new(3, 5)));
    }
}
