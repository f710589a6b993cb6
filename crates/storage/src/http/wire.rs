use quiz_core::model::{Article, ExamplePair, NounRecord, SentenceRecord, VerbChallenge};
use serde::Deserialize;
use serde_json::Value;

use crate::repository::StorageError;

#[derive(Debug, Deserialize)]
struct NounWire {
    singular: String,
    article: String,
    full_word: String,
    #[serde(default)]
    plural: Option<String>,
    meaning: String,
    #[serde(default)]
    example: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SentenceWire {
    english: String,
    german: String,
}

#[derive(Debug, Deserialize)]
struct ExamplesWire {
    #[serde(default)]
    examples: Vec<ExamplePair>,
}

fn invalid(err: impl ToString) -> StorageError {
    StorageError::InvalidRecord(err.to_string())
}

pub(super) fn noun_from_value(value: Value) -> Result<NounRecord, StorageError> {
    let wire: NounWire = serde_json::from_value(value).map_err(invalid)?;
    let article: Article = wire.article.parse().map_err(invalid)?;
    NounRecord::new(
        wire.singular,
        article,
        wire.full_word,
        wire.plural.unwrap_or_default(),
        wire.meaning,
        wire.example.unwrap_or_default(),
    )
    .map_err(invalid)
}

pub(super) fn sentence_from_value(value: Value) -> Result<SentenceRecord, StorageError> {
    let wire: SentenceWire = serde_json::from_value(value).map_err(invalid)?;
    SentenceRecord::new(wire.english, wire.german).map_err(invalid)
}

/// `{"error": "..."}` bodies that some endpoints send with a 200 status.
fn reported_error(value: &Value) -> Option<String> {
    value.get("error").and_then(Value::as_str).map(str::to_string)
}

/// The verb endpoint only reports an error when it has no verbs at all.
pub(super) fn verb_from_value(value: Value) -> Result<VerbChallenge, StorageError> {
    if let Some(message) = reported_error(&value) {
        tracing::debug!(%message, "verb endpoint returned no question");
        return Err(StorageError::NotFound);
    }
    let challenge: VerbChallenge = serde_json::from_value(value).map_err(invalid)?;
    challenge.validate().map_err(invalid)
}

pub(super) fn examples_from_value(value: Value) -> Result<Vec<ExamplePair>, StorageError> {
    if let Some(message) = reported_error(&value) {
        return Err(StorageError::Backend(message));
    }
    let wire: ExamplesWire =
        serde_json::from_value(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
    Ok(wire
        .examples
        .into_iter()
        .filter(|pair| !pair.de.trim().is_empty())
        .collect())
}

/// Convert each element, dropping the ones that fail with a warning.
pub(super) fn keep_valid<T>(
    kind: &'static str,
    values: Vec<Value>,
    convert: impl Fn(Value) -> Result<T, StorageError>,
) -> Vec<T> {
    let total = values.len();
    let records: Vec<T> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match convert(value) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(kind, index, error = %err, "skipping malformed record");
                None
            }
        })
        .collect();
    if records.len() < total {
        tracing::warn!(kind, kept = records.len(), total, "dropped malformed records");
    }
    records
}
