use async_trait::async_trait;
use quiz_core::model::{NounRecord, ProgressHistory, ProgressRecord, SentenceRecord, VerbChallenge};
use serde_json::Value;

use super::wire::{keep_valid, noun_from_value, sentence_from_value, verb_from_value};
use super::{HttpRepository, check_status};
use crate::repository::{
    NounRepository, ProgressRepository, SentenceRepository, StorageError, VerbRepository,
};

const NOUNS_PATH: &str = "api/noun-quiz/nouns";
const SENTENCES_PATH: &str = "api/quiz/sentences";
const PROGRESS_PATH: &str = "api/quiz/progress";
const VERB_NEXT_PATH: &str = "api/verb-quiz/next";

#[async_trait]
impl NounRepository for HttpRepository {
    async fn list_nouns(&self) -> Result<Vec<NounRecord>, StorageError> {
        let values: Vec<Value> = self.get_json(self.endpoint(NOUNS_PATH)?).await?;
        Ok(keep_valid("noun", values, noun_from_value))
    }
}

#[async_trait]
impl SentenceRepository for HttpRepository {
    async fn list_sentences(&self) -> Result<Vec<SentenceRecord>, StorageError> {
        let values: Vec<Value> = self.get_json(self.endpoint(SENTENCES_PATH)?).await?;
        Ok(keep_valid("sentence", values, sentence_from_value))
    }
}

#[async_trait]
impl ProgressRepository for HttpRepository {
    async fn load_progress(&self) -> Result<ProgressHistory, StorageError> {
        self.get_json(self.endpoint(PROGRESS_PATH)?).await
    }

    async fn save_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let url = self.endpoint(PROGRESS_PATH)?;
        tracing::debug!(%url, date = %record.date, correct = record.correct, total = record.total, "POST");
        let response = self.client.post(url).json(record).send().await?;
        check_status(response)?;
        Ok(())
    }
}

#[async_trait]
impl VerbRepository for HttpRepository {
    async fn next_verb(&self) -> Result<VerbChallenge, StorageError> {
        let value: Value = self.get_json(self.endpoint(VERB_NEXT_PATH)?).await?;
        verb_from_value(value)
    }
}
