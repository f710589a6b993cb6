use async_trait::async_trait;
use quiz_core::model::{ExamplePair, LookupResult, PonsResponse};
use serde_json::Value;

use super::HttpRepository;
use super::wire::examples_from_value;
use crate::repository::{LookupRepository, StorageError};

#[async_trait]
impl LookupRepository for HttpRepository {
    async fn lookup(&self, word: &str) -> Result<LookupResult, StorageError> {
        self.get_json(self.endpoint_with_word("api/lookup", word)?)
            .await
    }

    async fn dictionary(&self, word: &str) -> Result<PonsResponse, StorageError> {
        self.get_json(self.endpoint_with_word("api/dict/pons", word)?)
            .await
    }

    async fn examples(&self, word: &str) -> Result<Vec<ExamplePair>, StorageError> {
        let value: Value = self
            .get_json(self.endpoint_with_word("api/genai/examples", word)?)
            .await?;
        examples_from_value(value)
    }
}
