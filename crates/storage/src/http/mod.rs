//! Repository adapter for the quiz backend's JSON API.

mod lookup;
mod quiz;
mod wire;

use std::env;

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::repository::StorageError;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Environment variable that overrides the backend base URL.
pub const API_URL_ENV: &str = "QUIZ_API_URL";

/// Errors raised while constructing an [`HttpRepository`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HttpInitError {
    #[error("invalid backend url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `QUIZ_API_URL`, falling back to [`DEFAULT_API_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var(API_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Talks to the backend over HTTP. Implements every repository trait.
#[derive(Clone, Debug)]
pub struct HttpRepository {
    client: Client,
    base: Url,
}

impl HttpRepository {
    /// # Errors
    ///
    /// Returns `HttpInitError::InvalidUrl` when `config.base_url` is not an absolute http(s) URL.
    pub fn new(config: &ApiConfig) -> Result<Self, HttpInitError> {
        Self::with_client(Client::new(), config)
    }

    /// # Errors
    ///
    /// Returns `HttpInitError::InvalidUrl` when `config.base_url` is not an absolute http(s) URL.
    pub fn with_client(client: Client, config: &ApiConfig) -> Result<Self, HttpInitError> {
        let raw = config.base_url.trim();
        let invalid = |reason: String| HttpInitError::InvalidUrl {
            url: raw.to_string(),
            reason,
        };

        let mut base = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", base.scheme())));
        }
        // Keep any path prefix when joining endpoint paths.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self { client, base })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, StorageError> {
        self.base
            .join(path)
            .map_err(|e| StorageError::Connection(e.to_string()))
    }

    fn endpoint_with_word(&self, path: &str, word: &str) -> Result<Url, StorageError> {
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut().append_pair("word", word);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, StorageError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        decode(check_status(response)?).await
    }
}

impl From<reqwest::Error> for StorageError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StorageError::Serialization(err.to_string())
        } else {
            StorageError::Connection(err.to_string())
        }
    }
}

fn check_status(response: Response) -> Result<Response, StorageError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(StorageError::NotFound);
    }
    if !status.is_success() {
        return Err(StorageError::HttpStatus(status.as_u16()));
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StorageError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| StorageError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let repo = HttpRepository::new(&ApiConfig::new("http://localhost:8000/quiz")).unwrap();
        assert_eq!(
            repo.endpoint("api/quiz/sentences").unwrap().as_str(),
            "http://localhost:8000/quiz/api/quiz/sentences"
        );
    }

    #[test]
    fn word_is_query_encoded() {
        let repo = HttpRepository::new(&ApiConfig::default()).unwrap();
        let url = repo.endpoint_with_word("api/lookup", "Größe & Co").unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/api/lookup?word=Gr%C3%B6%C3%9Fe+%26+Co"
        );
    }

    #[test]
    fn rejects_non_http_urls() {
        let err = HttpRepository::new(&ApiConfig::new("ftp://example.test")).unwrap_err();
        assert!(matches!(err, HttpInitError::InvalidUrl { .. }));

        let err = HttpRepository::new(&ApiConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, HttpInitError::InvalidUrl { .. }));
    }
}
