use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A German example sentence with its English translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamplePair {
    #[serde(default)]
    pub de: String,
    #[serde(default)]
    pub en: String,
}

/// Word lookup payload from `/api/lookup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub word: String,
    #[serde(default)]
    pub pons: Value,
    #[serde(default)]
    pub verbformen_html: String,
    #[serde(default)]
    pub verb_image_url: Option<String>,
    #[serde(default)]
    pub translation: Option<String>,
    #[serde(default, rename = "beispiele_list")]
    pub examples: Vec<ExamplePair>,
    #[serde(default)]
    pub article: Option<String>,
}

impl LookupResult {
    /// Structured dictionary data as indented JSON text.
    #[must_use]
    pub fn pons_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.pons).unwrap_or_else(|_| self.pons.to_string())
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.verb_image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

/// One source/target pair from the dictionary endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub target: String,
}

/// Decoded body of [`PonsResponse::result`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSet {
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Dictionary response from `/api/dict/pons`. `result` carries JSON as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PonsResponse {
    pub word: String,
    pub result: String,
    #[serde(default)]
    pub is_cached: bool,
}

impl PonsResponse {
    /// # Errors
    ///
    /// Returns the JSON error when `result` is not a translation set.
    pub fn translations(&self) -> Result<TranslationSet, serde_json::Error> {
        serde_json::from_str(&self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_decodes_minimal_payload() {
        let json = r#"{"word": "Haus", "pons": {}, "verbformen_html": "<a>x</a>"}"#;
        let result: LookupResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.word, "Haus");
        assert!(result.image_url().is_none());
        assert!(result.examples.is_empty());
        assert_eq!(result.pons_pretty(), "{}");
    }

    #[test]
    fn lookup_decodes_examples_and_image() {
        let json = r#"{
            "word": "Haus",
            "pons": {"a": 1},
            "verbformen_html": "",
            "verb_image_url": "https://example.test/Haus.png",
            "translation": "house",
            "beispiele_list": [{"de": "Das Haus ist alt.", "en": "The house is old."}],
            "article": "das"
        }"#;
        let result: LookupResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.image_url(), Some("https://example.test/Haus.png"));
        assert_eq!(result.examples.len(), 1);
        assert_eq!(result.article.as_deref(), Some("das"));
    }

    #[test]
    fn pons_result_decodes_translations() {
        let response = PonsResponse {
            word: "Haus".into(),
            result: r#"{"translations": [{"source": "Haus", "target": "house"}]}"#.into(),
            is_cached: true,
        };
        let set = response.translations().unwrap();
        assert_eq!(set.translations[0].target, "house");
        assert!(set.error.is_none());
    }
}
