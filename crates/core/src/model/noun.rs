use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Value the backend uses when a noun has no plural form.
pub const NO_PLURAL_PLACEHOLDER: &str = "N/A";

/// Value the backend uses when a noun has no example sentence.
pub const NO_EXAMPLE_PLACEHOLDER: &str = "No example available";

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown article: {raw:?}")]
pub struct ArticleParseError {
    raw: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NounError {
    #[error("noun singular form cannot be empty")]
    EmptySingular,

    #[error("noun full word cannot be empty")]
    EmptyFullWord,

    #[error("noun meaning cannot be empty")]
    EmptyMeaning,

    #[error(transparent)]
    Article(#[from] ArticleParseError),
}

//
// ─── ARTICLE ───────────────────────────────────────────────────────────────────
//

/// Definite article marking the grammatical gender of a German noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Article {
    Der,
    Die,
    Das,
}

impl Article {
    /// All articles in the order the quiz presents them.
    pub const ALL: [Article; 3] = [Article::Der, Article::Die, Article::Das];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Article::Der => "der",
            Article::Die => "die",
            Article::Das => "das",
        }
    }

    /// Position of this article within [`Article::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Article::Der => 0,
            Article::Die => 1,
            Article::Das => 2,
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Article {
    type Err = ArticleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "der" => Ok(Article::Der),
            "die" => Ok(Article::Die),
            "das" => Ok(Article::Das),
            _ => Err(ArticleParseError { raw: s.to_string() }),
        }
    }
}

//
// ─── NOUN RECORD ───────────────────────────────────────────────────────────────
//

/// A vocabulary noun served by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounRecord {
    singular: String,
    article: Article,
    full_word: String,
    plural: String,
    meaning: String,
    example: String,
}

impl NounRecord {
    /// Build a validated noun record.
    ///
    /// Missing plural/example values are stored as the backend placeholders.
    ///
    /// # Errors
    ///
    /// Returns `NounError` when a required text field is blank.
    pub fn new(
        singular: impl Into<String>,
        article: Article,
        full_word: impl Into<String>,
        plural: impl Into<String>,
        meaning: impl Into<String>,
        example: impl Into<String>,
    ) -> Result<Self, NounError> {
        let singular = singular.into().trim().to_string();
        let full_word = full_word.into().trim().to_string();
        let meaning = meaning.into().trim().to_string();
        let plural = non_blank_or(plural.into(), NO_PLURAL_PLACEHOLDER);
        let example = non_blank_or(example.into(), NO_EXAMPLE_PLACEHOLDER);

        if singular.is_empty() {
            return Err(NounError::EmptySingular);
        }
        if full_word.is_empty() {
            return Err(NounError::EmptyFullWord);
        }
        if meaning.is_empty() {
            return Err(NounError::EmptyMeaning);
        }

        Ok(Self {
            singular,
            article,
            full_word,
            plural,
            meaning,
            example,
        })
    }

    #[must_use]
    pub fn singular(&self) -> &str {
        &self.singular
    }

    #[must_use]
    pub fn article(&self) -> Article {
        self.article
    }

    #[must_use]
    pub fn full_word(&self) -> &str {
        &self.full_word
    }

    #[must_use]
    pub fn plural(&self) -> &str {
        &self.plural
    }

    #[must_use]
    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    #[must_use]
    pub fn example(&self) -> &str {
        &self.example
    }

    /// Plural form, or `None` when the backend had none.
    #[must_use]
    pub fn known_plural(&self) -> Option<&str> {
        (self.plural != NO_PLURAL_PLACEHOLDER).then_some(self.plural.as_str())
    }

    /// Example sentence, or `None` when the backend had none.
    #[must_use]
    pub fn known_example(&self) -> Option<&str> {
        (self.example != NO_EXAMPLE_PLACEHOLDER).then_some(self.example.as_str())
    }
}

fn non_blank_or(value: String, placeholder: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder.to_string()
    } else {
        trimmed.to_string()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
