use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SentenceError {
    #[error("sentence is missing its english text")]
    MissingEnglish,

    #[error("sentence is missing its german text")]
    MissingGerman,
}

/// An English prompt paired with the German sentence the learner rebuilds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRecord {
    english: String,
    german: String,
}

impl SentenceRecord {
    /// # Errors
    ///
    /// Returns `SentenceError` when either side of the pair is blank.
    pub fn new(english: impl Into<String>, german: impl Into<String>) -> Result<Self, SentenceError> {
        let english = english.into();
        let german = german.into();
        if english.trim().is_empty() {
            return Err(SentenceError::MissingEnglish);
        }
        if german.trim().is_empty() {
            return Err(SentenceError::MissingGerman);
        }
        Ok(Self { english, german })
    }

    #[must_use]
    pub fn english(&self) -> &str {
        &self.english
    }

    #[must_use]
    pub fn german(&self) -> &str {
        &self.german
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_sides() {
        assert_eq!(
            SentenceRecord::new("", "Hallo.").unwrap_err(),
            SentenceError::MissingEnglish
        );
        assert_eq!(
            SentenceRecord::new("Hello.", "   ").unwrap_err(),
            SentenceError::MissingGerman
        );
    }

    #[test]
    fn keeps_text_verbatim() {
        let record = SentenceRecord::new("I have 2 apples.", "Ich habe 2 Äpfel.").unwrap();
        assert_eq!(record.english(), "I have 2 apples.");
        assert_eq!(record.german(), "Ich habe 2 Äpfel.");
    }
}
