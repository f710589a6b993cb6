use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker the backend puts where the verb form was cut out.
pub const BLANK: &str = "____";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VerbError {
    #[error("verb is missing its meaning")]
    MissingMeaning,

    #[error("verb is missing its infinitive")]
    MissingInfinitive,

    #[error("verb sentence is missing the expected form")]
    MissingCorrectForm,

    #[error("verb sentence has no blank")]
    MissingBlank,
}

/// A verb with its infinitive, perfect participle and present-tense forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbForms {
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub infinitive: String,
    #[serde(default)]
    pub perfect: String,
    #[serde(default)]
    pub ich: String,
    #[serde(default)]
    pub du: String,
    #[serde(default)]
    pub er: String,
    #[serde(default)]
    pub sie: String,
    #[serde(default)]
    pub es: String,
    #[serde(default)]
    pub wir_sie: String,
    #[serde(default)]
    pub ihr: String,
}

impl VerbForms {
    /// Present-tense forms that are filled in, labelled by pronoun.
    #[must_use]
    pub fn conjugation(&self) -> Vec<(&'static str, &str)> {
        [
            ("ich", self.ich.as_str()),
            ("du", self.du.as_str()),
            ("er", self.er.as_str()),
            ("sie", self.sie.as_str()),
            ("es", self.es.as_str()),
            ("wir/Sie", self.wir_sie.as_str()),
            ("ihr", self.ihr.as_str()),
        ]
        .into_iter()
        .filter(|(_, form)| !form.trim().is_empty())
        .collect()
    }
}

/// A sentence that uses one of the verb's forms, with that form blanked out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbSentence {
    #[serde(default)]
    pub english: String,
    #[serde(default)]
    pub german: String,
    pub blanked_sentence: String,
    pub correct_form: String,
    #[serde(default)]
    pub sentence_index: Option<usize>,
}

/// One verb quiz question as served by `/api/verb-quiz/next`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbChallenge {
    pub verb: VerbForms,
    /// Absent when no sentence in the corpus uses the verb.
    #[serde(default)]
    pub sentence: Option<VerbSentence>,
    #[serde(default)]
    pub has_perfect_form: bool,
}

impl VerbChallenge {
    /// # Errors
    ///
    /// Returns `VerbError` when the verb lacks a meaning or infinitive, or the
    /// sentence cannot be filled in.
    pub fn validate(self) -> Result<Self, VerbError> {
        if self.verb.meaning.trim().is_empty() {
            return Err(VerbError::MissingMeaning);
        }
        if self.verb.infinitive.trim().is_empty() {
            return Err(VerbError::MissingInfinitive);
        }
        if let Some(sentence) = &self.sentence {
            if sentence.correct_form.trim().is_empty() {
                return Err(VerbError::MissingCorrectForm);
            }
            if !sentence.blanked_sentence.contains(BLANK) {
                return Err(VerbError::MissingBlank);
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload() -> serde_json::Value {
        json!({
            "verb": {
                "meaning": "to go", "infinitive": "gehen", "perfect": "gegangen",
                "ich": "gehe", "du": "gehst", "er": "geht", "sie": "geht", "es": "geht",
                "wir_sie": "gehen", "ihr": ""
            },
            "sentence": {
                "english": "I go home.",
                "german": "Ich gehe nach Hause.",
                "blanked_sentence": "ich ____ nach hause.",
                "correct_form": "gehe",
                "sentence_index": 3
            },
            "has_perfect_form": true
        })
    }

    #[test]
    fn decodes_backend_payload() {
        let challenge: VerbChallenge = serde_json::from_value(payload()).unwrap();
        let challenge = challenge.validate().unwrap();
        assert_eq!(challenge.verb.infinitive, "gehen");
        assert_eq!(challenge.sentence.as_ref().unwrap().sentence_index, Some(3));
        assert!(challenge.has_perfect_form);

        let forms = challenge.verb.conjugation();
        assert_eq!(forms.len(), 6);
        assert_eq!(forms[5], ("wir/Sie", "gehen"));
    }

    #[test]
    fn missing_sentence_is_allowed() {
        let mut value = payload();
        value["sentence"] = serde_json::Value::Null;
        let challenge: VerbChallenge = serde_json::from_value(value).unwrap();
        assert!(challenge.validate().unwrap().sentence.is_none());
    }

    #[test]
    fn rejects_unusable_challenges() {
        let mut value = payload();
        value["verb"]["infinitive"] = json!(" ");
        let challenge: VerbChallenge = serde_json::from_value(value).unwrap();
        assert_eq!(challenge.validate().unwrap_err(), VerbError::MissingInfinitive);

        let mut value = payload();
        value["sentence"]["blanked_sentence"] = json!("ich gehe nach hause.");
        let challenge: VerbChallenge = serde_json::from_value(value).unwrap();
        assert_eq!(challenge.validate().unwrap_err(), VerbError::MissingBlank);
    }
}
