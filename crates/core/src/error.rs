use thiserror::Error;

use crate::model::{ArticleParseError, NounError, SentenceError, VerbError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Noun(#[from] NounError),
    #[error(transparent)]
    Sentence(#[from] SentenceError),
    #[error(transparent)]
    Article(#[from] ArticleParseError),
    #[error(transparent)]
    Verb(#[from] VerbError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Article, NounRecord, SentenceRecord};

    fn validate(raw_article: &str) -> Result<NounRecord, Error> {
        let article: Article = raw_article.parse()?;
        Ok(NounRecord::new("Tisch", article, "der Tisch", "", "table", "")?)
    }

    #[test]
    fn record_errors_convert_into_the_umbrella_error() {
        assert!(validate("der").is_ok());
        assert!(matches!(validate("dem"), Err(Error::Article(_))));

        let sentence: Result<SentenceRecord, Error> =
            SentenceRecord::new("", "Hallo").map_err(Error::from);
        assert!(matches!(sentence, Err(Error::Sentence(_))));
    }
}
