use std::collections::{HashMap, HashSet};

use quiz_core::model::{ExamplePair, LookupResult, Translation};
use services::LookupError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExampleVm {
    pub de: String,
    pub en: String,
}

/// Render-ready lookup result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupVm {
    pub word: String,
    pub article: Option<String>,
    pub translation: Option<String>,
    pub pons: String,
    pub verbformen_html: String,
    pub image_url: Option<String>,
    pub examples: Vec<ExampleVm>,
    pub translations: Vec<Translation>,
    pub dictionary_note: Option<String>,
}

#[must_use]
pub fn map_lookup(
    result: &LookupResult,
    translations: Result<Vec<Translation>, LookupError>,
) -> LookupVm {
    let (translations, dictionary_note) = match translations {
        Ok(pairs) => (pairs, None),
        Err(err) => (Vec::new(), Some(err.to_string())),
    };
    LookupVm {
        word: result.word.clone(),
        article: result.article.clone().filter(|a| !a.trim().is_empty()),
        translation: result.translation.clone().filter(|t| !t.trim().is_empty()),
        pons: result.pons_pretty(),
        verbformen_html: sanitize_html(&result.verbformen_html),
        image_url: result.image_url().map(ToString::to_string),
        examples: map_examples(&result.examples),
        translations,
        dictionary_note,
    }
}

#[must_use]
pub fn map_examples(pairs: &[ExamplePair]) -> Vec<ExampleVm> {
    pairs
        .iter()
        .map(|pair| ExampleVm {
            de: pair.de.clone(),
            en: pair.en.clone(),
        })
        .collect()
}

/// Strip the backend's conjugation markup down to inert formatting tags.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "table", "thead", "tbody", "tr",
        "th", "td", "ul", "ol", "li", "h1", "h2", "h3", "h4", "section",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("td", ["colspan", "rowspan"].into_iter().collect());
    attributes.insert("th", ["colspan", "rowspan"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}
