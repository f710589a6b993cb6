//! Sentence tokenization and answer normalization.

use std::sync::LazyLock;

use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// A word run (any letter or digit, apostrophes, `:`, `/`, `-`) with at most
/// one trailing punctuation mark.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}'’:/\-]+[.,!?]?").expect("token pattern is valid")
});

/// Split a sentence into the ordered tokens that form the answer key.
#[must_use]
pub fn tokenize(sentence: &str) -> Vec<String> {
    TOKEN
        .find_iter(sentence)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Return a shuffled copy of `tokens` (Fisher–Yates via `SliceRandom`).
#[must_use]
pub fn shuffled<R: Rng + ?Sized>(tokens: &[String], rng: &mut R) -> Vec<String> {
    let mut out = tokens.to_vec();
    out.shuffle(rng);
    out
}

/// Lowercase, trim, decompose and drop combining marks.
#[must_use]
pub fn normalize_answer(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Join selected tokens with single spaces and compare against the reference.
///
/// The reference goes through [`tokenize`] too, so characters the tokenizer
/// drops (extra spaces, ellipses) cannot make a round unsolvable.
#[must_use]
pub fn answer_matches(selected: &[String], reference: &str) -> bool {
    normalize_answer(&selected.join(" ")) == normalize_answer(&tokenize(reference).join(" "))
}
