//! Text cleanup.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("word pattern"));

#[allow(clippy::expect_used)]
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("punctuation pattern"));

/// Split text into lower-cased runs of word characters.
///
/// Word characters are Unicode letters, digits and underscore, so
/// punctuation and whitespace both act as separators.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Replace every character other than ASCII letters, ASCII digits and
/// whitespace with a single space.
pub fn remove_punctuation(text: &str) -> String {
    PUNCTUATION.replace_all(text, " ").into_owned()
}

/// Lower-case `text` and drop the words that match a stopword.
///
/// Stopwords match case-insensitively. Surviving words are joined with
/// single spaces.
pub fn remove_stopwords<S: AsRef<str>>(text: &str, stopwords: &[S]) -> String {
    let stopwords: HashSet<String> = stopwords
        .iter()
        .map(|w| w.as_ref().to_lowercase())
        .collect();

    text.to_lowercase()
        .split_whitespace()
        .filter(|word| !stopwords.contains(*word))
        .collect::<Vec<_>>()
        .join(" ")
}
