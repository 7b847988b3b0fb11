use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// A word starts with an ASCII letter and continues with letters, digits,
/// `+`, `.`, `#` or `-`, which keeps `c++`, `c#` and `node.js` whole.
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9+.#-]+").expect("valid word regex"));

/// Splits free text into lowercase tokens, in order of appearance.
///
/// Trailing dots are sentence punctuation, not part of the word ("SQL." is
/// `sql`). Tokens shorter than two characters are dropped.
pub fn normalize_words(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches('.'))
        .filter(|word| word.len() >= 2)
        .map(str::to_ascii_lowercase)
        .collect()
}

/// The distinct tokens of `text`.
pub fn vocabulary(text: &str) -> BTreeSet<String> {
    normalize_words(text).into_iter().collect()
}
