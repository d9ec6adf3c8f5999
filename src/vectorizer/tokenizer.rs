use std::sync::LazyLock;

use regex::Regex;

/// One or more alphanumeric characters (any unicode letter or number) or underscores.
/// Combining marks and connector punctuation other than `_` end a token.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("token pattern is a valid regex"));

/// Lazily split `text` into tokens, left to right, non-overlapping.
///
/// Case folding is applied to the extracted text only, after the
/// boundaries are found.
pub fn tokenize_iter(text: &str, lowercase: bool) -> impl Iterator<Item = String> + '_ {
    TOKEN_PATTERN.find_iter(text).map(move |m| {
        if lowercase {
            m.as_str().to_lowercase()
        } else {
            m.as_str().to_string()
        }
    })
}

/// Split `text` into tokens
///
/// # Arguments
/// * `text` - the document
/// * `lowercase` - lowercase every extracted token
///
/// # Returns
/// * `Vec<String>` - tokens in the order they appear in `text`
///
/// # Examples
/// ```
/// use bow_vectorizer::tokenize;
/// assert_eq!(tokenize("Hello, World! 42", true), vec!["hello", "world", "42"]);
/// ```
pub fn tokenize(text: &str, lowercase: bool) -> Vec<String> {
    tokenize_iter(text, lowercase).collect()
}
