use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// TokenFrequency struct
/// Counts token occurrences across any number of documents.
/// Tokens are kept in the order they were first added, which is the order
/// the vocabulary assigns indices in.
///
/// # Examples
/// ```
/// use bow_vectorizer::TokenFrequency;
/// let mut freq = TokenFrequency::new();
/// freq.add_tokens(&["foo", "bar", "foo"]);
///
/// assert_eq!(freq.token_count("foo"), 2);
/// assert_eq!(freq.iter().map(|(t, _)| t).collect::<Vec<_>>(), vec!["foo", "bar"]);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    token_count: IndexMap<String, u64>,
    total_token_count: u64,
}

/// Adding and removing tokens
impl TokenFrequency {
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// Add a token
    ///
    /// # Arguments
    /// * `token` - token to add
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        if let Some(count) = self.token_count.get_mut(token) {
            *count += 1;
        } else {
            self.token_count.insert(token.to_string(), 1);
        }
        self.total_token_count += 1;
        self
    }

    /// Add multiple tokens
    ///
    /// # Arguments
    /// * `tokens` - tokens to add, in document order
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }

    /// Drop every token seen fewer than `min_count` times.
    /// Surviving tokens keep their first-occurrence order.
    ///
    /// # Returns
    /// * `u64` - total occurrences removed
    pub fn retain_min_count(&mut self, min_count: u64) -> u64 {
        let mut removed: u64 = 0;
        self.token_count.retain(|_, count| {
            if *count < min_count {
                removed += *count;
                false
            } else {
                true
            }
        });
        self.total_token_count -= removed;
        removed
    }
}

impl<T> From<&[T]> for TokenFrequency
where
    T: AsRef<str>,
{
    fn from(tokens: &[T]) -> Self {
        let mut freq = TokenFrequency::new();
        freq.add_tokens(tokens);
        freq
    }
}

/// Reading counts
impl TokenFrequency {
    /// Tokens and counts in first-occurrence order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.token_count
            .iter()
            .map(|(token, &count)| (token.as_str(), count))
    }

    /// Tokens in first-occurrence order
    #[inline]
    pub fn token_set(&self) -> impl Iterator<Item = &str> {
        self.token_count.keys().map(String::as_str)
    }

    /// Occurrences of `token`, 0 when never seen
    #[inline]
    pub fn token_count(&self, token: &str) -> u64 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    /// Sum of all counts
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// Number of distinct tokens
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_count.contains_key(token)
    }
}
