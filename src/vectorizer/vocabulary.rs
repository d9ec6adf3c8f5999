use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::{Error, Result};
use crate::vectorizer::{config::VectorizerConfig, token::TokenFrequency, tokenizer::tokenize_iter};

/// Vocabulary
/// Maps each token to its feature index and back.
///
/// Indices are contiguous from 0 and follow insertion order. A single
/// `IndexSet` serves both directions: `get` is token -> index, `token`
/// is index -> token. Nothing mutates a vocabulary once it is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: IndexSet<String>,
}

impl Vocabulary {
    /// Tokens of `freq`, in first-occurrence order
    pub(crate) fn from_token_frequency(freq: &TokenFrequency) -> Self {
        Self {
            tokens: freq.token_set().map(str::to_string).collect(),
        }
    }

    /// Strict constructor: every token must be unique
    fn from_unique_tokens(tokens: Vec<String>) -> Result<Self> {
        let mut set = IndexSet::with_capacity(tokens.len());
        for token in tokens {
            if let Some(dup) = set.replace(token) {
                return Err(Error::DuplicateToken { token: dup });
            }
        }
        Ok(Self { tokens: set })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Feature index of `token`
    #[inline]
    pub fn get(&self, token: &str) -> Option<usize> {
        self.tokens.get_index_of(token)
    }

    /// Token at feature index `index`
    #[inline]
    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get_index(index).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Tokens in index order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// `(token, index)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(index, token)| (token.as_str(), index))
    }

    /// Owned token -> index mapping, insertion-ordered
    pub fn to_index_map(&self) -> IndexMap<String, usize> {
        self.iter()
            .map(|(token, index)| (token.to_string(), index))
            .collect()
    }
}

/// Externally supplied vocabulary, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularySource {
    /// token -> index; indices may have gaps.
    /// Entry order breaks ties between equal indices.
    Mapping(IndexMap<String, usize>),
    /// position is the index
    Tokens(Vec<String>),
}

impl From<VocabularySource> for Vocabulary {
    /// Normalize into contiguous index order.
    ///
    /// A mapping is stably ordered by index and renumbered from 0.
    /// A token list keeps the first position of a repeated token.
    fn from(source: VocabularySource) -> Self {
        let tokens: IndexSet<String> = match source {
            VocabularySource::Mapping(mapping) => {
                let mut entries: Vec<(String, usize)> = mapping.into_iter().collect();
                entries.sort_by_key(|(_, index)| *index);
                entries.into_iter().map(|(token, _)| token).collect()
            }
            VocabularySource::Tokens(list) => list.into_iter().collect(),
        };
        debug!(vocab_size = tokens.len(), "Normalized supplied vocabulary");
        Self { tokens }
    }
}

impl From<HashMap<String, usize>> for VocabularySource {
    /// A `HashMap` has no meaningful order, so ties fall back to token order.
    fn from(mapping: HashMap<String, usize>) -> Self {
        let mut entries: Vec<(String, usize)> = mapping.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        VocabularySource::Mapping(entries.into_iter().collect())
    }
}

impl From<IndexMap<String, usize>> for VocabularySource {
    fn from(mapping: IndexMap<String, usize>) -> Self {
        VocabularySource::Mapping(mapping)
    }
}

impl From<Vec<String>> for VocabularySource {
    fn from(tokens: Vec<String>) -> Self {
        VocabularySource::Tokens(tokens)
    }
}

impl From<Vec<&str>> for VocabularySource {
    fn from(tokens: Vec<&str>) -> Self {
        VocabularySource::Tokens(tokens.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for VocabularySource {
    fn from(tokens: &[&str]) -> Self {
        VocabularySource::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}

impl From<Vocabulary> for VocabularySource {
    fn from(vocabulary: Vocabulary) -> Self {
        VocabularySource::Tokens(vocabulary.tokens.into_iter().collect())
    }
}

impl From<&Vocabulary> for VocabularySource {
    fn from(vocabulary: &Vocabulary) -> Self {
        VocabularySource::Tokens(vocabulary.tokens.iter().cloned().collect())
    }
}

/// Serialized as the token sequence; position is the index.
impl Serialize for Vocabulary {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.tokens.iter())
    }
}

impl<'de> Deserialize<'de> for Vocabulary {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tokens = Vec::<String>::deserialize(deserializer)?;
        Vocabulary::from_unique_tokens(tokens).map_err(D::Error::custom)
    }
}

/// Build a vocabulary from `corpus`
///
/// Frequencies are summed over the whole corpus. Tokens below
/// `config.min_frequency` are dropped entirely; the rest are indexed in the
/// order they were first seen.
///
/// # Arguments
/// * `corpus` - documents, in order
/// * `config` - `lowercase` and `min_frequency` apply; `binary` is ignored
///
/// # Returns
/// * `Vocabulary` - or `Error::InvalidMinFrequency` when `min_frequency` is 0
pub fn build_vocabulary<T>(corpus: &[T], config: &VectorizerConfig) -> Result<Vocabulary>
where
    T: AsRef<str>,
{
    config.validate()?;

    let mut freq = TokenFrequency::new();
    for document in corpus {
        for token in tokenize_iter(document.as_ref(), config.lowercase) {
            freq.add_token(&token);
        }
    }
    let distinct = freq.token_num();
    freq.retain_min_count(config.min_frequency as u64);

    let vocabulary = Vocabulary::from_token_frequency(&freq);
    debug!(
        num_documents = corpus.len(),
        distinct_tokens = distinct,
        min_frequency = config.min_frequency,
        vocab_size = vocabulary.len(),
        "Built vocabulary"
    );
    Ok(vocabulary)
}
