use num::traits::{SaturatingAdd, Unsigned};
use tracing::debug;

use crate::error::Result;
use crate::vectorizer::{
    config::VectorizerConfig,
    tokenizer::tokenize_iter,
    vocabulary::{build_vocabulary, Vocabulary, VocabularySource},
};

/// One slot per vocabulary entry, in index order
pub type FeatureVector<N = u32> = Vec<N>;
/// One `FeatureVector` per document, all the same length
pub type FeatureMatrix<N = u32> = Vec<FeatureVector<N>>;

/// Encode a token sequence against `vocabulary`
///
/// Out-of-vocabulary tokens are skipped. Counts saturate at `N`'s maximum.
///
/// # Arguments
/// * `tokens` - tokens of one document
/// * `vocabulary` - the feature space
/// * `binary` - presence (0/1) instead of counts
///
/// # Returns
/// * `FeatureVector<N>` - length `vocabulary.len()`
///
/// # Examples
/// ```
/// use bow_vectorizer::{vectorize_document, Vocabulary, VocabularySource};
/// let vocab = Vocabulary::from(VocabularySource::from(vec!["foo", "bar"]));
/// let counts: Vec<u32> = vectorize_document(["foo", "bar", "foo", "spam"], &vocab, false);
/// assert_eq!(counts, vec![2, 1]);
/// ```
pub fn vectorize_document<N, I>(tokens: I, vocabulary: &Vocabulary, binary: bool) -> FeatureVector<N>
where
    N: Unsigned + SaturatingAdd + Copy,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut vector = vec![N::zero(); vocabulary.len()];
    for token in tokens {
        let Some(index) = vocabulary.get(token.as_ref()) else {
            continue;
        };
        let slot = &mut vector[index];
        *slot = if binary {
            N::one()
        } else {
            slot.saturating_add(&N::one())
        };
    }
    vector
}

/// Tokenize each document and encode it against `vocabulary`.
pub(crate) fn encode_corpus<N, T>(
    corpus: &[T],
    vocabulary: &Vocabulary,
    lowercase: bool,
    binary: bool,
) -> FeatureMatrix<N>
where
    N: Unsigned + SaturatingAdd + Copy,
    T: AsRef<str>,
{
    corpus
        .iter()
        .map(|document| {
            vectorize_document(tokenize_iter(document.as_ref(), lowercase), vocabulary, binary)
        })
        .collect()
}

/// Encode every document of `corpus`
///
/// With `vocabulary: None` a vocabulary is built from `corpus` using
/// `config.lowercase` and `config.min_frequency`. A supplied vocabulary is
/// normalized and used as-is, with no frequency filtering.
///
/// # Returns
/// * `(FeatureMatrix<N>, Vocabulary)` - row `i` encodes document `i`; the
///   vocabulary is the one actually applied
pub fn vectorize_corpus<N, T>(
    corpus: &[T],
    vocabulary: Option<VocabularySource>,
    config: &VectorizerConfig,
) -> Result<(FeatureMatrix<N>, Vocabulary)>
where
    N: Unsigned + SaturatingAdd + Copy,
    T: AsRef<str>,
{
    let vocabulary = match vocabulary {
        Some(source) => Vocabulary::from(source),
        None => build_vocabulary(corpus, config)?,
    };
    let matrix = encode_corpus(corpus, &vocabulary, config.lowercase, config.binary);
    debug!(
        rows = matrix.len(),
        vocab_size = vocabulary.len(),
        "Vectorized corpus"
    );
    Ok((matrix, vocabulary))
}
