//! Single-call entry points.
//!
//! `vectorize` takes a corpus and returns a matrix; `vectorize_text` takes
//! one document and returns a flat vector. A one-document corpus handed to
//! `vectorize` still gets a one-row matrix back.

use crate::error::Result;
use crate::vectorizer::{
    config::VectorizerConfig,
    encode::{FeatureMatrix, FeatureVector},
    vocabulary::{Vocabulary, VocabularySource},
    Vectorizer,
};

/// Vectorize `corpus` in one call
///
/// Without a vocabulary a fresh `Vectorizer` is fitted on `corpus` and
/// applied to it. With one, fitting is skipped and the supplied vocabulary
/// is used as-is.
///
/// # Returns
/// * `(FeatureMatrix, Vocabulary)` - the matrix and the vocabulary used
pub fn vectorize<T>(
    corpus: &[T],
    vocabulary: Option<VocabularySource>,
    config: VectorizerConfig,
) -> Result<(FeatureMatrix, Vocabulary)>
where
    T: AsRef<str>,
{
    let mut vec = match vocabulary {
        Some(source) => Vectorizer::from_vocabulary(config, source),
        None => {
            let mut vec = Vectorizer::new(config);
            vec.fit(corpus)?;
            vec
        }
    };
    let matrix = vec.transform(corpus)?;
    let vocabulary = vec.vocabulary.take().unwrap_or_default();
    Ok((matrix, vocabulary))
}

/// Vectorize a single document in one call
///
/// # Examples
/// ```
/// use bow_vectorizer::{vectorize_text, VectorizerConfig};
/// let (vector, vocab) = vectorize_text("foo bar foo", None, VectorizerConfig::default()).unwrap();
/// assert_eq!(vector, vec![2, 1]);
/// assert_eq!(vocab.tokens().collect::<Vec<_>>(), vec!["foo", "bar"]);
/// ```
pub fn vectorize_text(
    text: &str,
    vocabulary: Option<VocabularySource>,
    config: VectorizerConfig,
) -> Result<(FeatureVector, Vocabulary)> {
    let (matrix, vocabulary) = vectorize(&[text], vocabulary, config)?;
    let vector = matrix.into_iter().next().unwrap_or_default();
    Ok((vector, vocabulary))
}
