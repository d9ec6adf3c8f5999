pub mod config;
pub mod encode;
pub mod oneshot;
pub mod token;
pub mod tokenizer;
pub mod vocabulary;

use std::marker::PhantomData;

use num::traits::{SaturatingAdd, ToPrimitive, Unsigned};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::vectorizer::{
    config::VectorizerConfig,
    encode::{encode_corpus, FeatureMatrix},
    vocabulary::{build_vocabulary, Vocabulary, VocabularySource},
};

/// Bag-of-words vectorizer with a fit / transform lifecycle.
///
/// `N` is the element type of the produced vectors (default `u32`).
///
/// A fresh instance is unfitted. `fit` learns a vocabulary and every later
/// `fit` replaces it. `transform`, `inverse_transform` and `vocabulary`
/// return `Error::NotFitted` until then.
#[derive(Debug, Clone)]
pub struct Vectorizer<N = u32> {
    config: VectorizerConfig,
    vocabulary: Option<Vocabulary>,
    _marker: PhantomData<N>,
}

impl Vectorizer {
    /// Unfitted vectorizer producing `u32` vectors
    pub fn new(config: VectorizerConfig) -> Self {
        Self::with_config(config)
    }

    /// Fitted vectorizer over an externally supplied vocabulary
    pub fn from_vocabulary(config: VectorizerConfig, vocabulary: impl Into<VocabularySource>) -> Self {
        Self::with_vocabulary(config, vocabulary)
    }
}

impl Default for Vectorizer {
    fn default() -> Self {
        Self::new(VectorizerConfig::default())
    }
}

impl<N> Vectorizer<N>
where
    N: Unsigned + SaturatingAdd + ToPrimitive + Copy,
{
    /// Unfitted vectorizer for any element type
    pub fn with_config(config: VectorizerConfig) -> Self {
        Self {
            config,
            vocabulary: None,
            _marker: PhantomData,
        }
    }

    /// Fitted vectorizer for any element type.
    /// The vocabulary is used as-is; no frequency filtering applies.
    pub fn with_vocabulary(config: VectorizerConfig, vocabulary: impl Into<VocabularySource>) -> Self {
        Self {
            config,
            vocabulary: Some(Vocabulary::from(vocabulary.into())),
            _marker: PhantomData,
        }
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    pub fn is_fitted(&self) -> bool {
        self.vocabulary.is_some()
    }

    /// Learn the vocabulary of `corpus`, replacing any previous one.
    /// On error the previous state is kept.
    pub fn fit<T>(&mut self, corpus: &[T]) -> Result<&mut Self>
    where
        T: AsRef<str>,
    {
        let vocabulary = build_vocabulary(corpus, &self.config)?;
        debug!(
            num_documents = corpus.len(),
            vocab_size = vocabulary.len(),
            refit = self.is_fitted(),
            "Fitted Vectorizer"
        );
        self.vocabulary = Some(vocabulary);
        Ok(self)
    }

    /// `fit` followed by `transform` on the same corpus
    pub fn fit_transform<T>(&mut self, corpus: &[T]) -> Result<FeatureMatrix<N>>
    where
        T: AsRef<str>,
    {
        self.fit(corpus)?.transform(corpus)
    }

    /// Encode each document against the learned vocabulary
    pub fn transform<T>(&self, corpus: &[T]) -> Result<FeatureMatrix<N>>
    where
        T: AsRef<str>,
    {
        let vocabulary = self.fitted_vocabulary()?;
        trace!(num_documents = corpus.len(), "Transforming corpus");
        Ok(encode_corpus(
            corpus,
            vocabulary,
            self.config.lowercase,
            self.config.binary,
        ))
    }

    /// Map each row back to the tokens it counts
    ///
    /// Tokens come out in vocabulary index order, not document order.
    /// In binary mode a nonzero slot yields its token once; otherwise the
    /// token is repeated `count` times.
    ///
    /// # Arguments
    /// * `matrix` - rows of length `vocabulary.len()`
    ///
    /// # Returns
    /// * `Vec<Vec<String>>` - one token list per row, or
    ///   `Error::RowLengthMismatch` naming the first bad row
    pub fn inverse_transform<R>(&self, matrix: &[R]) -> Result<Vec<Vec<String>>>
    where
        R: AsRef<[N]>,
    {
        let vocabulary = self.fitted_vocabulary()?;
        trace!(rows = matrix.len(), "Inverse transforming matrix");

        let mut inverse = Vec::with_capacity(matrix.len());
        for (row_idx, row) in matrix.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != vocabulary.len() {
                return Err(Error::RowLengthMismatch {
                    row: row_idx,
                    expected: vocabulary.len(),
                    actual: row.len(),
                });
            }
            let mut tokens = Vec::new();
            for (count, token) in row.iter().zip(vocabulary.tokens()) {
                if count.is_zero() {
                    continue;
                }
                let repeat = if self.config.binary {
                    1
                } else {
                    count.to_usize().unwrap_or(usize::MAX)
                };
                tokens.extend(std::iter::repeat(token).take(repeat).map(str::to_string));
            }
            inverse.push(tokens);
        }
        Ok(inverse)
    }

    /// The learned vocabulary.
    /// Clone it for an owned copy; the instance is never affected.
    pub fn vocabulary(&self) -> Result<&Vocabulary> {
        self.fitted_vocabulary()
    }

    /// Width of every produced vector
    pub fn num_features(&self) -> Result<usize> {
        Ok(self.fitted_vocabulary()?.len())
    }

    /// Tokens in feature index order
    pub fn feature_names(&self) -> Result<Vec<&str>> {
        Ok(self.fitted_vocabulary()?.tokens().collect())
    }

    #[inline]
    fn fitted_vocabulary(&self) -> Result<&Vocabulary> {
        self.vocabulary.as_ref().ok_or(Error::NotFitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_transform_and_inverse_round_trip() {
        let mut vec: Vectorizer = Vectorizer::default();
        let matrix = vec.fit_transform(&["foo foo", "bar"]).unwrap();
        assert_eq!(matrix, vec![vec![2, 0], vec![0, 1]]);
        assert_eq!(
            vec.inverse_transform(&matrix).unwrap(),
            vec![vec!["foo", "foo"], vec!["bar"]]
        );
    }

    #[test]
    fn fit_returns_self_for_chaining() {
        let mut vec: Vectorizer = Vectorizer::default();
        let matrix = vec.fit(&["a b"]).unwrap().transform(&["b b c"]).unwrap();
        assert_eq!(matrix, vec![vec![0, 2]]);
    }

    #[test]
    fn unfitted_use_is_rejected() {
        let vec: Vectorizer = Vectorizer::default();
        assert!(!vec.is_fitted());
        assert_eq!(vec.transform(&["foo"]), Err(Error::NotFitted));
        assert_eq!(vec.inverse_transform(&[vec![1u32]]), Err(Error::NotFitted));
        assert_eq!(vec.vocabulary(), Err(Error::NotFitted));
        assert_eq!(vec.num_features(), Err(Error::NotFitted));
    }

    #[test]
    fn refit_replaces_vocabulary() {
        let mut vec: Vectorizer = Vectorizer::default();
        vec.fit(&["one two"]).unwrap();
        vec.fit(&["three"]).unwrap();
        assert_eq!(vec.feature_names().unwrap(), vec!["three"]);
        assert_eq!(vec.transform(&["one three"]).unwrap(), vec![vec![1]]);
    }

    #[test]
    fn failed_fit_leaves_instance_unfitted() {
        let mut vec = Vectorizer::new(VectorizerConfig::default().min_frequency(0));
        assert_eq!(
            vec.fit(&["foo"]).map(|_| ()),
            Err(Error::InvalidMinFrequency { value: 0 })
        );
        assert!(!vec.is_fitted());
    }

    #[test]
    fn row_length_mismatch() {
        let mut vec: Vectorizer = Vectorizer::default();
        vec.fit(&["a b c"]).unwrap();
        let result = vec.inverse_transform(&[vec![1, 1, 1], vec![1, 1]]);
        assert_eq!(
            result,
            Err(Error::RowLengthMismatch {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn binary_inverse_emits_each_token_once() {
        let mut vec = Vectorizer::new(VectorizerConfig::default().binary(true));
        vec.fit(&["x y"]).unwrap();
        assert_eq!(
            vec.inverse_transform(&[[3u32, 1]]).unwrap(),
            vec![vec!["x", "y"]]
        );
    }

    #[test]
    fn inverse_orders_by_vocabulary_index() {
        let mut vec: Vectorizer = Vectorizer::default();
        let matrix = vec.fit_transform(&["b a", "a b b"]).unwrap();
        assert_eq!(
            vec.inverse_transform(&matrix).unwrap(),
            vec![vec!["b", "a"], vec!["b", "b", "a"]]
        );
    }

    #[test]
    fn vocabulary_copies_do_not_leak_back() {
        let mut vec: Vectorizer = Vectorizer::default();
        vec.fit(&["foo bar"]).unwrap();
        let mut owned = vec.vocabulary().unwrap().to_index_map();
        owned.insert("new".to_string(), 2);
        assert!(!vec.vocabulary().unwrap().contains("new"));
        assert_eq!(vec.num_features(), Ok(2));
    }

    #[test]
    fn supplied_vocabulary_is_fitted() {
        let vec = Vectorizer::from_vocabulary(VectorizerConfig::default(), vec!["bar", "foo"]);
        assert!(vec.is_fitted());
        assert_eq!(vec.transform(&["foo bar foo"]).unwrap(), vec![vec![1, 2]]);
    }

    #[test]
    fn case_preserving_config() {
        let mut vec = Vectorizer::new(VectorizerConfig::default().lowercase(false));
        let matrix = vec.fit_transform(&["Foo foo"]).unwrap();
        assert_eq!(matrix, vec![vec![1, 1]]);
        assert_eq!(vec.feature_names().unwrap(), vec!["Foo", "foo"]);
    }

    #[test]
    fn narrow_element_type() {
        let mut vec: Vectorizer<u8> = Vectorizer::with_config(VectorizerConfig::default());
        let matrix = vec.fit_transform(&["a a b"]).unwrap();
        assert_eq!(matrix, vec![vec![2u8, 1]]);
        assert_eq!(vec.inverse_transform(&matrix).unwrap(), vec![vec!["a", "a", "b"]]);
    }

    mod round_trip_proptest {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashMap;

        fn multiset<'a>(tokens: impl IntoIterator<Item = &'a String>) -> HashMap<&'a str, usize> {
            let mut counts = HashMap::new();
            for token in tokens {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }
            counts
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn inverse_recovers_in_vocabulary_multiset(
                train in prop::collection::vec("[a-eA-E ,.]{0,16}", 0..6),
                docs in prop::collection::vec("[a-fA-F ,.]{0,16}", 0..6),
                min_frequency in 1usize..4,
                lowercase in any::<bool>(),
            ) {
                let config = VectorizerConfig::default()
                    .min_frequency(min_frequency)
                    .lowercase(lowercase);
                let mut vec = Vectorizer::new(config);
                vec.fit(&train).unwrap();

                let matrix = vec.transform(&docs).unwrap();
                let inverse = vec.inverse_transform(&matrix).unwrap();
                let vocab = vec.vocabulary().unwrap();

                prop_assert_eq!(inverse.len(), docs.len());
                for (doc, recovered) in docs.iter().zip(&inverse) {
                    let expected: Vec<String> = crate::tokenize(doc, lowercase)
                        .into_iter()
                        .filter(|t| vocab.contains(t))
                        .collect();
                    prop_assert_eq!(multiset(recovered), multiset(&expected));
                }
            }

            #[test]
            fn fit_transform_matches_fit_then_transform(
                corpus in prop::collection::vec("[a-d ]{0,12}", 0..6),
                binary in any::<bool>(),
                min_frequency in 1usize..3,
            ) {
                let config = VectorizerConfig::default()
                    .binary(binary)
                    .min_frequency(min_frequency);

                let mut combined = Vectorizer::new(config);
                let a = combined.fit_transform(&corpus).unwrap();

                let mut separate = Vectorizer::new(config);
                separate.fit(&corpus).unwrap();
                let b = separate.transform(&corpus).unwrap();

                prop_assert_eq!(a, b);
                prop_assert_eq!(combined.vocabulary().unwrap(), separate.vocabulary().unwrap());
            }
        }
    }
}
