//! This crate is a deterministic bag-of-words vectorizer.
//! It turns documents into fixed-width count (or presence) vectors over a
//! learned vocabulary, and maps vectors back to token multisets.
//!
//! ```
//! use bow_vectorizer::{Vectorizer, VectorizerConfig};
//!
//! let mut vec = Vectorizer::new(VectorizerConfig::default());
//! let matrix = vec.fit_transform(&["foo foo", "bar"]).unwrap();
//! assert_eq!(matrix, vec![vec![2, 0], vec![0, 1]]);
//! assert_eq!(vec.inverse_transform(&matrix).unwrap(), vec![vec!["foo", "foo"], vec!["bar"]]);
//! ```

pub mod error;
pub mod vectorizer;

pub use error::{Error, Result};

/// Bag-of-words Vectorizer
/// The top-level struct of this crate.
/// Holds a `VectorizerConfig` and, once fitted, the learned `Vocabulary`.
///
/// Lifecycle:
/// - created unfitted
/// - `fit` learns the vocabulary (a later `fit` replaces it)
/// - `transform` / `inverse_transform` reuse it any number of times
///
/// `Vectorizer<N>` is generic over the vector element type `N`
/// (u8, u16, u32, u64, usize), defaulting to `u32`.
///
/// # Thread Safety
/// No internal locking. Separate instances are independent; a single
/// instance must not be fitted from several threads at once.
pub use vectorizer::Vectorizer;

/// Vectorizer settings
/// - `lowercase` (default true)
/// - `binary` (default false)
/// - `min_frequency` (default 1)
///
/// # Serialization
/// Supported. Missing fields take their defaults.
pub use vectorizer::config::VectorizerConfig;

/// Vocabulary
/// Token <-> index mapping with contiguous indices in first-occurrence order.
///
/// `VocabularySource` is an externally supplied vocabulary, either a
/// token -> index mapping or an ordered token list, normalized into a
/// `Vocabulary` with `Vocabulary::from`.
///
/// # Serialization
/// Supported, as the ordered token sequence.
pub use vectorizer::vocabulary::{build_vocabulary, Vocabulary, VocabularySource};

/// Token Frequency structure
/// Counts token occurrences in first-occurrence order.
/// Used as the base data for vocabulary building.
pub use vectorizer::token::TokenFrequency;

/// Tokenizer
/// Splits text into runs of word characters, optionally lowercased.
pub use vectorizer::tokenizer::{tokenize, tokenize_iter};

/// Document and corpus encoders
pub use vectorizer::encode::{vectorize_corpus, vectorize_document, FeatureMatrix, FeatureVector};

/// Single-call helpers for a corpus or a single text
pub use vectorizer::oneshot::{vectorize, vectorize_text};
