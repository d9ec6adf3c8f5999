use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Vectorizer settings, fixed for the lifetime of a `Vectorizer`.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Lowercase tokens after extraction
    pub lowercase: bool,
    /// Record presence (0/1) instead of counts
    pub binary: bool,
    /// Minimum total corpus frequency for a token to enter the vocabulary
    pub min_frequency: usize,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            binary: false,
            min_frequency: 1,
        }
    }
}

impl VectorizerConfig {
    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn binary(mut self, binary: bool) -> Self {
        self.binary = binary;
        self
    }

    pub fn min_frequency(mut self, min_frequency: usize) -> Self {
        self.min_frequency = min_frequency;
        self
    }

    /// Checked when a vocabulary is built, not at construction.
    pub fn validate(&self) -> Result<()> {
        if self.min_frequency < 1 {
            return Err(Error::InvalidMinFrequency {
                value: self.min_frequency,
            });
        }
        Ok(())
    }
}
