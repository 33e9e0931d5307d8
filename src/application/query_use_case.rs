// ============================================================
// Layer 2 - QueryUseCase
// ============================================================
// Loads trained vectors once and answers questions about them:
//
//   similar     nearest neighbours / analogies
//               ("king" + "woman" - "man")
//   similarity  cosine similarity of two words
//   outlier     the word that does not belong in a list
//
// Query words go through the same tokenizer as the corpus, so
// "Ishmael," on the command line looks up "ishmael".

use anyhow::{Context, Result};

use crate::data::tokenizer::tokenize;
use crate::domain::traits::VectorSpace;
use crate::infra::model_store::ModelStore;
use crate::ml::model::KeyedVectors;

pub struct QueryUseCase<V: VectorSpace = KeyedVectors> {
    vectors: V,
}

impl QueryUseCase<KeyedVectors> {
    /// Load the vectors saved in a model directory
    pub fn open(model_dir: &str) -> Result<Self> {
        let vectors = ModelStore::new(model_dir).load_vectors()?;
        Ok(Self::new(vectors))
    }
}

impl<V: VectorSpace> QueryUseCase<V> {
    pub fn new(vectors: V) -> Self {
        Self { vectors }
    }

    pub fn similar(&self, positive: &[String], negative: &[String], topn: usize) -> Result<Vec<(String, f32)>> {
        let positive = normalise(positive);
        let negative = normalise(negative);

        self.vectors
            .most_similar(&as_strs(&positive), &as_strs(&negative), topn)
            .with_context(|| format!("Similarity query failed (+{positive:?} -{negative:?})"))
    }

    pub fn similarity(&self, a: &str, b: &str) -> Result<f32> {
        let a = normalise_one(a)?;
        let b = normalise_one(b)?;
        Ok(self.vectors.similarity(&a, &b)?)
    }

    pub fn outlier(&self, words: &[String]) -> Result<String> {
        let words = normalise(words);
        self.vectors
            .doesnt_match(&as_strs(&words))
            .with_context(|| format!("Cannot pick an outlier from {words:?}"))
    }
}

/// Tokenize every query word and flatten the result
fn normalise(words: &[String]) -> Vec<String> {
    words.iter().flat_map(|w| tokenize(w)).collect()
}

/// A query word must tokenize to exactly one token
fn normalise_one(word: &str) -> Result<String> {
    let mut tokens = tokenize(word);
    match tokens.len() {
        1 => Ok(tokens.remove(0)),
        0 => anyhow::bail!("'{word}' contains no word characters"),
        _ => anyhow::bail!("'{word}' is more than one word: {tokens:?}"),
    }
}

fn as_strs(words: &[String]) -> Vec<&str> {
    words.iter().map(String::as_str).collect()
}
