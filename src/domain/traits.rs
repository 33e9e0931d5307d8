// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The seams of the pipeline. The application layer programs
// against these traits, so a different loader, sentence
// detector or embedding library can be dropped in without
// touching the orchestration code:
//
//   DocumentSource   → TextDirLoader (directory of plaintext files)
//   SentenceSplitter → UnicodeSentenceSplitter (UAX #29 boundaries)
//   EmbeddingTrainer → Word2VecTrainer (skip-gram / CBOW)
//   VectorSpace      → KeyedVectors (trained token vectors)
//   Persistable      → KeyedVectors (word2vec text format)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::Path;

use ndarray::ArrayView1;

use crate::domain::corpus::Corpus;
use crate::domain::document::Document;
use crate::domain::error::{CorpusError, TrainerError, VectorsError};

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can load documents from a source.
pub trait DocumentSource {
    /// Load all available documents, one per file. Any failure aborts
    /// the whole load; there is no partial corpus.
    fn load_all(&self) -> Result<Vec<Document>, CorpusError>;
}

// ─── SentenceSplitter ─────────────────────────────────────────────────────────
/// Splits a document into sentence slices, in source order.
pub trait SentenceSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

// ─── EmbeddingTrainer ─────────────────────────────────────────────────────────
/// Turns an assembled corpus into a queryable vector space.
/// Configuration lives on the implementor.
pub trait EmbeddingTrainer {
    type Model: VectorSpace;

    fn train(&self, corpus: &Corpus) -> Result<Self::Model, TrainerError>;
}

// ─── VectorSpace ──────────────────────────────────────────────────────────────
/// The query surface of a trained embedding model.
pub trait VectorSpace {
    /// Dimensionality of every vector
    fn dimensions(&self) -> usize;

    /// Number of tokens with a vector
    fn vocab_len(&self) -> usize;

    /// Raw vector for a token, if it is in the vocabulary
    fn vector(&self, token: &str) -> Option<ArrayView1<'_, f32>>;

    /// Tokens closest to the normalised mean of the positive vectors
    /// minus the negative ones, best first. Query tokens are excluded.
    fn most_similar(
        &self,
        positive: &[&str],
        negative: &[&str],
        topn: usize,
    ) -> Result<Vec<(String, f32)>, VectorsError>;

    /// Tokens closest to an arbitrary query vector, best first
    fn similar_by_vector(&self, vector: &[f32], topn: usize) -> Vec<(String, f32)>;

    /// Cosine similarity between two tokens
    fn similarity(&self, a: &str, b: &str) -> Result<f32, VectorsError>;

    /// The token that fits least with the others
    fn doesnt_match(&self, tokens: &[&str]) -> Result<String, VectorsError>;
}

// ─── Persistable ──────────────────────────────────────────────────────────────
/// Any component whose state can be saved and restored from disk.
pub trait Persistable: Sized {
    fn save(&self, path: &Path) -> Result<(), VectorsError>;

    fn load(path: &Path) -> Result<Self, VectorsError>;
}
