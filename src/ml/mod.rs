// ============================================================
// Layer 5 - ML / Embedding Layer
// ============================================================
// Everything that knows about vectors lives here. The rest of the
// crate only sees the EmbeddingTrainer and VectorSpace traits
// from the domain layer.
//
//   config.rs  - Word2VecConfig and its validation
//   vocab.rs   - token counts, min_count cut, noise distribution
//   trainer.rs - skip-gram / CBOW with negative sampling
//   model.rs   - KeyedVectors: lookup, nearest neighbours,
//                analogies and odd-one-out
//
// Reference: Mikolov et al. (2013) Efficient Estimation of Word
//            Representations in Vector Space

/// Training hyperparameters
pub mod config;

/// Vocabulary construction
pub mod vocab;

/// The training loop
pub mod trainer;

/// Trained vectors and their queries
pub mod model;
