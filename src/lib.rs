//! Train Word2Vec embeddings on a directory of novels and explore
//! the resulting vector space.
//!
//! The crate is layered; each layer only depends on the ones below it:
//!
//! 1. `cli`         - argument parsing and printing
//! 2. `application` - use cases wiring the layers together
//! 3. `domain`      - documents, the corpus, traits and errors
//! 4. `data`        - loader, sentence splitter, tokenizer, assembler
//! 5. `ml`          - vocabulary, Word2Vec training, keyed vectors
//! 6. `infra`       - vector file format, model directory, metrics

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
pub mod ml;
