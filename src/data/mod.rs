// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything from a directory of novels to the Corpus that the
// embedding trainer consumes.
//
//   novel files
//       │
//       ▼
//   TextDirLoader            → one Document per file
//       │
//       ▼
//   Preprocessor             → joins hard-wrapped lines
//       │
//       ▼
//   UnicodeSentenceSplitter  → sentence slices
//       │
//       ▼
//   tokenize                 → lowercase, punctuation-free words
//       │
//       ▼
//   assemble                 → Corpus (no empty sentences)
//
// Each module does exactly one step so each can be tested alone.

/// Reads a directory of plaintext novels
pub mod loader;

/// Joins wrapped lines before sentence splitting
pub mod preprocessor;

/// UAX #29 sentence boundaries
pub mod splitter;

/// Lowercase / strip punctuation / split on whitespace
pub mod tokenizer;

/// Drops empty sentences and drives the whole pipeline
pub mod assembler;

/// Optional CSV describing the novels
pub mod metadata;
