// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust types and traits describing what the system works
// with: documents, the assembled training corpus, and the seams
// where a concrete splitter, trainer or vector space plugs in.
//
// Rules for this layer:
//   - NO file I/O
//   - NO training maths
//   - Only structs, enums, traits and the error taxonomy
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A novel loaded from disk
pub mod document;

// The ordered collection of non-empty token sequences fed to training
pub mod corpus;

// Core abstractions (traits) that other layers implement
pub mod traits;

// Typed errors for the data, training and vector-file layers
pub mod error;
