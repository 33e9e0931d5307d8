// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Persistence that several layers share:
//
//   vectors_file.rs - word2vec text format reader/writer; gives
//                     KeyedVectors its Persistable impl
//
//   model_store.rs  - the model directory layout: vectors plus
//                     the TrainConfig JSON they were trained with
//
//   metrics.rs      - per-epoch training metrics appended to CSV
//
// Reference: Rust Book §9 (Error Handling with anyhow)

/// Word2vec text format
pub mod vectors_file;

/// Model directory (vectors + config)
pub mod model_store;

/// Training metrics CSV logger
pub mod metrics;
