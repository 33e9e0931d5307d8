// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Workflow coordination only: no tokenizing, no vector maths, no
// printing. Each use case wires loaders, the trainer and the model
// store together for one command.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Corpus → Word2Vec → model directory
pub mod train_use_case;

// Nearest neighbours, analogies, similarity, outliers
pub mod query_use_case;

// Metadata table listing
pub mod catalog_use_case;
