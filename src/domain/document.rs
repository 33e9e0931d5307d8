// ============================================================
// Layer 3 - Document Domain Type
// ============================================================
// One novel's full text plus the file it came from.
// Created by the loader, consumed by the corpus pipeline and
// dropped once its sentences have been tokenized.

use serde::{Deserialize, Serialize};

/// A raw document loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The filename, kept so log lines can say which novel is being processed
    pub source: String,

    /// The full text content, exactly as decoded from the file
    pub text: String,
}

impl Document {
    /// Create a new Document with a source name and text content.
    ///
    /// Example:
    ///   let doc = Document::new("moby_dick.txt", "Call me Ishmael.");
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }
}
