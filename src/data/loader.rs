// ============================================================
// Layer 4 - Document Loader
// ============================================================
// Reads a directory of plaintext novels, one Document per file.
//
// Behaviour:
//   - Every regular file in the directory is loaded; subdirectories
//     are skipped. An optional extension filter narrows this down.
//   - Filenames are sorted before reading so the corpus order is
//     the same on every platform (read_dir order is unspecified).
//   - Each file is read fully and closed before the next is opened.
//   - A missing directory, an unreadable file or a file that is not
//     valid UTF-8 aborts the whole load. There is no skip-and-continue.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::document::Document;
use crate::domain::error::CorpusError;
use crate::domain::traits::DocumentSource;

/// Loads all text files from a given directory.
/// Implements the DocumentSource trait from Layer 3.
pub struct TextDirLoader {
    /// Path to the directory containing one novel per file
    dir: PathBuf,

    /// Only load files with this extension (without the dot), if set
    extension: Option<String>,
}

impl TextDirLoader {
    /// Create a new TextDirLoader pointed at a directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir:       dir.into(),
            extension: None,
        }
    }

    /// Restrict loading to files ending in `.{ext}`
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        let ext = ext.into();
        self.extension = Some(ext.trim_start_matches('.').to_string());
        self
    }

    /// Sorted list of the file paths this loader would read
    pub fn file_paths(&self) -> Result<Vec<PathBuf>, CorpusError> {
        let entries = fs::read_dir(&self.dir).map_err(|source| CorpusError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| CorpusError::Io {
                path: self.dir.clone(),
                source,
            })?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            if let Some(ext) = &self.extension {
                if path.extension().and_then(|e| e.to_str()) != Some(ext.as_str()) {
                    continue;
                }
            }
            paths.push(path);
        }

        paths.sort();
        Ok(paths)
    }
}

impl DocumentSource for TextDirLoader {
    fn load_all(&self) -> Result<Vec<Document>, CorpusError> {
        let paths = self.file_paths()?;
        let mut docs = Vec::with_capacity(paths.len());

        for path in &paths {
            let doc = load_single_text(path)?;
            tracing::debug!("Loaded: {} ({} chars)", doc.source, doc.text.len());
            docs.push(doc);
        }

        tracing::info!(
            "Loaded {} documents from '{}'",
            docs.len(),
            self.dir.display()
        );
        Ok(docs)
    }
}

/// Read one file as UTF-8 text.
fn load_single_text(path: &Path) -> Result<Document, CorpusError> {
    let bytes = fs::read(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|source| CorpusError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(Document::new(source, text))
}
