// ============================================================
// Layer 4 - Novel Metadata Table
// ============================================================
// Optional CSV describing the novels in the corpus directory:
//
//   filename,id,language,year,title,gender,person,tokens
//   moby_dick.txt,1,en,1851,Moby-Dick,m,1st,215136
//
// Only the `catalog` command reads it (display and filtering).
// The corpus pipeline never looks at it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::error::CorpusError;

/// One row of the metadata table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NovelRecord {
    pub filename: String,

    pub id: u32,

    pub language: String,

    /// Publication year
    pub year: i32,

    pub title: String,

    /// Author gender as recorded in the table
    #[serde(alias = "author_gender")]
    pub gender: String,

    /// Narrative person, e.g. "1st" or "3rd"
    #[serde(alias = "narrative_person")]
    pub person: String,

    /// Token count as recorded in the table (not recomputed)
    #[serde(alias = "token_count")]
    pub tokens: u64,
}

#[derive(Debug, Clone, Default)]
pub struct MetadataTable {
    records: Vec<NovelRecord>,
}

impl MetadataTable {
    /// Parse a metadata CSV with a header row.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|source| CorpusError::Metadata {
                path: path.to_path_buf(),
                source,
            })?;

        let records = reader
            .deserialize()
            .collect::<Result<Vec<NovelRecord>, _>>()
            .map_err(|source| CorpusError::Metadata {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!("Loaded {} metadata rows from '{}'", records.len(), path.display());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[NovelRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows whose language matches, ignoring ASCII case
    pub fn by_language(&self, language: &str) -> Vec<&NovelRecord> {
        self.records
            .iter()
            .filter(|r| r.language.eq_ignore_ascii_case(language))
            .collect()
    }

    pub fn find_by_filename(&self, filename: &str) -> Option<&NovelRecord> {
        self.records.iter().find(|r| r.filename == filename)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const TABLE: &str = "\
filename,id,language,year,title,gender,person,tokens
moby_dick.txt,1,en,1851,Moby-Dick,m,1st,215136
madame_bovary.txt,2,fr,1857,\"Madame Bovary, moeurs de province\",m,3rd,150000
jane_eyre.txt,3,EN,1847,Jane Eyre,f,1st,188000
";

    #[test]
    fn test_load_and_filter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("metadata.csv");
        fs::write(&path, TABLE).unwrap();

        let table = MetadataTable::load(&path).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.by_language("en").len(), 2);

        let bovary = table.find_by_filename("madame_bovary.txt").unwrap();
        assert_eq!(bovary.title, "Madame Bovary, moeurs de province");
        assert_eq!(bovary.year, 1857);
    }

    #[test]
    fn test_long_column_names_are_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("metadata.csv");
        fs::write(
            &path,
            "filename,id,language,year,title,author_gender,narrative_person,token_count\n\
             a.txt,7,de,1900,Titel,f,3rd,42\n",
        )
        .unwrap();

        let table = MetadataTable::load(&path).unwrap();
        assert_eq!(table.records()[0].tokens, 42);
        assert_eq!(table.records()[0].person, "3rd");
    }

    #[test]
    fn test_bad_row_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("metadata.csv");
        fs::write(&path, "filename,id,language,year,title,gender,person,tokens\nx.txt,notanumber,en,1,t,m,1st,1\n").unwrap();

        let err = MetadataTable::load(&path).unwrap_err();
        assert!(matches!(err, CorpusError::Metadata { .. }));
    }
}
