// ============================================================
// Layer 2 - CatalogUseCase
// ============================================================
// Lists the novels described by the metadata table, optionally
// filtered by language, and marks which ones actually have a
// file in the corpus directory.

use anyhow::{Context, Result};
use std::{collections::HashSet, path::Path};

use crate::data::{loader::TextDirLoader, metadata::{MetadataTable, NovelRecord}};

/// One catalog line: the record plus whether its file is present
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub record:  NovelRecord,
    pub on_disk: bool,
}

pub struct CatalogUseCase {
    metadata_path: String,
    docs_dir:      String,
}

impl CatalogUseCase {
    pub fn new(metadata_path: impl Into<String>, docs_dir: impl Into<String>) -> Self {
        Self {
            metadata_path: metadata_path.into(),
            docs_dir:      docs_dir.into(),
        }
    }

    pub fn list(&self, language: Option<&str>) -> Result<Vec<CatalogEntry>> {
        let table = MetadataTable::load(Path::new(&self.metadata_path))
            .with_context(|| "Failed to read metadata table")?;

        // A missing corpus directory just means nothing is on disk
        let present: HashSet<String> = TextDirLoader::new(&self.docs_dir)
            .file_paths()
            .map(|paths| {
                paths
                    .iter()
                    .filter_map(|p| p.file_name()?.to_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_else(|e| {
                tracing::warn!("{e}");
                HashSet::new()
            });

        let records: Vec<&NovelRecord> = match language {
            Some(lang) => table.by_language(lang),
            None => table.records().iter().collect(),
        };

        Ok(records
            .into_iter()
            .map(|r| CatalogEntry {
                on_disk: present.contains(&r.filename),
                record:  r.clone(),
            })
            .collect())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_list_filters_and_marks_presence() {
        let dir = tempdir().unwrap();
        let docs = dir.path().join("novels");
        fs::create_dir(&docs).unwrap();
        fs::write(docs.join("moby_dick.txt"), "Call me Ishmael.").unwrap();

        let meta = dir.path().join("metadata.csv");
        fs::write(
            &meta,
            "filename,id,language,year,title,gender,person,tokens\n\
             moby_dick.txt,1,en,1851,Moby-Dick,m,1st,215136\n\
             jane_eyre.txt,2,en,1847,Jane Eyre,f,1st,188000\n\
             candide.txt,3,fr,1759,Candide,m,3rd,30000\n",
        )
        .unwrap();

        let catalog = CatalogUseCase::new(meta.display().to_string(), docs.display().to_string());

        let english = catalog.list(Some("EN")).unwrap();
        assert_eq!(english.len(), 2);
        assert!(english[0].on_disk);
        assert!(!english[1].on_disk);

        assert_eq!(catalog.list(None).unwrap().len(), 3);
    }
}
