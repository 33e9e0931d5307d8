// ============================================================
// Layer 6 - Model Store
// ============================================================
// Owns the on-disk layout of a trained model:
//
//   <model dir>/
//     vectors.txt         ← word2vec text format (see vectors_file.rs)
//     train_config.json   ← the TrainConfig the vectors came from
//     metrics.csv         ← per-epoch training metrics (metrics.rs)
//
// The config is saved before training starts so a failed run
// still leaves a record of what was attempted.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::application::train_use_case::TrainConfig;
use crate::domain::traits::Persistable;
use crate::ml::model::KeyedVectors;

const VECTORS_FILE: &str = "vectors.txt";
const CONFIG_FILE: &str = "train_config.json";

pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    /// Point at a model directory. Nothing is created until a save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    pub fn vectors_path(&self) -> PathBuf {
        self.dir.join(VECTORS_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create model directory '{}'", self.dir.display()))
    }

    pub fn save_vectors(&self, vectors: &KeyedVectors) -> Result<()> {
        self.ensure_dir()?;
        vectors
            .save(&self.vectors_path())
            .with_context(|| "Failed to save trained vectors")
    }

    pub fn load_vectors(&self) -> Result<KeyedVectors> {
        KeyedVectors::load(&self.vectors_path()).with_context(|| {
            format!(
                "Cannot load vectors from '{}'. Have you run 'train' first?",
                self.dir.display()
            )
        })
    }

    pub fn save_config(&self, cfg: &TrainConfig) -> Result<()> {
        self.ensure_dir()?;
        let path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved training config to '{}'", path.display());
        Ok(())
    }

    pub fn load_config(&self) -> Result<TrainConfig> {
        let path = self.dir.join(CONFIG_FILE);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Malformed config in '{}'", path.display()))
    }
}
