// ============================================================
// Layer 6 - Metrics Logger
// ============================================================
// Appends one CSV row per training epoch:
//
//   epoch,loss,alpha,words
//   1,4.102311,0.020040,215136
//   2,2.874520,0.015060,215136
//   ...
//
//   loss   mean negative-sampling loss per example; should fall
//   alpha  learning rate at the end of the epoch
//   words  in-vocabulary words processed in the epoch
//
// Output file: <model dir>/metrics.csv. The header is written
// only when the file is new, so repeated runs append.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use crate::ml::trainer::EpochReport;

/// One row of metrics data for a single training epoch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochMetrics {
    pub epoch: usize,
    pub loss:  f64,
    pub alpha: f32,
    pub words: u64,
}

impl EpochMetrics {
    /// True if this epoch's loss beats the best seen so far
    pub fn is_improvement(&self, best_loss: f64) -> bool {
        self.loss < best_loss
    }
}

impl From<&EpochReport> for EpochMetrics {
    fn from(r: &EpochReport) -> Self {
        Self {
            epoch: r.epoch,
            loss:  r.loss,
            alpha: r.alpha,
            words: r.words,
        }
    }
}

pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let csv_path = dir.join("metrics.csv");
        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "epoch,loss,alpha,words")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    pub fn log(&self, m: &EpochMetrics) -> Result<()> {
        let mut f = OpenOptions::new().append(true).open(&self.csv_path)?;

        writeln!(f, "{},{:.6},{:.6},{}", m.epoch, m.loss, m.alpha, m.words)?;

        tracing::debug!("Logged epoch {} metrics: loss={:.4}", m.epoch, m.loss);
        Ok(())
    }

    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}
