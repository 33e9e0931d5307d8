// ============================================================
// Layer 2 - TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load the novels           (Layer 4 - data)
//   Step 2: Split, tokenize, assemble (Layer 4 - data)
//   Step 3: Save config               (Layer 6 - infra)
//   Step 4: Train Word2Vec            (Layer 5 - ml)
//   Step 5: Save the vectors          (Layer 6 - infra)
//
// Everything is passed along as values; documents are dropped
// as soon as the corpus is assembled.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{assembler::build_corpus, loader::TextDirLoader, splitter::UnicodeSentenceSplitter};
use crate::domain::traits::{DocumentSource, VectorSpace};
use crate::infra::{
    metrics::{EpochMetrics, MetricsLogger},
    model_store::ModelStore,
};
use crate::ml::{config::Word2VecConfig, trainer::Word2VecTrainer};

// ─── Training Configuration ──────────────────────────────────────────────────
// Everything a training run needs. Saved next to the vectors as
// train_config.json so a model directory documents itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub docs_dir:  String,
    pub model_dir: String,
    /// Only read files with this extension; None reads every file
    pub extension: Option<String>,
    pub word2vec:  Word2VecConfig,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            docs_dir:  "data/novels".to_string(),
            model_dir: "model".to_string(),
            extension: None,
            word2vec:  Word2VecConfig::default(),
        }
    }
}

/// What a finished run produced
#[derive(Debug, Clone, PartialEq)]
pub struct TrainSummary {
    pub documents:  usize,
    pub sentences:  usize,
    pub tokens:     usize,
    pub vocab_size: usize,
    pub final_loss: Option<f64>,
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full training pipeline end to end
    pub fn execute(&self) -> Result<TrainSummary> {
        let cfg = &self.config;

        // ── Step 1: Load every novel ──────────────────────────────────────────
        tracing::info!("Loading novels from '{}'", cfg.docs_dir);
        let mut loader = TextDirLoader::new(&cfg.docs_dir);
        if let Some(ext) = &cfg.extension {
            loader = loader.with_extension(ext);
        }
        let docs = loader
            .load_all()
            .with_context(|| format!("Failed to load corpus from '{}'", cfg.docs_dir))?;
        let documents = docs.len();

        // ── Step 2: Sentences → tokens → corpus ───────────────────────────────
        let corpus = build_corpus(docs, &UnicodeSentenceSplitter::new());

        // ── Step 3: Record the configuration ──────────────────────────────────
        let store = ModelStore::new(&cfg.model_dir);
        store.save_config(cfg)?;
        let metrics = MetricsLogger::new(store.dir())?;

        // ── Step 4: Train ─────────────────────────────────────────────────────
        let epochs = cfg.word2vec.epochs;
        let mut best_loss = f64::INFINITY;
        let mut final_loss = None;
        let mut log_error = None;

        let trainer = Word2VecTrainer::new(cfg.word2vec.clone());
        let vectors = trainer.train_with_progress(&corpus, |report| {
            let m = EpochMetrics::from(report);
            println!(
                "Epoch {:>3}/{} | loss={:.4}{} | alpha={:.6} | words={}",
                m.epoch,
                epochs,
                m.loss,
                if m.is_improvement(best_loss) { "" } else { " (no improvement)" },
                m.alpha,
                m.words,
            );
            best_loss = best_loss.min(m.loss);
            final_loss = Some(m.loss);

            if let Err(e) = metrics.log(&m) {
                log_error.get_or_insert(e);
            }
        })?;

        if let Some(e) = log_error {
            return Err(e.context("Failed to write training metrics"));
        }

        // ── Step 5: Persist ───────────────────────────────────────────────────
        store.save_vectors(&vectors)?;

        tracing::info!("Training complete!");
        Ok(TrainSummary {
            documents,
            sentences: corpus.len(),
            tokens: corpus.token_count(),
            vocab_size: vectors.vocab_len(),
            final_loss,
        })
    }
}
