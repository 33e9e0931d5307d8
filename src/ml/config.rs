// ============================================================
// Layer 5 - Word2Vec Configuration
// ============================================================
// Every knob the trainer recognises. Field names follow the
// usual Word2Vec vocabulary:
//
//   vector_size  dimensionality of each embedding
//   window       maximum context radius on each side
//   min_count    tokens seen fewer times are left out of the vocabulary
//   objective    skip-gram (predict context from word) or
//                CBOW (predict word from context)
//   alpha        initial learning rate
//   min_alpha    learning rate reached at the end of training
//   epochs       passes over the corpus
//   batch_words  words processed between learning-rate updates
//   negative     noise words drawn per positive example
//   seed         RNG seed; the same seed and corpus give the same vectors

use serde::{Deserialize, Serialize};

use crate::domain::error::TrainerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Objective {
    SkipGram,
    Cbow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word2VecConfig {
    pub vector_size: usize,
    pub window:      usize,
    pub min_count:   usize,
    pub objective:   Objective,
    pub alpha:       f32,
    pub min_alpha:   f32,
    pub epochs:      usize,
    pub batch_words: usize,
    pub negative:    usize,
    pub seed:        u64,
}

impl Default for Word2VecConfig {
    fn default() -> Self {
        Self {
            vector_size: 100,
            window:      5,
            min_count:   5,
            objective:   Objective::SkipGram,
            alpha:       0.025,
            min_alpha:   0.0001,
            epochs:      5,
            batch_words: 10_000,
            negative:    5,
            seed:        1,
        }
    }
}

impl Word2VecConfig {
    /// Reject configurations the trainer cannot run with.
    pub fn validate(&self) -> Result<(), TrainerError> {
        let positive = [
            ("vector_size", self.vector_size),
            ("window", self.window),
            ("epochs", self.epochs),
            ("batch_words", self.batch_words),
            ("negative", self.negative),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(TrainerError::InvalidConfig(format!("{name} must be greater than 0")));
            }
        }

        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(TrainerError::InvalidConfig(format!(
                "alpha must be a positive number, got {}",
                self.alpha
            )));
        }
        if !(self.min_alpha.is_finite() && self.min_alpha > 0.0 && self.min_alpha <= self.alpha) {
            return Err(TrainerError::InvalidConfig(format!(
                "min_alpha must be in (0, alpha={}], got {}",
                self.alpha, self.min_alpha
            )));
        }
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Word2VecConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_vector_size_rejected() {
        let cfg = Word2VecConfig { vector_size: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(TrainerError::InvalidConfig(msg)) if msg.contains("vector_size")));
    }

    #[test]
    fn test_min_alpha_above_alpha_rejected() {
        let cfg = Word2VecConfig { alpha: 0.01, min_alpha: 0.1, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_objective_serialises_kebab_case() {
        assert_eq!(serde_json::to_string(&Objective::SkipGram).unwrap(), "\"skip-gram\"");
        assert_eq!(serde_json::to_string(&Objective::Cbow).unwrap(), "\"cbow\"");
    }
}
