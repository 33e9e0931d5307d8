// ============================================================
// Layer 5 - Word2Vec Trainer
// ============================================================
// Single-threaded Word2Vec with negative sampling.
//
// Two ndarray weight matrices, both [vocab, vector_size]:
//   input  - the embeddings we keep (small random init)
//   output - context weights used only during training (zeros)
//
// For every position in every sentence:
//   1. Shrink the window randomly to b ∈ [1, window]
//      (nearer words are sampled more often)
//   2. Skip-gram: the centre word's input vector predicts each
//      context word.
//      CBOW: the mean of the context input vectors predicts
//      the centre word.
//   3. Each prediction is one positive (label 1) and `negative`
//      noise words (label 0) drawn from count^0.75:
//        f = h · out[t]
//        g = (label - σ(f)) · α
//        grad_h += g · out[t]
//        out[t] += g · h
//      then grad_h is added to the input vector(s) that formed h.
//
// The learning rate falls linearly from alpha to min_alpha over
// all epochs and is refreshed every `batch_words` words.
//
// Reference: Mikolov et al. (2013) Distributed Representations of
//            Words and Phrases and their Compositionality

use ndarray::{Array1, Array2};
use ndarray_rand::{rand_distr::Uniform, RandomExt};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::domain::corpus::Corpus;
use crate::domain::error::TrainerError;
use crate::domain::traits::EmbeddingTrainer;
use crate::ml::config::{Objective, Word2VecConfig};
use crate::ml::model::KeyedVectors;
use crate::ml::vocab::{NoiseDistribution, Vocabulary};

/// Summary of one pass over the corpus
#[derive(Debug, Clone, PartialEq)]
pub struct EpochReport {
    pub epoch: usize,
    /// Mean negative log-likelihood per (word, target) example
    pub loss: f64,
    /// Learning rate at the end of the epoch
    pub alpha: f32,
    /// In-vocabulary words processed this epoch
    pub words: u64,
}

pub struct Word2VecTrainer {
    config: Word2VecConfig,
}

impl Word2VecTrainer {
    pub fn new(config: Word2VecConfig) -> Self {
        Self { config }
    }

    /// Train, calling `on_epoch` after every pass over the corpus.
    pub fn train_with_progress<F>(&self, corpus: &Corpus, mut on_epoch: F) -> Result<KeyedVectors, TrainerError>
    where
        F: FnMut(&EpochReport),
    {
        let cfg = &self.config;
        cfg.validate()?;

        let vocab = Vocabulary::build(corpus, cfg.min_count);
        if vocab.is_empty() {
            return Err(TrainerError::EmptyVocabulary { min_count: cfg.min_count });
        }

        let sentences: Vec<Vec<usize>> = corpus
            .iter()
            .map(|s| vocab.encode(s))
            .filter(|s| !s.is_empty())
            .collect();
        let words_per_epoch: u64 = sentences.iter().map(|s| s.len() as u64).sum();

        let mut state = TrainingState::new(&vocab, cfg);
        tracing::info!(
            "Training {:?}: {} sentences, {} words/epoch, vocab={}, dim={}",
            cfg.objective,
            sentences.len(),
            words_per_epoch,
            vocab.len(),
            cfg.vector_size
        );

        let total_words = (words_per_epoch * cfg.epochs as u64).max(1);
        let mut processed = 0u64;
        let mut since_update = 0usize;

        for epoch in 1..=cfg.epochs {
            let mut loss_sum = 0.0f64;
            let mut examples = 0u64;

            for sentence in &sentences {
                for pos in 0..sentence.len() {
                    let reduced = state.rng.gen_range(0..cfg.window);
                    let radius = cfg.window - reduced;
                    let start = pos.saturating_sub(radius);
                    let end = (pos + radius + 1).min(sentence.len());

                    let (loss, n) = match cfg.objective {
                        Objective::SkipGram => state.skip_gram(sentence, pos, start, end),
                        Objective::Cbow => state.cbow(sentence, pos, start, end),
                    };
                    loss_sum += loss;
                    examples += n;

                    processed += 1;
                    since_update += 1;
                    if since_update >= cfg.batch_words {
                        since_update = 0;
                        state.alpha = decayed_alpha(cfg, processed, total_words);
                        tracing::debug!(
                            "epoch {}: {:.1}% of training, alpha={:.6}",
                            epoch,
                            100.0 * processed as f64 / total_words as f64,
                            state.alpha
                        );
                    }
                }
            }

            let report = EpochReport {
                epoch,
                loss: if examples > 0 { loss_sum / examples as f64 } else { 0.0 },
                alpha: state.alpha,
                words: words_per_epoch,
            };
            on_epoch(&report);
        }

        KeyedVectors::new(vocab.into_words(), state.input)
            .map_err(|e| TrainerError::InvalidConfig(e.to_string()))
    }
}

impl EmbeddingTrainer for Word2VecTrainer {
    type Model = KeyedVectors;

    fn train(&self, corpus: &Corpus) -> Result<KeyedVectors, TrainerError> {
        self.train_with_progress(corpus, |_| {})
    }
}

fn decayed_alpha(cfg: &Word2VecConfig, processed: u64, total: u64) -> f32 {
    let progress = (processed as f64 / total as f64).min(1.0) as f32;
    (cfg.alpha - (cfg.alpha - cfg.min_alpha) * progress).max(cfg.min_alpha)
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Weights, scratch buffers and RNG for one training run.
struct TrainingState {
    negative: usize,
    alpha:    f32,
    input:    Array2<f32>,
    output:   Array2<f32>,
    noise:    NoiseDistribution,
    rng:      StdRng,
    hidden:   Array1<f32>,
    grad:     Array1<f32>,
}

impl TrainingState {
    fn new(vocab: &Vocabulary, cfg: &Word2VecConfig) -> Self {
        let dim = cfg.vector_size;
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let half = 0.5 / dim as f32;
        let input = Array2::random_using((vocab.len(), dim), Uniform::new(-half, half), &mut rng);

        Self {
            negative: cfg.negative,
            alpha: cfg.alpha,
            input,
            output: Array2::zeros((vocab.len(), dim)),
            noise: vocab.noise_distribution(),
            rng,
            hidden: Array1::zeros(dim),
            grad: Array1::zeros(dim),
        }
    }

    fn skip_gram(&mut self, sentence: &[usize], pos: usize, start: usize, end: usize) -> (f64, u64) {
        let centre = sentence[pos];
        let mut loss = 0.0;
        let mut n = 0;

        for (offset, &context) in sentence[start..end].iter().enumerate() {
            if start + offset == pos {
                continue;
            }
            self.hidden.assign(&self.input.row(centre));

            loss += self.negative_sampling(context);
            n += 1;

            self.input.row_mut(centre).scaled_add(1.0, &self.grad);
        }
        (loss, n)
    }

    fn cbow(&mut self, sentence: &[usize], pos: usize, start: usize, end: usize) -> (f64, u64) {
        self.hidden.fill(0.0);

        let mut count = 0usize;
        for (offset, &context) in sentence[start..end].iter().enumerate() {
            if start + offset == pos {
                continue;
            }
            self.hidden += &self.input.row(context);
            count += 1;
        }
        if count == 0 {
            return (0.0, 0);
        }
        self.hidden /= count as f32;

        let loss = self.negative_sampling(sentence[pos]);

        for (offset, &context) in sentence[start..end].iter().enumerate() {
            if start + offset == pos {
                continue;
            }
            self.input.row_mut(context).scaled_add(1.0, &self.grad);
        }
        (loss, 1)
    }

    /// One positive and `negative` noise updates of the output weights
    /// against `self.hidden`. Leaves the input gradient in `self.grad`
    /// and returns the example's loss.
    fn negative_sampling(&mut self, target: usize) -> f64 {
        self.grad.fill(0.0);
        let mut loss = 0.0f64;

        for d in 0..=self.negative {
            let (word, label) = if d == 0 {
                (target, 1.0f32)
            } else {
                let sample = self.noise.sample(&mut self.rng);
                if sample == target {
                    continue;
                }
                (sample, 0.0f32)
            };

            let mut out = self.output.row_mut(word);
            let p = sigmoid(self.hidden.dot(&out));
            let g = (label - p) * self.alpha;

            let likelihood = if label > 0.5 { p } else { 1.0 - p };
            loss -= (likelihood.max(1e-7) as f64).ln();

            self.grad.scaled_add(g, &out);
            out.scaled_add(g, &self.hidden);
        }
        loss
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::VectorSpace;

    fn corpus(sentences: &[&str], repeat: usize) -> Corpus {
        let mut all = Vec::new();
        for _ in 0..repeat {
            for s in sentences {
                all.push(s.split_whitespace().map(str::to_string).collect());
            }
        }
        Corpus::from_sentences(all)
    }

    fn small_config(objective: Objective) -> Word2VecConfig {
        Word2VecConfig {
            vector_size: 16,
            window: 2,
            min_count: 1,
            objective,
            epochs: 10,
            batch_words: 50,
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_config_surfaces_as_is() {
        let cfg = Word2VecConfig { window: 0, ..Default::default() };
        let err = Word2VecTrainer::new(cfg).train(&corpus(&["a b"], 1)).unwrap_err();
        assert!(matches!(err, TrainerError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_vocabulary() {
        let cfg = Word2VecConfig { min_count: 10, ..Default::default() };
        let err = Word2VecTrainer::new(cfg).train(&corpus(&["rare words only"], 1)).unwrap_err();
        assert_eq!(err, TrainerError::EmptyVocabulary { min_count: 10 });
    }

    #[test]
    fn test_model_shape() {
        let model = Word2VecTrainer::new(small_config(Objective::SkipGram))
            .train(&corpus(&["the cat sat on the mat"], 5))
            .unwrap();
        assert_eq!(model.vocab_len(), 5);
        assert_eq!(model.dimensions(), 16);
        assert!(model.vector("cat").unwrap().iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_same_seed_same_vectors() {
        let c = corpus(&["the cat sat on the mat", "the dog ate the bone"], 5);
        let a = Word2VecTrainer::new(small_config(Objective::SkipGram)).train(&c).unwrap();
        let b = Word2VecTrainer::new(small_config(Objective::SkipGram)).train(&c).unwrap();
        assert_eq!(a.vector("dog"), b.vector("dog"));

        let other = Word2VecTrainer::new(Word2VecConfig { seed: 99, ..small_config(Objective::SkipGram) })
            .train(&c)
            .unwrap();
        assert_ne!(a.vector("dog"), other.vector("dog"));
    }

    #[test]
    fn test_reports_every_epoch_and_alpha_decays() {
        let mut reports = Vec::new();
        Word2VecTrainer::new(small_config(Objective::Cbow))
            .train_with_progress(&corpus(&["a b c d e f g"], 20), |r| reports.push(r.clone()))
            .unwrap();

        assert_eq!(reports.len(), 10);
        assert_eq!(reports[0].epoch, 1);
        assert_eq!(reports[0].words, 140);
        assert!(reports.iter().all(|r| r.loss.is_finite() && r.loss > 0.0));
        assert!(reports.last().unwrap().alpha < reports[0].alpha);
        assert!(reports.last().unwrap().alpha >= 0.0001);
    }

    #[test]
    fn test_loss_goes_down() {
        let mut reports = Vec::new();
        Word2VecTrainer::new(small_config(Objective::SkipGram))
            .train_with_progress(&corpus(&["the cat sat on the mat", "a dog sat on a rug"], 30), |r| {
                reports.push(r.clone())
            })
            .unwrap();
        assert!(reports.last().unwrap().loss < reports[0].loss);
    }

    #[test]
    fn test_shared_contexts_give_similar_vectors() {
        let c = corpus(
            &[
                "the cat sat on the mat",
                "the dog sat on the mat",
                "stocks rose in the market today",
                "bonds fell in the market today",
            ],
            100,
        );
        for objective in [Objective::SkipGram, Objective::Cbow] {
            let cfg = Word2VecConfig { epochs: 20, ..small_config(objective) };
            let model = Word2VecTrainer::new(cfg).train(&c).unwrap();
            let close = model.similarity("cat", "dog").unwrap();
            let far = model.similarity("cat", "stocks").unwrap();
            assert!(close > far, "{objective:?}: cat~dog {close} should beat cat~stocks {far}");
        }
    }
}
