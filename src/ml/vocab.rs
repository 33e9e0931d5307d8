// ============================================================
// Layer 5 - Vocabulary
// ============================================================
// Counts every token in the corpus and keeps those that occur at
// least `min_count` times. Indices are assigned by descending
// count, ties broken alphabetically, so index 0 is the most
// frequent word and the order never depends on hash iteration.
//
// Also owns the noise distribution used for negative sampling:
// P(w) ∝ count(w)^0.75, as in the original Word2Vec papers.

use std::collections::HashMap;

use rand::Rng;

use crate::domain::corpus::Corpus;

const NOISE_POWER: f64 = 0.75;

#[derive(Debug, Clone)]
pub struct Vocabulary {
    words:  Vec<String>,
    counts: Vec<u64>,
    index:  HashMap<String, usize>,
}

impl Vocabulary {
    pub fn build(corpus: &Corpus, min_count: usize) -> Self {
        let mut freq: HashMap<&str, u64> = HashMap::new();
        for sentence in corpus {
            for token in sentence {
                *freq.entry(token.as_str()).or_insert(0) += 1;
            }
        }
        let distinct = freq.len();

        let mut kept: Vec<(&str, u64)> = freq
            .into_iter()
            .filter(|&(_, count)| count >= min_count as u64)
            .collect();
        kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let words: Vec<String> = kept.iter().map(|(w, _)| w.to_string()).collect();
        let counts: Vec<u64> = kept.iter().map(|&(_, c)| c).collect();
        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();

        tracing::info!(
            "Vocabulary: kept {} of {} distinct tokens (min_count={})",
            words.len(),
            distinct,
            min_count
        );

        Self { words, counts, index }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    pub fn count(&self, index: usize) -> u64 {
        self.counts[index]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Map a sentence to vocabulary indices, dropping tokens that
    /// did not make the cut
    pub fn encode(&self, sentence: &[String]) -> Vec<usize> {
        sentence.iter().filter_map(|t| self.index_of(t)).collect()
    }

    pub fn noise_distribution(&self) -> NoiseDistribution {
        NoiseDistribution::new(&self.counts)
    }
}

/// Cumulative count^0.75 weights, sampled by binary search.
#[derive(Debug, Clone)]
pub struct NoiseDistribution {
    cumulative: Vec<f64>,
}

impl NoiseDistribution {
    fn new(counts: &[u64]) -> Self {
        let mut total = 0.0;
        let cumulative = counts
            .iter()
            .map(|&c| {
                total += (c as f64).powf(NOISE_POWER);
                total
            })
            .collect();
        Self { cumulative }
    }

    /// Draw one vocabulary index
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let total = self.cumulative.last().copied().unwrap_or(0.0);
        let r = rng.gen::<f64>() * total;
        self.cumulative
            .partition_point(|&c| c <= r)
            .min(self.cumulative.len().saturating_sub(1))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn corpus(sentences: &[&str]) -> Corpus {
        Corpus::from_sentences(
            sentences
                .iter()
                .map(|s| s.split_whitespace().map(str::to_string).collect())
                .collect(),
        )
    }

    #[test]
    fn test_min_count_filters_rare_tokens() {
        let vocab = Vocabulary::build(&corpus(&["the sea the sea the whale", "ahab"]), 2);
        assert_eq!(vocab.words(), &["the".to_string(), "sea".to_string()]);
        assert_eq!(vocab.index_of("whale"), None);
    }

    #[test]
    fn test_order_is_count_then_alphabetical() {
        let vocab = Vocabulary::build(&corpus(&["b a c a b a"]), 1);
        assert_eq!(vocab.words(), &["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(vocab.count(0), 3);
        assert_eq!(vocab.word(1), "b");
        assert_eq!(vocab.count(2), 1);
    }

    #[test]
    fn test_encode_drops_unknown_tokens() {
        let vocab = Vocabulary::build(&corpus(&["x y x y z"]), 2);
        let sentence: Vec<String> = ["x", "z", "y"].iter().map(|s| s.to_string()).collect();
        assert_eq!(vocab.encode(&sentence), vec![0, 1]);
    }

    #[test]
    fn test_noise_sample_in_range_and_biased_to_frequent() {
        let vocab = Vocabulary::build(&corpus(&["a a a a a a a a a a a a a a a a b"]), 1);
        let noise = vocab.noise_distribution();
        let mut rng = StdRng::seed_from_u64(7);

        let draws: Vec<usize> = (0..1000).map(|_| noise.sample(&mut rng)).collect();
        assert!(draws.iter().all(|&i| i < vocab.len()));

        let frequent = draws.iter().filter(|&&i| i == 0).count();
        assert!(frequent > 700, "expected 'a' to dominate, got {frequent}/1000");
    }
}
