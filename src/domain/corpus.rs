// ============================================================
// Layer 3 - Corpus Domain Type
// ============================================================
// The sole artifact handed to the embedding trainer: an ordered
// list of token sequences, one per retained sentence.
//
// Invariant: every sentence in a Corpus holds at least one token.
// `from_sentences` is the only constructor besides `default()` and
// it drops empties, so an empty sentence can never reach the trainer.

/// Ordered, non-empty token sequences in document/sentence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    sentences: Vec<Vec<String>>,
}

impl Corpus {
    /// Build a corpus from per-sentence token lists, dropping every
    /// empty list and keeping the relative order of the rest.
    pub fn from_sentences(sentences: Vec<Vec<String>>) -> Self {
        Self {
            sentences: sentences.into_iter().filter(|s| !s.is_empty()).collect(),
        }
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total number of tokens across all sentences
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }

    pub fn sentences(&self) -> &[Vec<String>] {
        &self.sentences
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<String>> {
        self.sentences.iter()
    }

    pub fn into_sentences(self) -> Vec<Vec<String>> {
        self.sentences
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Vec<String>;
    type IntoIter = std::slice::Iter<'a, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_from_sentences_drops_empties() {
        let corpus = Corpus::from_sentences(vec![toks(&["a"]), vec![], toks(&["b", "c"])]);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.token_count(), 3);
    }

    #[test]
    fn test_all_empty_gives_empty_corpus() {
        let corpus = Corpus::from_sentences(vec![vec![], vec![]]);
        assert!(corpus.is_empty());
        assert_eq!(corpus, Corpus::default());
    }

    #[test]
    fn test_iteration_keeps_order() {
        let corpus = Corpus::from_sentences(vec![toks(&["sea"]), toks(&["ship", "sea"])]);
        let firsts: Vec<&str> = corpus.iter().map(|s| s[0].as_str()).collect();
        assert_eq!(firsts, vec!["sea", "ship"]);
        assert_eq!(corpus.sentences()[1], toks(&["ship", "sea"]));
    }
}
