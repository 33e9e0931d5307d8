// ============================================================
// Layer 4 - Corpus Assembler
// ============================================================
// Runs the full text pipeline and produces the Corpus that is
// handed to the embedding trainer:
//
//   Document ─► Preprocessor ─► SentenceSplitter ─► tokenize ─► assemble
//
// Documents are consumed one at a time and dropped as soon as
// their sentences are tokenized. Empty token sequences are removed
// and the order of everything else is kept; no deduplication and
// no minimum length beyond "at least one token".

use crate::data::{preprocessor::Preprocessor, tokenizer::tokenize};
use crate::domain::{corpus::Corpus, document::Document, traits::SentenceSplitter};

/// Drop every empty token sequence, keeping the order of the rest.
pub fn assemble(sentences: Vec<Vec<String>>) -> Corpus {
    Corpus::from_sentences(sentences)
}

/// Split, tokenize and assemble every document into one Corpus.
pub fn build_corpus<S: SentenceSplitter>(docs: Vec<Document>, splitter: &S) -> Corpus {
    let preprocessor = Preprocessor::new();
    let mut token_lists: Vec<Vec<String>> = Vec::new();

    for doc in docs {
        let text = preprocessor.unwrap(&doc.text);
        let before = token_lists.len();

        token_lists.extend(splitter.split(&text).into_iter().map(tokenize));

        tracing::debug!(
            "{}: {} sentences",
            doc.source,
            token_lists.len() - before
        );
    }

    let corpus = assemble(token_lists);
    tracing::info!(
        "Assembled corpus: {} sentences, {} tokens",
        corpus.len(),
        corpus.token_count()
    );
    corpus
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::splitter::UnicodeSentenceSplitter;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_assemble_drops_empties_and_keeps_order() {
        let input = vec![toks(&["a"]), vec![], toks(&["b", "c"]), vec![]];
        let corpus = assemble(input);
        assert_eq!(corpus.into_sentences(), vec![toks(&["a"]), toks(&["b", "c"])]);
    }

    #[test]
    fn test_assemble_keeps_duplicates() {
        let input = vec![toks(&["sea"]), toks(&["sea"])];
        assert_eq!(assemble(input).len(), 2);
    }

    #[test]
    fn test_end_to_end_two_sentences() {
        let docs = vec![Document::new("moby.txt", "Call me Ishmael. I love the sea!")];
        let corpus = build_corpus(docs, &UnicodeSentenceSplitter::new());
        assert_eq!(
            corpus.into_sentences(),
            vec![toks(&["call", "me", "ishmael"]), toks(&["i", "love", "the", "sea"])]
        );
    }

    #[test]
    fn test_documents_stay_in_order() {
        let docs = vec![
            Document::new("a.txt", "First novel."),
            Document::new("b.txt", "Second\nnovel, wrapped.\n\n* * *"),
        ];
        let corpus = build_corpus(docs, &UnicodeSentenceSplitter::new());
        assert_eq!(
            corpus.into_sentences(),
            vec![toks(&["first", "novel"]), toks(&["second", "novel", "wrapped"])]
        );
    }
}
