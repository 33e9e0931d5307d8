// ============================================================
// Layer 4 - Sentence Splitter
// ============================================================
// Splits a document into sentences using the Unicode sentence
// boundary rules (UAX #29) from the unicode-segmentation crate.
//
// The rules break after '.', '!' and '?' followed by space and a
// new sentence, and at paragraph separators. They are heuristics:
// "Mr. Smith" is split after "Mr.", and quotations can end up
// attached to the wrong sentence. That is accepted here; nothing
// downstream depends on linguistically perfect boundaries.
//
// unicode_sentences() only yields segments holding at least one
// alphabetic or numeric char, so stray punctuation and blank
// paragraph separators disappear. A digit-only line such as
// "1851." counts as a sentence and is kept. Every sentence is
// trimmed.
//
// Reference: https://unicode.org/reports/tr29/#Sentence_Boundaries

use unicode_segmentation::UnicodeSegmentation;

use crate::domain::traits::SentenceSplitter;

#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSentenceSplitter;

impl UnicodeSentenceSplitter {
    pub fn new() -> Self {
        Self
    }
}

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_terminal_punctuation() {
        let s = UnicodeSentenceSplitter::new();
        let sentences = s.split("Call me Ishmael. I love the sea! Do you?");
        assert_eq!(sentences, vec!["Call me Ishmael.", "I love the sea!", "Do you?"]);
    }

    #[test]
    fn test_paragraph_break_is_a_boundary() {
        let s = UnicodeSentenceSplitter::new();
        let sentences = s.split("CHAPTER I\n\nCall me Ishmael.");
        assert_eq!(sentences, vec!["CHAPTER I", "Call me Ishmael."]);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        let s = UnicodeSentenceSplitter::new();
        assert!(s.split("").is_empty());
        assert!(s.split("   ...   ").is_empty());
    }

    #[test]
    fn test_digit_only_sentence_is_kept() {
        let s = UnicodeSentenceSplitter::new();
        let sentences = s.split("It happened.\n\n1851.\n\n* * *");
        assert_eq!(sentences, vec!["It happened.", "1851."]);
    }

    #[test]
    fn test_order_is_preserved() {
        let s = UnicodeSentenceSplitter::new();
        let text = "First one. Second one. Third one.";
        let sentences = s.split(text);
        assert_eq!(sentences.len(), 3);
        assert!(sentences[0].starts_with("First"));
        assert!(sentences[2].starts_with("Third"));
    }
}
