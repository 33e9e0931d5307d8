// ============================================================
// Layer 4 - Word Tokenizer
// ============================================================
// Turns one sentence into word tokens:
//
//   1. lowercase the whole string
//   2. delete every ASCII punctuation character
//        ! " # $ % & ' ( ) * + , - . / : ; < = > ? @ [ \ ] ^ _ ` { | } ~
//   3. split on runs of whitespace, dropping empty fragments
//
// Punctuation is deleted, not replaced, so "don't" becomes "dont"
// and "sea-shore" becomes "seashore". No stemming, no stop words,
// no Unicode normalisation beyond case folding.
//
// The function is pure: the same input always yields the same
// tokens, and re-tokenizing the space-joined output is a no-op.
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

/// Tokenize a sentence into lowercase, punctuation-free words.
pub fn tokenize(sentence: &str) -> Vec<String> {
    let cleaned: String = sentence
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}
