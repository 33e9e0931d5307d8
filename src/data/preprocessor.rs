// ============================================================
// Layer 4 - Text Preprocessor
// ============================================================
// Prepares a raw novel for sentence splitting.
//
// Why is this needed?
//   Plaintext novels are hard-wrapped at ~70 columns. The sentence
//   detector treats a line break as a paragraph separator, so a
//   sentence spread over three lines would come out as three
//   "sentences". We therefore join wrapped lines back together and
//   keep only blank lines as paragraph breaks.
//
// Cleaning steps (applied in order):
//   1. "\r\n" and lone "\r" become "\n"
//   2. Tabs, non-breaking/zero-width spaces, BOMs and other control
//      characters become a plain space
//   3. Lines within a paragraph are joined with a single space
//   4. Runs of spaces collapse to one; lines are trimmed
//   5. Paragraphs are separated by exactly one blank line
//
// Word characters and punctuation pass through untouched. A control
// character between two words becomes a space, so it now separates
// them into two tokens.
//
// Reference: Rust Book §8 (Strings in Rust)

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Join hard-wrapped lines into paragraphs.
    pub fn unwrap(&self, text: &str) -> String {
        // ── Step 1 + 2: Normalise individual characters ──────────────────────
        let normalised: String = text
            .replace("\r\n", "\n")
            .chars()
            .map(|c| match c {
                '\r' => '\n',
                '\t' | '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                c if c.is_control() && c != '\n' => ' ',
                c => c,
            })
            .collect();

        // ── Step 3 + 4: Join lines until a blank line ends the paragraph ─────
        let mut paragraphs: Vec<String> = Vec::new();
        let mut current = String::new();

        for line in normalised.lines() {
            let mut words = line.split_whitespace().peekable();

            if words.peek().is_none() {
                if !current.is_empty() {
                    paragraphs.push(std::mem::take(&mut current));
                }
                continue;
            }

            for word in words {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current);
        }

        // ── Step 5 ───────────────────────────────────────────────────────────
        paragraphs.join("\n\n")
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
