use crate::token::{tokenize, SpaceTokenizer, Tokenizer};

/// Number of tokens in `sentence`.
///
/// The empty string is one empty token, so it counts as one word. Callers
/// that want zero for blank input have to check for it themselves.
pub fn count_words(sentence: &str) -> usize {
    tokenize(sentence).len()
}

/// Total number of characters across already-split words.
///
/// Lengths are counted in `char`s, not bytes.
pub fn count_letters<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|word| word.as_ref().chars().count()).sum()
}

/// Word and letter counts taken from a single tokenization.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    pub words: usize,
    pub letters: usize,
}

impl TextMetrics {
    pub fn of(sentence: &str) -> Self {
        Self::with_tokenizer(sentence, &SpaceTokenizer)
    }

    pub fn with_tokenizer(sentence: &str, tokenizer: &dyn Tokenizer) -> Self {
        let words = tokenizer.tokenize(sentence);
        Self {
            words: words.len(),
            letters: count_letters(words.as_slice()),
        }
    }
}
