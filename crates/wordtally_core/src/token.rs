/// The only character that separates words.
pub const DELIMITER: char = ' ';

pub trait Tokenizer: Send + Sync {
    /// Splits `text` into borrowed tokens, in order.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Splits on the ASCII space only; tabs and newlines stay inside tokens.
///
/// Nothing is trimmed: leading, trailing and doubled spaces produce empty
/// tokens, and the empty string produces a single empty token.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpaceTokenizer;

impl Tokenizer for SpaceTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(DELIMITER).collect()
    }
}

/// Tokenizes `sentence` with [`SpaceTokenizer`].
pub fn tokenize(sentence: &str) -> Vec<&str> {
    SpaceTokenizer.tokenize(sentence)
}
