//! Wordtally core: pure tokenizing, counting and Scrabble scoring.
mod letters;
mod metrics;
mod score;
mod table;
mod token;

pub use letters::count_letter;
pub use metrics::{count_letters, count_words, TextMetrics};
pub use score::{word_value, Score};
pub use table::{
    letter_value, LetterCategory, LetterValueTable, TableError, STANDARD_CATEGORIES,
};
pub use token::{tokenize, SpaceTokenizer, Tokenizer, DELIMITER};
