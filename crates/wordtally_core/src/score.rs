use crate::table::LetterValueTable;

/// Sum of letter weights over a word.
pub type Score = u64;

/// Scrabble value of `word` under the standard table.
///
/// Every `char` is looked up, including ones worth nothing, so the result
/// is total over any input.
pub fn word_value(word: &str) -> Score {
    LetterValueTable::standard().word_value(word)
}
