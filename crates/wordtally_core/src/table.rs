use std::sync::OnceLock;

use thiserror::Error;
use wordtally_logging::{wordtally_debug, wordtally_trace};

use crate::score::Score;

/// Standard Scrabble weights, lowest first.
pub const STANDARD_CATEGORIES: [(u32, &str); 7] = [
    (1, "aeilnorstu"),
    (2, "dg"),
    (3, "bcmp"),
    (4, "fhvwy"),
    (5, "k"),
    (8, "jx"),
    (10, "qz"),
];

const ALPHABET_LEN: usize = 26;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("category {index} has a weight of zero")]
    ZeroWeight { index: usize },
    #[error("{letter:?} in category with weight {weight} is not an ASCII letter")]
    NotALetter { letter: char, weight: u32 },
    #[error("letter {letter:?} is listed with weight {first} and again with weight {second}")]
    DuplicateLetter { letter: char, first: u32, second: u32 },
}

/// Letters sharing one point value. Members are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCategory {
    weight: u32,
    letters: Vec<char>,
}

impl LetterCategory {
    pub fn new(weight: u32, letters: impl IntoIterator<Item = char>) -> Self {
        Self {
            weight,
            letters: letters.into_iter().collect(),
        }
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn contains(&self, letter: char) -> bool {
        let letter = letter.to_ascii_lowercase();
        self.letters.contains(&letter)
    }
}

/// Ordered weight categories plus a precomputed letter -> weight index.
///
/// Categories are disjoint, so the index gives the same answer as scanning
/// the categories in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterValueTable {
    categories: Vec<LetterCategory>,
    lookup: [u32; ALPHABET_LEN],
}

impl LetterValueTable {
    /// Validates and indexes `categories`.
    ///
    /// Letters are case-insensitive: `'A'` and `'a'` in the same table are
    /// a duplicate.
    pub fn new(categories: Vec<LetterCategory>) -> Result<Self, TableError> {
        let mut lookup = [0u32; ALPHABET_LEN];
        let mut normalized = Vec::with_capacity(categories.len());
        for (index, category) in categories.into_iter().enumerate() {
            if category.weight == 0 {
                return Err(TableError::ZeroWeight { index });
            }
            let mut letters = Vec::with_capacity(category.letters.len());
            for letter in category.letters {
                let slot = alphabet_index(letter).ok_or(TableError::NotALetter {
                    letter,
                    weight: category.weight,
                })?;
                let lower = letter.to_ascii_lowercase();
                if lookup[slot] != 0 {
                    return Err(TableError::DuplicateLetter {
                        letter: lower,
                        first: lookup[slot],
                        second: category.weight,
                    });
                }
                lookup[slot] = category.weight;
                letters.push(lower);
            }
            normalized.push(LetterCategory::new(category.weight, letters));
        }
        wordtally_debug!(
            "Built letter table with {} categories covering {} letters",
            normalized.len(),
            lookup.iter().filter(|w| **w != 0).count()
        );
        Ok(Self {
            categories: normalized,
            lookup,
        })
    }

    /// The shared standard Scrabble table, built on first use.
    pub fn standard() -> &'static LetterValueTable {
        static STANDARD: OnceLock<LetterValueTable> = OnceLock::new();
        STANDARD.get_or_init(|| {
            wordtally_trace!("Initializing standard letter table");
            let mut lookup = [0u32; ALPHABET_LEN];
            let categories = STANDARD_CATEGORIES
                .iter()
                .map(|&(weight, letters)| {
                    for slot in letters.chars().filter_map(alphabet_index) {
                        lookup[slot] = weight;
                    }
                    LetterCategory::new(weight, letters.chars())
                })
                .collect();
            LetterValueTable { categories, lookup }
        })
    }

    pub fn categories(&self) -> &[LetterCategory] {
        &self.categories
    }

    /// Weight of `letter`, or 0 when no category lists it.
    pub fn letter_value(&self, letter: char) -> u32 {
        alphabet_index(letter).map_or(0, |slot| self.lookup[slot])
    }

    /// First category, in table order, containing `letter`.
    pub fn category_of(&self, letter: char) -> Option<&LetterCategory> {
        self.categories.iter().find(|category| category.contains(letter))
    }

    /// Sum of [`letter_value`](Self::letter_value) over every `char` of `word`.
    pub fn word_value(&self, word: &str) -> Score {
        word.chars()
            .map(|letter| Score::from(self.letter_value(letter)))
            .sum()
    }
}

fn alphabet_index(letter: char) -> Option<usize> {
    if letter.is_ascii_alphabetic() {
        Some(usize::from(letter.to_ascii_lowercase() as u8 - b'a'))
    } else {
        None
    }
}

/// Weight of `letter` in the standard table.
pub fn letter_value(letter: char) -> u32 {
    LetterValueTable::standard().letter_value(letter)
}
