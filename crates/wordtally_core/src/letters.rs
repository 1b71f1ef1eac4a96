/// Case-insensitive count of `target` in `word`.
///
/// Each `char` of the word is lowercased on its own and compared with the
/// lowercased target, so every character counts at most once and the
/// result does not depend on its neighbours (a word-final `Σ` still
/// matches `σ`).
pub fn count_letter(word: &str, target: char) -> usize {
    word.chars()
        .filter(|letter| letter.to_lowercase().eq(target.to_lowercase()))
        .count()
}
