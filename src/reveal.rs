use crate::guess::GuessedLetters;
use itertools::Itertools;

/// Placeholder shown for a letter that has not been guessed yet.
pub const MASK: char = '_';
/// Separator placed between the characters of the revealed word.
pub const SEPARATOR: &str = " ";

/// Renders the secret word with unguessed characters masked, e.g. `c _ t`.
#[must_use]
pub fn show_hidden_word(secret_word: &str, guessed: &GuessedLetters) -> String {
    secret_word
        .chars()
        .map(|c| if guessed.contains(c) { c } else { MASK })
        .join(SEPARATOR)
}

/// True once every character of `secret_word` has been guessed.
#[must_use]
pub fn check_win(secret_word: &str, guessed: &GuessedLetters) -> bool {
    !show_hidden_word(secret_word, guessed)
        .replace(SEPARATOR, "")
        .contains(MASK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guess::try_update_letter_guessed;
    use proptest::prelude::*;

    fn guessed(letters: &str) -> GuessedLetters {
        let mut set = GuessedLetters::new();
        for c in letters.chars() {
            try_update_letter_guessed(&c.to_string(), &mut set);
        }
        set
    }

    fn alphabet() -> GuessedLetters {
        guessed("abcdefghijklmnopqrstuvwxyz")
    }

    #[test]
    fn test_nothing_guessed_is_all_masks() {
        assert_eq!(show_hidden_word("cat", &GuessedLetters::new()), "_ _ _");
    }

    #[test]
    fn test_repeated_letters_all_revealed() {
        assert_eq!(show_hidden_word("hello", &guessed("l")), "_ _ l l _");
    }

    #[test]
    fn test_cat_progression() {
        let mut set = GuessedLetters::new();
        let mut seen = Vec::new();
        for letter in ["c", "a", "t"] {
            assert!(!check_win("cat", &set));
            try_update_letter_guessed(letter, &mut set);
            seen.push(show_hidden_word("cat", &set));
        }
        assert_eq!(seen, vec!["c _ _", "c a _", "c a t"]);
        assert!(check_win("cat", &set));
    }

    #[test]
    fn test_wrong_letters_do_not_win() {
        assert!(!check_win("dog", &guessed("xyzqwe")));
    }

    #[test]
    fn test_check_win_is_idempotent() {
        let set = guessed("dg");
        assert_eq!(check_win("dog", &set), check_win("dog", &set));
        let set = guessed("dog");
        assert!(check_win("dog", &set));
        assert!(check_win("dog", &set));
    }

    #[test]
    fn test_unguessable_character_stays_masked() {
        let set = alphabet();
        assert_eq!(show_hidden_word("a-b", &set), "a _ b");
        assert!(!check_win("a-b", &set));
    }

    proptest! {
        #[test]
        fn prop_full_alphabet_reveals_word(word in "[a-z]{1,12}") {
            let expected = word.chars().join(" ");
            prop_assert_eq!(show_hidden_word(&word, &alphabet()), expected);
            prop_assert!(check_win(&word, &alphabet()));
        }
    }
}
