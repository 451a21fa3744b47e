use itertools::Itertools;

/// Separator used when the guessed letters are listed back to the player.
pub const TRAIL_SEPARATOR: &str = " <- ";

/// Letters the guesser has proposed so far, in the order they were accepted.
///
/// Every element is a single lower-case ASCII letter and appears once. The set
/// only grows through [`try_update_letter_guessed`], so the invariant holds for
/// any value a caller can observe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    letters: Vec<char>,
}

impl GuessedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    /// The guessed letters sorted alphabetically and joined for display,
    /// e.g. `a <- c <- t`.
    #[must_use]
    pub fn trail(&self) -> String {
        self.letters.iter().sorted().join(TRAIL_SEPARATOR)
    }
}

/// Normalizes a raw guess to the letter it stands for.
///
/// Returns the lower-cased letter when `candidate` is exactly one ASCII
/// alphabetic character, `None` otherwise.
#[must_use]
pub fn normalize_guess(candidate: &str) -> Option<char> {
    let mut chars = candidate.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

#[must_use]
pub fn is_valid_guess(candidate: &str, guessed: &GuessedLetters) -> bool {
    normalize_guess(candidate).is_some_and(|letter| !guessed.contains(letter))
}

/// Records `candidate` in `guessed` if it is a valid guess.
///
/// Returns whether the letter was added. An invalid candidate leaves
/// `guessed` untouched.
pub fn try_update_letter_guessed(candidate: &str, guessed: &mut GuessedLetters) -> bool {
    match normalize_guess(candidate) {
        Some(letter) if !guessed.contains(letter) => {
            guessed.letters.push(letter);
            true
        }
        _ => false,
    }
}
