use crate::art;
use crate::error::{HangmanError, Result};
use crate::guess::{GuessedLetters, normalize_guess, try_update_letter_guessed};
use crate::reveal::{check_win, show_hidden_word};
use crate::{debug_log, info_log};
use std::fmt;

/// The word being guessed, lower-cased and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord(String);

impl SecretWord {
    pub fn new(raw: &str) -> Result<Self> {
        let word = raw.trim().to_lowercase();
        if word.is_empty() {
            return Err(HangmanError::EmptySecretWord);
        }
        Ok(Self(word))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of feeding one guess to a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not a single letter, already guessed, or the game is over. Nothing changed.
    Invalid,
    /// The letter is in the word.
    Hit,
    /// The letter is not in the word and cost a mistake.
    Miss { tries_left: usize },
    /// The guess revealed the last hidden letter.
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// How a played game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
    /// Input ran out or the player quit before the game was decided.
    Abandoned,
}

/// Snapshot handed to a frontend before each guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub revealed: String,
    pub trail: String,
    pub mistakes: usize,
    pub max_mistakes: usize,
}

impl Progress {
    #[must_use]
    pub fn tries_left(&self) -> usize {
        self.max_mistakes - self.mistakes
    }
}

/// One round of hangman: the secret word, the letters tried so far and the
/// mistake count.
#[derive(Debug, Clone)]
pub struct Game {
    secret: SecretWord,
    guessed: GuessedLetters,
    mistakes: usize,
    max_mistakes: usize,
}

impl Game {
    /// A game with one allowed mistake per gallows frame.
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        Self::with_max_mistakes(secret, art::max_mistakes())
    }

    #[must_use]
    pub fn with_max_mistakes(secret: SecretWord, max_mistakes: usize) -> Self {
        Self {
            secret,
            guessed: GuessedLetters::new(),
            mistakes: 0,
            max_mistakes,
        }
    }

    #[must_use]
    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[must_use]
    pub fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    #[must_use]
    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    #[must_use]
    pub fn max_mistakes(&self) -> usize {
        self.max_mistakes
    }

    #[must_use]
    pub fn revealed(&self) -> String {
        show_hidden_word(self.secret.as_str(), &self.guessed)
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        check_win(self.secret.as_str(), &self.guessed)
    }

    /// A win is checked before the mistake ceiling, so a completed word is
    /// never reported as lost.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.has_won() {
            GameStatus::Won
        } else if self.mistakes >= self.max_mistakes {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            revealed: self.revealed(),
            trail: self.guessed.trail(),
            mistakes: self.mistakes,
            max_mistakes: self.max_mistakes,
        }
    }

    /// Validates, records and scores one guess.
    pub fn apply_guess(&mut self, candidate: &str) -> GuessOutcome {
        if self.status() != GameStatus::InProgress {
            debug_log!("Guess '{}' ignored, game already decided", candidate);
            return GuessOutcome::Invalid;
        }
        if !try_update_letter_guessed(candidate, &mut self.guessed) {
            debug_log!("Rejected guess '{}'", candidate);
            return GuessOutcome::Invalid;
        }

        let hit = normalize_guess(candidate).is_some_and(|letter| self.secret.contains(letter));
        if !hit {
            self.mistakes += 1;
        }
        debug_log!(
            "Guess '{}' hit={} mistakes={}/{}",
            candidate,
            hit,
            self.mistakes,
            self.max_mistakes
        );

        if self.has_won() {
            GuessOutcome::Won
        } else if hit {
            GuessOutcome::Hit
        } else {
            GuessOutcome::Miss {
                tries_left: self.max_mistakes - self.mistakes,
            }
        }
    }
}

/// Everything the game loop needs from a frontend.
pub trait GameInterface {
    fn display_banner(&mut self);
    /// `None` when no more input is available.
    fn read_secret_word(&mut self) -> Option<String>;
    fn display_empty_secret_word(&mut self);
    /// A secret word was picked from a list of `unique_words` entries.
    fn display_word_selected(&mut self, unique_words: usize);
    fn display_secret_accepted(&mut self, secret: &SecretWord);
    fn display_progress(&mut self, progress: &Progress);
    /// `None` when no more input is available or the player quit.
    fn read_guess(&mut self) -> Option<String>;
    fn display_invalid_guess(&mut self, trail: &str);
    fn display_good_guess(&mut self);
    fn display_wrong_guess(&mut self, tries_left: usize, stage: &str);
    fn display_win(&mut self, secret: &SecretWord);
    fn display_loss(&mut self, secret: &SecretWord);
    fn display_exit_message(&mut self);
}

/// Asks the frontend for a secret word until a non-empty one is entered.
pub fn prompt_secret_word<I: GameInterface + ?Sized>(interface: &mut I) -> Option<SecretWord> {
    loop {
        let raw = interface.read_secret_word()?;
        match SecretWord::new(&raw) {
            Ok(secret) => {
                interface.display_secret_accepted(&secret);
                return Some(secret);
            }
            Err(_) => interface.display_empty_secret_word(),
        }
    }
}

/// Plays `game` to the end through `interface`.
pub fn game_loop<I: GameInterface + ?Sized>(game: &mut Game, interface: &mut I) -> GameOutcome {
    info_log!(
        "Starting game: {} letters, {} mistakes allowed",
        game.secret().len(),
        game.max_mistakes()
    );

    while game.mistakes() < game.max_mistakes() {
        interface.display_progress(&game.progress());
        let Some(candidate) = interface.read_guess() else {
            info_log!("No more input, abandoning game");
            interface.display_exit_message();
            return GameOutcome::Abandoned;
        };

        match game.apply_guess(&candidate) {
            GuessOutcome::Invalid => interface.display_invalid_guess(&game.guessed().trail()),
            GuessOutcome::Hit => interface.display_good_guess(),
            GuessOutcome::Miss { tries_left } => {
                interface.display_wrong_guess(tries_left, art::stage(game.mistakes()));
            }
            GuessOutcome::Won => {
                interface.display_good_guess();
                break;
            }
        }
    }

    if game.has_won() {
        info_log!("Game won with {} mistakes", game.mistakes());
        interface.display_win(game.secret());
        GameOutcome::Won
    } else {
        info_log!("Game lost");
        interface.display_loss(game.secret());
        GameOutcome::Lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Debug, PartialEq)]
    enum Event {
        Progress(String),
        Invalid(String),
        Good,
        Wrong(usize),
        Win(String),
        Loss(String),
        Exit,
        EmptySecret,
    }

    #[derive(Default)]
    struct Scripted {
        inputs: VecDeque<String>,
        events: Vec<Event>,
    }

    impl Scripted {
        fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                events: Vec::new(),
            }
        }
    }

    impl GameInterface for Scripted {
        fn display_banner(&mut self) {}
        fn read_secret_word(&mut self) -> Option<String> {
            self.inputs.pop_front()
        }
        fn display_empty_secret_word(&mut self) {
            self.events.push(Event::EmptySecret);
        }
        fn display_word_selected(&mut self, _unique_words: usize) {}
        fn display_secret_accepted(&mut self, _secret: &SecretWord) {}
        fn display_progress(&mut self, progress: &Progress) {
            self.events.push(Event::Progress(progress.revealed.clone()));
        }
        fn read_guess(&mut self) -> Option<String> {
            self.inputs.pop_front()
        }
        fn display_invalid_guess(&mut self, trail: &str) {
            self.events.push(Event::Invalid(trail.to_string()));
        }
        fn display_good_guess(&mut self) {
            self.events.push(Event::Good);
        }
        fn display_wrong_guess(&mut self, tries_left: usize, _stage: &str) {
            self.events.push(Event::Wrong(tries_left));
        }
        fn display_win(&mut self, secret: &SecretWord) {
            self.events.push(Event::Win(secret.to_string()));
        }
        fn display_loss(&mut self, secret: &SecretWord) {
            self.events.push(Event::Loss(secret.to_string()));
        }
        fn display_exit_message(&mut self) {
            self.events.push(Event::Exit);
        }
    }

    fn game(word: &str) -> Game {
        Game::new(SecretWord::new(word).unwrap())
    }

    #[test]
    fn test_secret_word_is_normalized() {
        let secret = SecretWord::new("  Rust\n").unwrap();
        assert_eq!(secret.as_str(), "rust");
        assert_eq!(secret.len(), 4);
    }

    #[test]
    fn test_empty_secret_word_rejected() {
        assert!(matches!(
            SecretWord::new("   "),
            Err(HangmanError::EmptySecretWord)
        ));
    }

    #[test]
    fn test_apply_guess_outcomes() {
        let mut game = game("cat");
        assert_eq!(game.apply_guess("c"), GuessOutcome::Hit);
        assert_eq!(
            game.apply_guess("x"),
            GuessOutcome::Miss { tries_left: 5 }
        );
        assert_eq!(game.apply_guess("c"), GuessOutcome::Invalid);
        assert_eq!(game.apply_guess("ab"), GuessOutcome::Invalid);
        assert_eq!(game.apply_guess("A"), GuessOutcome::Hit);
        assert_eq!(game.apply_guess("t"), GuessOutcome::Won);
        assert_eq!(game.mistakes(), 1);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_invalid_guess_does_not_mutate() {
        let mut game = game("cat");
        game.apply_guess("c");
        let before = game.guessed().clone();
        assert_eq!(game.apply_guess("5"), GuessOutcome::Invalid);
        assert_eq!(game.apply_guess("C"), GuessOutcome::Invalid);
        assert_eq!(game.guessed(), &before);
        assert_eq!(game.mistakes(), 0);
    }

    #[test]
    fn test_guesses_after_loss_are_ignored() {
        let mut game = Game::with_max_mistakes(SecretWord::new("a").unwrap(), 1);
        assert_eq!(game.apply_guess("b"), GuessOutcome::Miss { tries_left: 0 });
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.apply_guess("a"), GuessOutcome::Invalid);
        assert!(!game.has_won());
    }

    #[test]
    fn test_win_checked_before_ceiling() {
        let mut game = Game::with_max_mistakes(SecretWord::new("ab").unwrap(), 1);
        assert_eq!(game.apply_guess("a"), GuessOutcome::Hit);
        assert_eq!(game.apply_guess("b"), GuessOutcome::Won);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_game_loop_win_on_last_allowed_guess() {
        let mut game = game("a");
        let mut ui = Scripted::new(&["b", "c", "d", "e", "f", "a"]);
        assert_eq!(game_loop(&mut game, &mut ui), GameOutcome::Won);
        assert_eq!(game.mistakes(), 5);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(ui.events.last(), Some(&Event::Win("a".into())));
        assert!(!ui.events.contains(&Event::Loss("a".into())));
    }

    #[test]
    fn test_game_loop_cat_win() {
        let mut game = game("cat");
        let mut ui = Scripted::new(&["c", "a", "t"]);
        assert_eq!(game_loop(&mut game, &mut ui), GameOutcome::Won);
        assert_eq!(
            ui.events,
            vec![
                Event::Progress("_ _ _".into()),
                Event::Good,
                Event::Progress("c _ _".into()),
                Event::Good,
                Event::Progress("c a _".into()),
                Event::Good,
                Event::Win("cat".into()),
            ]
        );
    }

    #[test]
    fn test_game_loop_dog_loss() {
        let mut game = game("dog");
        let mut ui = Scripted::new(&["x", "y", "z", "q", "w", "e", "d"]);
        assert_eq!(game_loop(&mut game, &mut ui), GameOutcome::Lost);
        assert_eq!(game.mistakes(), 6);
        assert!(!game.has_won());
        assert_eq!(ui.events.last(), Some(&Event::Loss("dog".into())));
        assert!(ui.events.contains(&Event::Wrong(0)));
        // The loop stops at the ceiling; "d" is never read.
        assert_eq!(ui.inputs.len(), 1);
    }

    #[test]
    fn test_game_loop_repeated_guess_shows_trail() {
        let mut game = game("cat");
        let mut ui = Scripted::new(&["t", "c", "c", "5", "a"]);
        assert_eq!(game_loop(&mut game, &mut ui), GameOutcome::Won);
        assert!(ui.events.contains(&Event::Invalid("c <- t".into())));
        assert_eq!(game.mistakes(), 0);
    }

    #[test]
    fn test_game_loop_abandoned_on_end_of_input() {
        let mut game = game("cat");
        let mut ui = Scripted::new(&["c"]);
        assert_eq!(game_loop(&mut game, &mut ui), GameOutcome::Abandoned);
        assert_eq!(ui.events.last(), Some(&Event::Exit));
    }

    #[test]
    fn test_prompt_secret_word_retries_on_empty() {
        let mut ui = Scripted::new(&["", "  ", "Word"]);
        let secret = prompt_secret_word(&mut ui).unwrap();
        assert_eq!(secret.as_str(), "word");
        assert_eq!(ui.events, vec![Event::EmptySecret, Event::EmptySecret]);
    }

    #[test]
    fn test_prompt_secret_word_end_of_input() {
        let mut ui = Scripted::new(&[]);
        assert!(prompt_secret_word(&mut ui).is_none());
    }
}
