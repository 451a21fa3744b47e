// Library interface for hangman
// This allows integration tests to access internal modules

pub mod art;
pub mod cli;
pub mod error;
pub mod game_state;
pub mod guess;
pub mod logging;
pub mod reveal;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{HangmanError, Result};
pub use game_state::{Game, GameInterface, GameOutcome, GuessOutcome, SecretWord, game_loop};
pub use guess::{GuessedLetters, is_valid_guess, try_update_letter_guessed};
pub use reveal::{check_win, show_hidden_word};
pub use wordbank::{
    FileWordSource, WordSource, choose_word, load_wordbank_from_file, load_wordbank_from_str,
    select_word,
};
