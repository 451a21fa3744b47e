use std::io;
use thiserror::Error;

/// The errors the hangman library can produce.
#[derive(Debug, Error)]
pub enum HangmanError {
    /// The word source contained no words at all.
    #[error("the word list is empty")]
    EmptyWordList,

    /// The secret word was empty after trimming.
    #[error("the secret word must contain at least one character")]
    EmptySecretWord,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, HangmanError>;
