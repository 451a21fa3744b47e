use crate::art;
use crate::error::Result;
use crate::game_state::{
    Game, GameInterface, GameOutcome, Progress, SecretWord, game_loop, prompt_secret_word,
};
use crate::wordbank::{
    EMBEDDED_WORDBANK, FileWordSource, choose_word, load_wordbank_from_str, select_word,
};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Hangman: guess the secret word one letter at a time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a whitespace-separated word list to pick the secret word from
    #[arg(short = 'w', long = "words")]
    pub words_path: Option<PathBuf>,

    /// 1-based position of the secret word in the word list; wraps around
    #[arg(short = 'n', long = "index", allow_negative_numbers = true)]
    pub index: Option<i64>,

    /// Play in the full-screen terminal UI
    #[arg(long)]
    pub tui: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Where the secret word comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    /// Ask the player to type it.
    Prompt,
    /// Select it from a word list file.
    File { path: PathBuf, index: i64 },
    /// Select it from the word list compiled into the binary.
    Embedded { index: i64 },
}

impl Cli {
    #[must_use]
    pub fn secret_source(&self) -> SecretSource {
        match (&self.words_path, self.index) {
            (Some(path), index) => SecretSource::File {
                path: path.clone(),
                index: index.unwrap_or(1),
            },
            (None, Some(index)) => SecretSource::Embedded { index },
            (None, None) => SecretSource::Prompt,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Shows the banner, obtains the secret word from `source` and plays one game.
///
/// Word list failures abort before the game starts.
pub fn run<I: GameInterface + ?Sized>(source: &SecretSource, interface: &mut I) -> Result<GameOutcome> {
    interface.display_banner();

    let secret = match source {
        SecretSource::Prompt => {
            let Some(secret) = prompt_secret_word(interface) else {
                interface.display_exit_message();
                return Ok(GameOutcome::Abandoned);
            };
            secret
        }
        SecretSource::File { path, index } => {
            let (count, word) = choose_word(&FileWordSource, path, *index)?;
            select_secret(interface, count, &word)?
        }
        SecretSource::Embedded { index } => {
            let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
            let (count, word) = select_word(&words, *index)?;
            select_secret(interface, count, &word)?
        }
    };

    let mut game = Game::new(secret);
    Ok(game_loop(&mut game, interface))
}

fn select_secret<I: GameInterface + ?Sized>(
    interface: &mut I,
    count: usize,
    word: &str,
) -> Result<SecretWord> {
    let secret = SecretWord::new(word)?;
    interface.display_word_selected(count);
    interface.display_secret_accepted(&secret);
    Ok(secret)
}

/// Reads one line, stripped of surrounding whitespace. `None` at end of input.
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt(text: &str) {
    print!("{text}");
    let _ = io::stdout().flush();
}

/// Line-based console implementation of [`GameInterface`].
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_banner(&mut self) {
        println!("{}", art::WELCOME);
        println!("{}", art::BANNER);
    }

    fn read_secret_word(&mut self) -> Option<String> {
        prompt("Enter the secret word: ");
        read_trimmed_line(&mut self.reader)
    }

    fn display_empty_secret_word(&mut self) {
        println!("The secret word cannot be empty.");
    }

    fn display_word_selected(&mut self, unique_words: usize) {
        println!("Secret word chosen from {unique_words} unique words.");
    }

    fn display_secret_accepted(&mut self, secret: &SecretWord) {
        println!("{}", "_ ".repeat(secret.len()));
    }

    fn display_progress(&mut self, progress: &Progress) {
        println!("{}", progress.revealed);
    }

    fn read_guess(&mut self) -> Option<String> {
        prompt("Guess a letter: ");
        read_trimmed_line(&mut self.reader)
    }

    fn display_invalid_guess(&mut self, trail: &str) {
        println!("X");
        println!("{trail}");
        println!("Invalid input or letter already guessed.");
    }

    fn display_good_guess(&mut self) {
        println!("Good guess!");
    }

    fn display_wrong_guess(&mut self, tries_left: usize, stage: &str) {
        println!("Wrong guess! You have {tries_left} tries left.");
        println!("{stage}");
    }

    fn display_win(&mut self, secret: &SecretWord) {
        println!("Congratulations! You guessed the word: {secret}");
    }

    fn display_loss(&mut self, secret: &SecretWord) {
        println!("Game over! The word was: {secret}");
    }

    fn display_exit_message(&mut self) {
        println!("\nExiting.");
    }
}
