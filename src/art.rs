//! Fixed ASCII art shown by the frontends.

pub const WELCOME: &str = "Welcome to the game Hangman";

pub const BANNER: &str = r"   _    _
   | |  | |
   | |__| | __ _ _ __   __ _ _ __ ___   __ _ _ __
   |  __  |/ _' | '_ \ / _' | '_ ' _ \ / _' | '_ \
   | |  | | (_| | | | | (_| | | | | | | (_| | | | |
   |_|  |_|\__,_|_| |_|\__, |_| |_| |_|\__,_|_| |_|
                        __/ |
                       |___/";

/// Gallows frames, one per mistake count. Frame 0 is the empty scaffold and
/// the last frame is the fatal one.
pub const HANGMAN_STAGES: [&str; 7] = [
    "x-------x",
    "    x-------x
    |
    |
    |
    |
    |",
    "    x-------x
    |       |
    |       0
    |
    |
    |",
    "    x-------x
    |       |
    |       0
    |       |
    |
    |",
    r"    x-------x
    |       |
    |       0
    |      /|\
    |
    |",
    r"    x-------x
    |       |
    |       0
    |      /|\
    |      /
    |",
    r"    x-------x
    |       |
    |       0
    |      /|\
    |      / \
    |",
];

/// Number of mistakes that ends the game.
#[must_use]
pub const fn max_mistakes() -> usize {
    HANGMAN_STAGES.len() - 1
}

/// Frame for the given mistake count, clamped to the fatal frame.
#[must_use]
pub fn stage(mistakes: usize) -> &'static str {
    HANGMAN_STAGES[mistakes.min(max_mistakes())]
}
