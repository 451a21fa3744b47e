use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

// Conditional logging macros - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const LOG_DIR_NAME: &str = "hangman";
const LOG_FILE_NAME: &str = "hangman.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[must_use]
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Location of the log file used while the terminal UI owns the screen.
#[must_use]
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME))
}

fn open_log_file() -> Option<File> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    File::options().create(true).append(true).open(path).ok()
}

/// Installs the global logger. `RUST_LOG` overrides the verbosity flag.
///
/// With `log_to_file` set, records go to [`log_file_path`] instead of stderr
/// (falling back to stderr if the file cannot be opened).
pub fn init_logging(verbose: bool, log_to_file: bool) {
    let default = default_level(verbose).to_string().to_lowercase();
    let mut builder = Builder::from_env(Env::default().default_filter_or(default));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if log_to_file && let Some(file) = open_log_file() {
        builder.target(Target::Pipe(Box::new(file)));
    }

    // A second call (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), LevelFilter::Warn);
        assert_eq!(default_level(true), LevelFilter::Debug);
    }

    #[test]
    fn test_log_file_path_is_under_app_dir() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("hangman/hangman.log"));
        }
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(false, false);
        init_logging(true, false);
        log::debug!("logger installed");
    }
}
