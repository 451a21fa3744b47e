use hangman::cli::{CliInterface, parse_cli, run};
use hangman::logging::init_logging;
use hangman::tui::TuiInterface;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose, cli.tui);
    let source = cli.secret_source();
    log::debug!("Secret word source: {source:?}");

    let result = if cli.tui {
        match TuiInterface::new() {
            Ok(mut interface) => run(&source, &mut interface),
            Err(e) => {
                eprintln!("Failed to start terminal UI: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let mut interface = CliInterface::new(io::stdin().lock());
        run(&source, &mut interface)
    };

    match result {
        Ok(outcome) => {
            log::info!("Game finished: {outcome:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to choose a secret word: {e}");
            ExitCode::FAILURE
        }
    }
}
