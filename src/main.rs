//! lox: scans Lox scripts and prints their tokens.
//!
//! Usage:
//!   lox [file]
//!
//! Without a file an interactive prompt is started.

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{error::ErrorKind, CommandFactory, Parser as ClapParser};
use lox::{
    base::{Error, FsProvider, PrintHandler},
    lexical::token_stream::TokenStream,
};

/// Exit status of a script containing lexical errors.
const LEXICAL_ERROR_STATUS: u8 = 2;

#[derive(ClapParser, Debug)]
#[command(name = "lox", version, about = "The Lox programming language.")]
struct Cli {
    /// Filename of the script to be run. If not specified, runs an interactive prompt.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Do not print the scanned tokens.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match &cli.file {
        Some(file) => run_file(&cli, file),
        None => match run_prompt(&cli) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run_file(cli: &Cli, file: &Path) -> ExitCode {
    let handler = PrintHandler::new();

    match lox::tokenize(&handler, &FsProvider::default(), file) {
        Ok(tokens) => {
            print_tokens(cli, &tokens);

            if handler.has_printed() {
                ExitCode::from(LEXICAL_ERROR_STATUS)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(Error::FileNotFound(_)) => Cli::command()
            .error(
                ErrorKind::Io,
                format!("File not found: {}", file.display()),
            )
            .exit(),
        Err(err) => Cli::command().error(ErrorKind::Io, err).exit(),
    }
}

fn run_prompt(cli: &Cli) -> io::Result<()> {
    println!("lox version {}", env!("CARGO_PKG_VERSION"));

    let handler = PrintHandler::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!(">>> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            return Ok(());
        };

        // every line is scanned on its own
        handler.reset();
        let tokens = lox::tokenize_str(&handler, "<prompt>", &line);
        print_tokens(cli, &tokens);
    }
}

fn print_tokens(cli: &Cli, tokens: &TokenStream) {
    if !cli.quiet {
        println!("{tokens}");
    }
}
