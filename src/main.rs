//! CLI tool to check programs and dump their token streams.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use minilang_syntax::{SourceFile, Scanner, TokenKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "minilang", version, about = "Syntax checker for minilang programs")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log filter (e.g. `debug`, `minilang_syntax=trace`); overrides `RUST_LOG`
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check if program(s) are syntactically valid
    Check {
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,
    },
    /// Print the token stream of a program
    Tokens {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Build the log filter from `--log-level`, else `RUST_LOG`.
///
/// `Ok(None)` means neither is set. A malformed filter is an error
/// naming where it came from.
fn log_filter(directives: Option<&str>) -> Result<Option<EnvFilter>, String> {
    match directives {
        Some(directives) => EnvFilter::try_new(directives)
            .map(Some)
            .map_err(|e| format!("invalid --log-level {directives:?}: {e}")),
        None if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() => {
            EnvFilter::try_from_default_env()
                .map(Some)
                .map_err(|e| format!("invalid {}: {e}", EnvFilter::DEFAULT_ENV))
        }
        None => Ok(None),
    }
}

fn init_logging(directives: Option<&str>) {
    let filter = log_filter(directives)
        .unwrap_or_else(|msg| {
            eprintln!("{msg}; falling back to \"warn\"");
            None
        })
        .unwrap_or_else(|| EnvFilter::new("warn"));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("cannot install logger: {e}");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match cli.command {
        Command::Check { files } => check(&files),
        Command::Tokens { file } => tokens(&file),
    }
}

fn check(files: &[PathBuf]) -> ExitCode {
    let mut had_error = false;

    for path in files {
        match minilang_syntax::recognize_file(path) {
            Ok(()) => eprintln!("{}: valid", path.display()),
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn tokens(path: &Path) -> ExitCode {
    let file = match SourceFile::open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    };

    let mut scanner = Scanner::from_reader(file.reader());
    loop {
        let token = scanner.scan();
        println!(
            "{}:{} {:?} {}",
            token.span.line, token.span.column, token.kind, token.text
        );
        if token.is(TokenKind::Eot) {
            return ExitCode::SUCCESS;
        }
    }
}
