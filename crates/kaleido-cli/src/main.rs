mod common;
mod repl;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use kaleido_lexer::Lexer;
use kaleido_printer::describe_token;
use crate::common::{error_kind, parse_and_render, render_error};

#[derive(Parser, Debug)]
#[command(name = "kaleido", version, about = "Lex and parse Kaleido expressions")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). KALEIDO_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every token of a source file, spaces included
    Tokens {
        path: PathBuf,

        /// Name recorded in token positions instead of the path
        #[arg(long = "file-name")]
        file_name: Option<String>,
    },

    /// Parse one expression and print it as an S-expression
    Parse {
        #[arg(required_unless_present = "expr", conflicts_with = "expr")]
        path: Option<PathBuf>,

        /// Expression text to parse instead of a file
        #[arg(short, long)]
        expr: Option<String>,

        /// Print the space-filtered tokens before the tree
        #[arg(long = "show-tokens", default_value_t = false)]
        show_tokens: bool,
    },

    /// Read expressions interactively
    Repl,
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "warn",
        1 => "kaleido=debug,kaleido_lexer=debug,kaleido_parser=debug",
        _ => "kaleido=trace,kaleido_lexer=trace,kaleido_parser=trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env("KALEIDO_LOG")
        .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_source(path: &Path) -> String {
    if !path.exists() {
        eprintln!(
            "{}: {}",
            "error".red().bold(),
            format!("File not found: {}", path.display()).red()
        );
        std::process::exit(1);
    }
    match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!(
                "{}: {}",
                "error".red().bold(),
                format!("Failed to read {}: {}", path.display(), e).red()
            );
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Tokens { path, file_name } => {
            let src = read_source(&path);
            let name = file_name.unwrap_or_else(|| path.display().to_string());
            tracing::debug!(file = %name, bytes = src.len(), "dumping tokens");
            for token in Lexer::with_file_name(&src, name) {
                println!("{}", describe_token(&token));
            }
        }
        Command::Parse {
            path,
            expr,
            show_tokens,
        } => {
            let (src, name) = match (path, expr) {
                (_, Some(text)) => (text, "<expr>".to_string()),
                (Some(path), None) => (read_source(&path), path.display().to_string()),
                (None, None) => unreachable!("clap requires a path or --expr"),
            };
            match parse_and_render(&src, &name, show_tokens) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    render_error(error_kind(&e), &src, &e);
                    std::process::exit(1);
                }
            }
        }
        Command::Repl => repl::start_repl(),
    }
}
