//! jlex CLI
//!
//! Lexes a source file (or an inline snippet, or stdin) and prints the
//! token stream. Error tokens are reported as diagnostics on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use jlex::{logging, Diagnostic, JlexError, Lexer, Token};

/// Tokenize Java-like source code
#[derive(Parser, Debug)]
#[command(name = "jlex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize Java-like source code", long_about = None)]
struct Cli {
    /// Source file to lex; reads stdin when neither FILE nor --expr is given
    file: Option<PathBuf>,

    /// Lex SOURCE instead of reading a file
    #[arg(short, long, value_name = "SOURCE", conflicts_with = "file")]
    expr: Option<String>,

    /// Exit with status 1 when any error token was produced
    #[arg(long, env = "JLEX_DENY_ERRORS")]
    deny_errors: bool,

    /// Disable color output
    #[arg(long)]
    no_color: bool,

    /// Only report diagnostics, skip the token listing
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(0) => {}
        Ok(_) if cli.deny_errors => process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    }
}

/// Lex the selected input. Returns the number of error tokens.
fn run(cli: &Cli) -> Result<usize> {
    let (name, source) = read_input(cli)?;
    info!(input = %name, bytes = source.len(), "lexing");

    let tokens = Lexer::new(&source).tokenize();
    let errors = report_errors(&tokens, &name, &source);

    if !cli.quiet {
        print_tokens(&tokens, &name);
    }

    Ok(errors)
}

fn read_input(cli: &Cli) -> Result<(String, String)> {
    if let Some(expr) = &cli.expr {
        return Ok(("<expr>".to_string(), expr.clone()));
    }

    if let Some(path) = &cli.file {
        let source = fs::read_to_string(path)
            .map_err(|e| JlexError::io_error(path, e))?;
        return Ok((path.display().to_string(), source));
    }

    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .context("failed to read standard input")?;
    Ok(("<stdin>".to_string(), source))
}

fn report_errors(tokens: &[Token], name: &str, source: &str) -> usize {
    let mut count = 0;
    for error in tokens.iter().filter_map(Token::to_error) {
        let diagnostic = Diagnostic::with_source(error.with_filename(name), source);
        eprint!("{}", diagnostic);
        count += 1;
    }
    count
}

fn print_tokens(tokens: &[Token], name: &str) {
    println!("Tokens for '{}':", name);
    println!("{}", "=".repeat(60));

    for (i, token) in tokens.iter().enumerate() {
        println!(
            "{:4}: {:>8}  {:12} {:?}",
            i,
            format!("{}:{}", token.line, token.column),
            token.kind.category(),
            token.lexeme
        );
    }

    println!("{}", "=".repeat(60));
    println!("Total tokens: {}", tokens.len());
}
