// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! spacey-lex - dumps the lossless token stream of JavaScript source
//!
//! ## Features
//!
//! - Token tables or tab-indented JSON
//! - Concurrent file reads with tokio, or a rayon pool with `--jobs`
//! - Interactive REPL with token highlighting and history

mod output;
mod repl;

use clap::Parser;
use owo_colors::OwoColorize;
use output::{FileTokens, Style};
use spacey_lexer::{AsyncTokenizer, Error, MatcherSet, ParallelTokenizer, Token, tokenize_with};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "spacey-lex")]
#[command(about = "Lossless JavaScript tokenizer")]
#[command(version)]
#[command(author = "Pegasus Heavy Industries")]
struct Cli {
    /// JavaScript files to tokenize; starts the REPL when empty
    files: Vec<PathBuf>,

    /// Tokenize CODE instead of files
    #[arg(short, long, value_name = "CODE", conflicts_with = "files")]
    eval: Option<String>,

    /// Print tokens as tab-indented JSON
    #[arg(long)]
    json: bool,

    /// Hide white space, line terminators and comments
    #[arg(long)]
    no_trivia: bool,

    /// Ordered matcher names (e.g. whitespace,identifier-name,punctuator)
    #[arg(long, value_name = "NAME", value_delimiter = ',')]
    matchers: Option<Vec<String>>,

    /// Tokenize files on a pool of N threads
    #[arg(short, long, value_name = "N")]
    jobs: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Main entry point - uses tokio runtime for file reads.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let matchers = match &cli.matchers {
        Some(names) => match MatcherSet::from_names(names) {
            Ok(set) => set,
            Err(e) => {
                eprintln!("{}: {}", "Error".red().bold(), e);
                eprintln!("Known matchers: {}", spacey_lexer::lexer::MATCHER_NAMES.join(", ").cyan());
                return ExitCode::FAILURE;
            }
        },
        None => MatcherSet::standard(),
    };
    debug!("Matchers: {:?}", matchers.names().collect::<Vec<_>>());

    let style = Style {
        json: cli.json,
        trivia: !cli.no_trivia,
    };

    if let Some(code) = &cli.eval {
        return run_source(code, &matchers, style);
    }
    if cli.files.is_empty() {
        return run_repl(matchers, style);
    }

    let result = match cli.jobs {
        Some(jobs) => run_parallel(&cli.files, matchers, jobs, style).await,
        None => run_files(&cli.files, matchers, style).await,
    };
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "spacey_lexer=debug,spacey_lex=debug"
    } else {
        "spacey_lexer=warn,spacey_lex=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Start the interactive REPL
fn run_repl(matchers: MatcherSet, style: Style) -> ExitCode {
    match repl::Repl::new(matchers, style) {
        Ok(mut repl) => {
            if let Err(e) = repl.run() {
                eprintln!("{}: {:?}", "REPL Error".red().bold(), e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "{}: Failed to initialize REPL: {:?}",
                "Error".red().bold(),
                e
            );
            ExitCode::FAILURE
        }
    }
}

/// Tokenize source passed with `--eval`.
fn run_source(code: &str, matchers: &MatcherSet, style: Style) -> ExitCode {
    match tokenize_with(code, matchers) {
        Ok(tokens) => match output::print_tokens(&tokens, style) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}: {}", "Error".red().bold(), e);
                ExitCode::FAILURE
            }
        },
        Err(failure) => {
            output::print_failure(&failure, style);
            ExitCode::FAILURE
        }
    }
}

/// Read files concurrently and tokenize each one.
async fn run_files(paths: &[PathBuf], matchers: MatcherSet, style: Style) -> anyhow::Result<ExitCode> {
    let tokenizer = AsyncTokenizer::with_matchers(matchers);
    let results = tokenizer.tokenize_files(paths).await;
    report(paths, results, style)
}

/// Read every file, then tokenize the readable ones on a rayon pool.
async fn run_parallel(
    paths: &[PathBuf],
    matchers: MatcherSet,
    jobs: usize,
    style: Style,
) -> anyhow::Result<ExitCode> {
    let mut reads = Vec::with_capacity(paths.len());
    for path in paths {
        let read = tokio::fs::read_to_string(path).await.map_err(|source| Error::Read {
            path: path.clone(),
            source,
        });
        reads.push(read);
    }

    let tokenizer = ParallelTokenizer::with_threads(jobs)?.with_matchers(matchers);
    debug!("Tokenizing {} files on {} threads", paths.len(), tokenizer.threads());
    report(paths, tokenize_readable(&tokenizer, reads), style)
}

/// Scans every source that was read; read errors keep their slot.
fn tokenize_readable(
    tokenizer: &ParallelTokenizer,
    reads: Vec<spacey_lexer::Result<String>>,
) -> Vec<spacey_lexer::Result<Vec<Token>>> {
    let sources: Vec<&str> = reads.iter().map(|r| r.as_deref().unwrap_or("")).collect();
    let scanned = tokenizer.tokenize_all(&sources);

    reads
        .into_iter()
        .zip(scanned)
        .map(|(read, scan)| read.and_then(|_| scan.map_err(Error::from)))
        .collect()
}

/// Print every result in input order; any failure fails the run.
fn report(
    paths: &[PathBuf],
    results: Vec<spacey_lexer::Result<Vec<Token>>>,
    style: Style,
) -> anyhow::Result<ExitCode> {
    let mut code = ExitCode::SUCCESS;
    let mut documents = Vec::new();

    for (path, result) in paths.iter().zip(&results) {
        if !style.json && paths.len() > 1 {
            println!("{}", path.display().white().bold());
        }
        match result {
            Ok(tokens) if style.json => documents.push(FileTokens {
                file: path.display().to_string(),
                tokens: output::visible(tokens, style),
            }),
            Ok(tokens) => output::print_tokens(tokens, style)?,
            Err(Error::Lex(failure)) => {
                eprint!("{}: ", path.display().cyan());
                output::print_failure(failure, style);
                code = ExitCode::FAILURE;
            }
            Err(e) => {
                eprintln!("{}: {}", "Error".red().bold(), e);
                code = ExitCode::FAILURE;
            }
        }
    }

    if style.json {
        spacey_lexer::serialize::write_json(std::io::stdout().lock(), &documents)?;
        println!();
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_matchers_split_on_commas() {
        let cli = Cli::parse_from(["spacey-lex", "--matchers", "whitespace,punctuator", "-e", "+"]);
        assert_eq!(
            cli.matchers,
            Some(vec!["whitespace".to_string(), "punctuator".to_string()])
        );
        assert_eq!(cli.eval.as_deref(), Some("+"));
    }

    #[test]
    fn test_eval_conflicts_with_files() {
        assert!(Cli::try_parse_from(["spacey-lex", "-e", "1", "a.js"]).is_err());
    }

    #[test]
    fn test_unreadable_file_keeps_its_slot() {
        let tokenizer = ParallelTokenizer::with_threads(2).unwrap();
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let reads = vec![
            Ok("a + 1".to_string()),
            Err(Error::Read { path: PathBuf::from("gone.js"), source: missing }),
            Ok("'open".to_string()),
            Ok("0xFF".to_string()),
        ];

        let results = tokenize_readable(&tokenizer, reads);
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().map(Vec::len).ok(), Some(5));
        assert!(matches!(results[1], Err(Error::Read { .. })));
        assert!(matches!(results[2], Err(Error::Lex(_))));
        assert!(results[3].is_ok());
    }

    #[test]
    fn test_no_arguments_means_repl() {
        let cli = Cli::parse_from(["spacey-lex"]);
        assert!(cli.files.is_empty());
        assert!(cli.eval.is_none());
        assert!(!cli.json);
    }
}
