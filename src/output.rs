// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Token rendering shared by the CLI and the REPL.

use owo_colors::OwoColorize;
use serde::Serialize;
use spacey_lexer::{LexError, ScanFailure, Token, TokenKind};

/// Output options.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    /// Print JSON instead of a table
    pub json: bool,
    /// Include white space, line terminators and comments
    pub trivia: bool,
}

/// One file's tokens in JSON output.
#[derive(Debug, Serialize)]
pub struct FileTokens<'a> {
    #[serde(rename = "File")]
    pub file: String,
    #[serde(rename = "Tokens")]
    pub tokens: Vec<&'a Token>,
}

/// Colors `text` by the category of `kind`.
pub fn paint(kind: TokenKind, text: &str) -> String {
    if kind.is_comment() {
        text.bright_black().italic().to_string()
    } else if kind.is_trivia() {
        text.to_string()
    } else if kind.is_numeric() {
        text.yellow().to_string()
    } else if kind == TokenKind::String {
        text.green().to_string()
    } else if kind.is_literal() {
        text.blue().to_string()
    } else if kind.is_punctuator() {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

/// Filters trivia out unless the style asks for it.
pub fn visible<'a>(tokens: &'a [Token], style: Style) -> Vec<&'a Token> {
    tokens.iter().filter(|t| style.trivia || !t.kind.is_trivia()).collect()
}

/// One table row: span, kind, and the escaped text.
pub fn format_token(token: &Token) -> String {
    let span = format!(
        "{}:{}-{}:{}",
        token.start.line, token.start.column, token.end.line, token.end.column
    );
    format!(
        "{:>14}  {:30}  {}",
        span.dimmed(),
        token.kind.as_str(),
        paint(token.kind, &format!("{:?}", token.text))
    )
}

/// Prints tokens in the chosen style.
pub fn print_tokens(tokens: &[Token], style: Style) -> spacey_lexer::Result<()> {
    let tokens = visible(tokens, style);
    if style.json {
        spacey_lexer::serialize::write_json(std::io::stdout().lock(), &tokens)?;
        println!();
    } else {
        for token in tokens {
            println!("{}", format_token(token));
        }
    }
    Ok(())
}

/// Prints a scan failure: the tokens before it, then the error.
pub fn print_failure(failure: &ScanFailure, style: Style) {
    if !style.json {
        for token in visible(&failure.tokens, style) {
            println!("{}", format_token(token));
        }
    }
    print_lex_error(&failure.error);
}

/// Prints a lexer error.
pub fn print_lex_error(error: &LexError) {
    let label = if error.is_unterminated() {
        "Unterminated"
    } else {
        "SyntaxError"
    };
    eprintln!("{}: {}", label.red().bold(), error);
}
