// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # spacey-lexer
//!
//! A lossless JavaScript tokenizer.
//!
//! ## Overview
//!
//! The lexer turns JavaScript source text into a stream of tokens that
//! covers every code point of the input:
//! - Identifier names, with `\u` escapes kept verbatim
//! - Numeric literals in four radices plus floats, strings, `true`,
//!   `false` and `null`
//! - Punctuators, resolved by maximal munch
//! - Comments, white space and line terminators
//!
//! Every token carries its start and end line/column, and the end of one
//! token is the start of the next. Lexing is driven by an ordered
//! [`MatcherSet`] the caller can replace.
//!
//! ## Quick Start
//!
//! ```rust
//! use spacey_lexer::{TokenKind, tokenize};
//!
//! let tokens = tokenize("x >>>= 1; // shift").unwrap();
//! assert_eq!(tokens[2].kind, TokenKind::UnsignedRightShiftAssign);
//!
//! let text: String = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(text, "x >>>= 1; // shift");
//! ```
//!
//! ## Features
//!
//! - `async` - [`AsyncTokenizer`] reads and tokenizes files on tokio
//! - `parallel` - [`ParallelTokenizer`] tokenizes many sources on a rayon
//!   thread pool

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod lexer;
pub mod serialize;

#[cfg(any(feature = "async", feature = "parallel"))]
pub mod async_tokenizer;

use std::io::Read;

pub use error::{Error, LexError, Result, ScanFailure};
pub use lexer::{Lexer, Matcher, MatcherSet, Position, Token, TokenKind, tokenize, tokenize_with};
pub use serialize::{from_json, to_json, tokens_from_json, tokens_to_json};

#[cfg(feature = "async")]
pub use async_tokenizer::AsyncTokenizer;
#[cfg(feature = "parallel")]
pub use async_tokenizer::ParallelTokenizer;

/// Reads UTF-8 source from `reader` and tokenizes it with `matchers`.
pub fn tokenize_reader<R: Read>(mut reader: R, matchers: &MatcherSet) -> Result<Vec<Token>> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    Ok(tokenize_with(&source, matchers)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_reader() {
        let tokens = tokenize_reader("a\nb".as_bytes(), &MatcherSet::standard()).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].start, Position::new(1, 0));
    }

    #[test]
    fn test_tokenize_reader_rejects_invalid_utf8() {
        let err = tokenize_reader(&[0x61, 0xFF][..], &MatcherSet::standard()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_scan_failure_converts() {
        let err = tokenize_reader("@".as_bytes(), &MatcherSet::standard()).unwrap_err();
        assert!(matches!(err, Error::Lex(ScanFailure { error: LexError::UnexpectedCharacter { ch: '@', .. }, .. })));
    }
}
