// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the lexer

use std::path::PathBuf;

use crate::lexer::{Position, Token};
use thiserror::Error;

/// Result type for crate-level operations
pub type Result<T> = std::result::Result<T, Error>;

/// A failure raised while producing a single token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A matcher recognized its category but the following characters
    /// break that category's grammar.
    #[error("{matcher} : unexpected token at {position}")]
    UnexpectedToken {
        /// Name of the matcher that failed
        matcher: &'static str,
        /// Cursor position when the violation was detected
        position: Position,
    },

    /// End of input inside a string literal.
    #[error("unterminated string literal starting at {start} (input ends at {position})")]
    UnterminatedString {
        /// Where the literal starts
        start: Position,
        /// Where the input ended
        position: Position,
    },

    /// End of input inside a multi-line comment.
    #[error("unterminated comment starting at {start} (input ends at {position})")]
    UnterminatedComment {
        /// Where the comment starts
        start: Position,
        /// Where the input ended
        position: Position,
    },

    /// No matcher recognizes the input at the cursor.
    #[error("unexpected character {ch:?} at {position}")]
    UnexpectedCharacter {
        /// The offending code point
        ch: char,
        /// Where it sits
        position: Position,
    },
}

impl LexError {
    /// Create an unexpected token error
    pub fn unexpected(matcher: &'static str, position: Position) -> Self {
        Self::UnexpectedToken { matcher, position }
    }

    /// Where the error was detected.
    pub fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnterminatedString { position, .. }
            | Self::UnterminatedComment { position, .. }
            | Self::UnexpectedCharacter { position, .. } => *position,
        }
    }

    /// Returns true when more input could complete the construct.
    pub fn is_unterminated(&self) -> bool {
        matches!(
            self,
            Self::UnterminatedString { .. } | Self::UnterminatedComment { .. }
        )
    }
}

/// A failed scan: the error plus every token produced before it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error} (after {} tokens)", .tokens.len())]
pub struct ScanFailure {
    /// Tokens produced before the failure; all of them are valid
    pub tokens: Vec<Token>,
    /// The failure that halted the scan
    #[source]
    pub error: LexError,
}

/// Errors that can occur around a scan
#[derive(Debug, Error)]
pub enum Error {
    /// The scan itself failed
    #[error("{0}")]
    Lex(#[from] ScanFailure),

    /// Reading the source failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading a source file failed
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Token interchange format error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A matcher name in a configuration is not known
    #[error("unknown matcher '{0}'")]
    UnknownMatcher(String),

    /// The worker pool could not be created
    #[cfg(feature = "parallel")]
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
