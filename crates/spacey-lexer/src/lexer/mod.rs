//! Lexical analysis (tokenization) for JavaScript source code.
//!
//! The lexer transforms JavaScript source text into a lossless stream of
//! tokens. Trivia (white space, line terminators, comments) are tokens too,
//! so concatenating the text of every token gives back the input.
//!
//! ## Structure
//!
//! - `scanner.rs` - `Scanner`, the code point cursor
//! - `token.rs` - `Position`, `Token` and `TokenKind`
//! - `chars.rs` - code point classification
//! - `matcher.rs` - the `Matcher` trait and `MatcherSet`
//! - `context.rs` - per-scan `Context`
//! - `dispatcher.rs` - the `Lexer` loop
//!
//! ## Matchers
//!
//! - `trivia` - white space, line terminators, comments
//! - `identifier` - identifier names with `\u` escapes
//! - `literals` - numerals, strings, `true`/`false`/`null`
//! - `operators` - punctuators
//!
//! ## Usage
//!
//! ```rust
//! use spacey_lexer::lexer::{Lexer, TokenKind};
//!
//! for token in Lexer::new("let x = 42;") {
//!     let token = token.unwrap();
//!     if !token.kind.is_trivia() {
//!         println!("{} {:?}", token.kind, token.text);
//!     }
//! }
//! ```

pub mod chars;
mod context;
mod dispatcher;
mod escape;
mod matcher;
mod scanner;
mod token;

mod identifier;
mod literals;
mod operators;
mod trivia;

pub use context::Context;
pub use dispatcher::{Lexer, tokenize, tokenize_with};
pub use identifier::IdentifierNameMatcher;
pub use literals::{BooleanMatcher, NullMatcher, NumeralMatcher, StringMatcher};
pub use matcher::{MATCHER_NAMES, Matcher, MatcherSet, TokenStart};
pub use operators::PunctuatorMatcher;
pub use scanner::Scanner;
pub use token::{Position, Token, TokenKind};
pub use trivia::{
    LineTerminatorMatcher, MultiLineCommentMatcher, SingleLineCommentMatcher, WhitespaceMatcher,
};
