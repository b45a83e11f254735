//! Identifier names.
//!
//! An identifier name is one start unit followed by any number of continue
//! units, where a unit is either a literal code point or a `\u` escape:
//!
//! ```text
//! IdentifierName ::= Start Continue*
//! Start          ::= ID_Start | '$' | '_' | '\u' Escape
//! Continue       ::= ID_Continue | '$' | '_' | ZWNJ | ZWJ | '\u' Escape
//! Escape         ::= Hex Hex Hex Hex | '{' Hex+ '}'
//! ```
//!
//! Escapes are validated but kept verbatim: `\u0061bc` produces a token
//! whose text is `\u0061bc`, not `abc`. Reserved words are identifier names
//! too; telling them apart is the parser's job.

use super::chars::{BACKSLASH, is_id_continue, is_id_start};
use super::escape::consume_unicode_escape;
use super::matcher::{Matcher, TokenStart};
use super::{Context, Scanner, Token, TokenKind};
use crate::error::LexError;

/// Identifier names, including reserved words.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierNameMatcher;

impl IdentifierNameMatcher {
    /// Configuration name.
    pub const NAME: &'static str = "identifier-name";

    /// Returns true if a `\u` escape starts at the cursor.
    fn at_escape(scanner: &Scanner<'_>) -> bool {
        scanner.peek() == Some(BACKSLASH) && scanner.peek_at(2) == Some('u')
    }

    /// Consumes one unit whose literal form must satisfy `class`.
    fn consume_unit(scanner: &mut Scanner<'_>, class: fn(char) -> bool) -> Result<(), LexError> {
        let error = |scanner: &Scanner<'_>| LexError::unexpected(Self::NAME, scanner.position());
        match scanner.next() {
            Some((BACKSLASH, _)) => {
                if !scanner.eat('u') {
                    return Err(error(scanner));
                }
                consume_unicode_escape(scanner).map_err(|_| error(scanner))
            }
            Some((ch, _)) if class(ch) => Ok(()),
            _ => Err(error(scanner)),
        }
    }
}

impl Matcher for IdentifierNameMatcher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognize(&self, scanner: &Scanner<'_>) -> bool {
        scanner.peek().is_some_and(is_id_start) || Self::at_escape(scanner)
    }

    fn produce(&self, scanner: &mut Scanner<'_>, ctx: &Context) -> Result<Token, LexError> {
        let start = TokenStart::begin(scanner, ctx);
        Self::consume_unit(scanner, is_id_start)?;
        loop {
            if Self::at_escape(scanner) || scanner.peek().is_some_and(is_id_continue) {
                Self::consume_unit(scanner, is_id_continue)?;
            } else {
                break;
            }
        }
        Ok(start.finish(TokenKind::IdentifierName, scanner))
    }
}
