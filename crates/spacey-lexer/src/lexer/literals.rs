//! Numeric, string, boolean, and null literals.
//!
//! ## Numeric literals
//!
//! | Form | Example | Kind |
//! |------|---------|------|
//! | decimal integer | `314` | `INT` |
//! | fraction | `3.14`, `.5` | `FLOAT` |
//! | exponent | `123e5`, `123e-5`, `0.5e2` | `FLOAT` |
//! | `0b` / `0B` | `0b11111111` | `BINARY` |
//! | `0o` / `0O` | `0o377` | `OCTAL` |
//! | `0x` / `0X` | `0xFF` | `HEX` |
//!
//! A prefixed radix literal ends only at white space, a line terminator or
//! the end of input, so `0b12`, `0xFG` and `0xFF)` are errors. A decimal
//! literal must not run into an identifier (`3in` is an error) but a
//! punctuator ends it, as in `3+x`.
//!
//! ## String literals
//!
//! Either quote opens a string; the same quote closes it. After a
//! backslash:
//!
//! | Escape | Rule |
//! |--------|------|
//! | `\"` `\b` `\f` `\n` `\r` `\t` `\v` `\\` `\’` | verbatim |
//! | `\0` | a decimal digit must follow |
//! | `\xNN` | exactly two hex digits |
//! | `\uNNNN`, `\u{N...}` | four hex digits, or braced up to `10FFFF` |
//! | `\` + line terminator | line continuation |
//! | `\1` .. `\9` | error |
//! | anything else | passed through |
//!
//! Raw line terminators are part of the body; only the end of input
//! leaves a string unterminated.
//!
//! ## Keyword literals
//!
//! `true`, `false` and `null` are recognized only when no identifier code
//! point follows, so `nullable` stays an identifier name.

use super::chars::{
    BACKSLASH, is_binary_digit, is_decimal_digit, is_hex_digit, is_id_continue, is_id_start,
    is_non_escape_char, is_octal_digit, is_single_char_escape, is_token_separator,
};
use super::escape::{EscapeError, consume_hex_digits, consume_unicode_escape};
use super::matcher::{Matcher, TokenStart};
use super::{Context, Scanner, Token, TokenKind};
use crate::error::LexError;

/// Integer, float, and prefixed radix literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumeralMatcher;

impl NumeralMatcher {
    /// Configuration name.
    pub const NAME: &'static str = "numeral";

    fn error(scanner: &Scanner<'_>) -> LexError {
        LexError::unexpected(Self::NAME, scanner.position())
    }

    fn scan_radix(
        scanner: &mut Scanner<'_>,
        kind: TokenKind,
        is_digit: fn(char) -> bool,
    ) -> Result<TokenKind, LexError> {
        // `0` and the radix letter
        scanner.next();
        scanner.next();
        if scanner.eat_while(is_digit) == 0 {
            return Err(Self::error(scanner));
        }
        // the separator is left for the next token
        match scanner.peek() {
            Some(ch) if !is_token_separator(ch) => Err(Self::error(scanner)),
            _ => Ok(kind),
        }
    }

    fn scan_decimal(scanner: &mut Scanner<'_>) -> Result<TokenKind, LexError> {
        let mut kind = TokenKind::Int;

        scanner.eat_while(is_decimal_digit);
        if scanner.eat('.') {
            kind = TokenKind::Float;
            if scanner.eat_while(is_decimal_digit) == 0 {
                return Err(Self::error(scanner));
            }
        }
        if scanner.eat('e') || scanner.eat('E') {
            kind = TokenKind::Float;
            if !scanner.eat('+') {
                scanner.eat('-');
            }
            if scanner.eat_while(is_decimal_digit) == 0 {
                return Err(Self::error(scanner));
            }
        }
        Ok(kind)
    }

    /// The code point after a decimal literal must not glue onto it.
    fn check_boundary(scanner: &Scanner<'_>) -> Result<(), LexError> {
        match scanner.peek() {
            Some(ch) if ch == BACKSLASH || is_id_start(ch) || is_id_continue(ch) => {
                Err(Self::error(scanner))
            }
            _ => Ok(()),
        }
    }
}

impl Matcher for NumeralMatcher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognize(&self, scanner: &Scanner<'_>) -> bool {
        match scanner.peek() {
            Some('.') => scanner.peek_at(2).is_some_and(is_decimal_digit),
            Some(ch) => is_decimal_digit(ch),
            None => false,
        }
    }

    fn produce(&self, scanner: &mut Scanner<'_>, ctx: &Context) -> Result<Token, LexError> {
        let start = TokenStart::begin(scanner, ctx);
        let kind = match (scanner.peek(), scanner.peek_at(2)) {
            (Some('0'), Some('b' | 'B')) => Self::scan_radix(scanner, TokenKind::Binary, is_binary_digit)?,
            (Some('0'), Some('o' | 'O')) => Self::scan_radix(scanner, TokenKind::Octal, is_octal_digit)?,
            (Some('0'), Some('x' | 'X')) => Self::scan_radix(scanner, TokenKind::Hex, is_hex_digit)?,
            _ => {
                let kind = Self::scan_decimal(scanner)?;
                Self::check_boundary(scanner)?;
                kind
            }
        };
        Ok(start.finish(kind, scanner))
    }
}

/// Single- and double-quoted strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringMatcher;

impl StringMatcher {
    /// Configuration name.
    pub const NAME: &'static str = "string";

    /// Consumes one escape; the backslash is already consumed.
    fn scan_escape(scanner: &mut Scanner<'_>, start: &TokenStart) -> Result<(), LexError> {
        let unterminated = |scanner: &Scanner<'_>| LexError::UnterminatedString {
            start: start.position(),
            position: scanner.position(),
        };
        let from_escape = |err: EscapeError, scanner: &Scanner<'_>| match err {
            EscapeError::EndOfInput => unterminated(scanner),
            EscapeError::Malformed => LexError::unexpected(Self::NAME, scanner.position()),
        };

        let Some((ch, _)) = scanner.next() else {
            return Err(unterminated(scanner));
        };
        match ch {
            '0' => match scanner.next() {
                None => Err(unterminated(scanner)),
                Some((digit, _)) if is_decimal_digit(digit) => Ok(()),
                Some(_) => Err(LexError::unexpected(Self::NAME, scanner.position())),
            },
            'x' => consume_hex_digits(scanner, 2).map_err(|e| from_escape(e, scanner)),
            'u' => consume_unicode_escape(scanner).map_err(|e| from_escape(e, scanner)),
            // line continuation
            '\r' => {
                scanner.eat('\n');
                Ok(())
            }
            ch if is_single_char_escape(ch) || is_non_escape_char(ch) => Ok(()),
            _ => Err(LexError::unexpected(Self::NAME, scanner.position())),
        }
    }
}

impl Matcher for StringMatcher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognize(&self, scanner: &Scanner<'_>) -> bool {
        matches!(scanner.peek(), Some('"' | '\''))
    }

    fn produce(&self, scanner: &mut Scanner<'_>, ctx: &Context) -> Result<Token, LexError> {
        let start = TokenStart::begin(scanner, ctx);
        let Some((quote, _)) = scanner.next() else {
            return Err(LexError::unexpected(Self::NAME, scanner.position()));
        };
        loop {
            match scanner.next() {
                None => {
                    return Err(LexError::UnterminatedString {
                        start: start.position(),
                        position: scanner.position(),
                    });
                }
                Some((ch, _)) if ch == quote => break,
                Some((BACKSLASH, _)) => Self::scan_escape(scanner, &start)?,
                Some(_) => {}
            }
        }
        Ok(start.finish(TokenKind::String, scanner))
    }
}

/// Returns true if `word` sits at the cursor as a whole word.
fn keyword_at(scanner: &Scanner<'_>, word: &str) -> bool {
    scanner.lookahead_is(word)
        && !scanner
            .peek_at(word.chars().count() + 1)
            .is_some_and(|c| c == BACKSLASH || is_id_continue(c))
}

/// Consumes exactly `word` and builds its token.
fn produce_keyword(
    matcher: &'static str,
    word: &str,
    kind: TokenKind,
    scanner: &mut Scanner<'_>,
    ctx: &Context,
) -> Result<Token, LexError> {
    let start = TokenStart::begin(scanner, ctx);
    for _ in word.chars() {
        scanner.next();
    }
    let token = start.finish(kind, scanner);
    if token.text != word {
        return Err(LexError::unexpected(matcher, scanner.position()));
    }
    Ok(token)
}

/// `true` and `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanMatcher;

impl BooleanMatcher {
    /// Configuration name.
    pub const NAME: &'static str = "boolean";
}

impl Matcher for BooleanMatcher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognize(&self, scanner: &Scanner<'_>) -> bool {
        keyword_at(scanner, "true") || keyword_at(scanner, "false")
    }

    fn produce(&self, scanner: &mut Scanner<'_>, ctx: &Context) -> Result<Token, LexError> {
        if scanner.lookahead_is("true") {
            produce_keyword(Self::NAME, "true", TokenKind::True, scanner, ctx)
        } else {
            produce_keyword(Self::NAME, "false", TokenKind::False, scanner, ctx)
        }
    }
}

/// `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMatcher;

impl NullMatcher {
    /// Configuration name.
    pub const NAME: &'static str = "null";
}

impl Matcher for NullMatcher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognize(&self, scanner: &Scanner<'_>) -> bool {
        keyword_at(scanner, "null")
    }

    fn produce(&self, scanner: &mut Scanner<'_>, ctx: &Context) -> Result<Token, LexError> {
        produce_keyword(Self::NAME, "null", TokenKind::Null, scanner, ctx)
    }
}
