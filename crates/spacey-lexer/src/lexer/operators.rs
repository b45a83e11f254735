//! Punctuators.
//!
//! Multi-character punctuators are resolved by greedy maximal munch: the
//! first code point picks a family and each further code point is taken
//! only if it extends the token to a longer valid punctuator.
//!
//! | Starts with | Method | Variants |
//! |-------------|--------|----------|
//! | `+` | `scan_plus` | `+`, `++`, `+=` |
//! | `-` | `scan_minus` | `-`, `--`, `-=` |
//! | `*` | `scan_star` | `*`, `*=`, `**`, `**=` |
//! | `/` | `scan_slash` | `/`, `/=` |
//! | `%` | `scan_percent` | `%`, `%=` |
//! | `<` | `scan_less_than` | `<`, `<=`, `<<`, `<<=` |
//! | `>` | `scan_greater_than` | `>`, `>=`, `>>`, `>>=`, `>>>`, `>>>=` |
//! | `=` | `scan_equal` | `=`, `==`, `===`, `=>` |
//! | `!` | `scan_bang` | `!`, `!=`, `!==` |
//! | `&` | `scan_ampersand` | `&`, `&&`, `&=`, `&&=` |
//! | `\|` | `scan_pipe` | `\|`, `\|\|`, `\|=`, `\|\|=` |
//! | `^` | `scan_caret` | `^`, `^=` |
//! | `?` | `scan_question` | `?`, `??`, `??=`, `?.` |
//! | `.` | `scan_dot` | `.`, `...` |
//!
//! `?.` followed by a digit is `?` then a float (`a?.5:b`). A lone `..` is
//! an error. Comments are not punctuators; their matchers run first.
//!
//! ## Lookahead Logic
//!
//! ```text
//! // For input ">>>="
//! scan_greater_than():
//!   '>' consumed by produce
//!   eat('>')  -> at least `>>`
//!   eat('>')  -> at least `>>>`
//!   eat('=')  -> `>>>=`
//!   return UnsignedRightShiftAssign
//! ```

use super::chars::is_decimal_digit;
use super::matcher::{Matcher, TokenStart};
use super::{Context, Scanner, Token, TokenKind};
use crate::error::LexError;

/// Every code point that can start a punctuator.
const PUNCTUATOR_START: &str = "{}()[].;,<>=!+-*/%&|^~?:";

/// Operators and structural punctuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuatorMatcher;

impl PunctuatorMatcher {
    /// Configuration name.
    pub const NAME: &'static str = "punctuator";

    /// `base`, or `assign` if `=` follows.
    fn with_assign(scanner: &mut Scanner<'_>, base: TokenKind, assign: TokenKind) -> TokenKind {
        if scanner.eat('=') { assign } else { base }
    }

    fn scan_plus(scanner: &mut Scanner<'_>) -> TokenKind {
        if scanner.eat('+') {
            TokenKind::Increment
        } else {
            Self::with_assign(scanner, TokenKind::Add, TokenKind::AddAssign)
        }
    }

    fn scan_minus(scanner: &mut Scanner<'_>) -> TokenKind {
        if scanner.eat('-') {
            TokenKind::Decrement
        } else {
            Self::with_assign(scanner, TokenKind::Sub, TokenKind::SubAssign)
        }
    }

    fn scan_star(scanner: &mut Scanner<'_>) -> TokenKind {
        if scanner.eat('*') {
            Self::with_assign(scanner, TokenKind::Exponent, TokenKind::ExponentAssign)
        } else {
            Self::with_assign(scanner, TokenKind::Multiply, TokenKind::MulAssign)
        }
    }

    fn scan_slash(scanner: &mut Scanner<'_>) -> TokenKind {
        Self::with_assign(scanner, TokenKind::Quotient, TokenKind::QuoAssign)
    }

    fn scan_percent(scanner: &mut Scanner<'_>) -> TokenKind {
        Self::with_assign(scanner, TokenKind::Remainder, TokenKind::RemAssign)
    }

    fn scan_less_than(scanner: &mut Scanner<'_>) -> TokenKind {
        if scanner.eat('<') {
            Self::with_assign(scanner, TokenKind::LeftShift, TokenKind::LeftShiftAssign)
        } else {
            Self::with_assign(scanner, TokenKind::LessThan, TokenKind::LessThanOrEqual)
        }
    }

    fn scan_greater_than(scanner: &mut Scanner<'_>) -> TokenKind {
        if !scanner.eat('>') {
            return Self::with_assign(scanner, TokenKind::GreaterThan, TokenKind::GreaterThanOrEqual);
        }
        if scanner.eat('>') {
            Self::with_assign(
                scanner,
                TokenKind::UnsignedRightShift,
                TokenKind::UnsignedRightShiftAssign,
            )
        } else {
            Self::with_assign(scanner, TokenKind::RightShift, TokenKind::RightShiftAssign)
        }
    }

    fn scan_equal(scanner: &mut Scanner<'_>) -> TokenKind {
        if scanner.eat('>') {
            TokenKind::Arrow
        } else if scanner.eat('=') {
            Self::with_assign(scanner, TokenKind::Equal, TokenKind::StrictEqual)
        } else {
            TokenKind::Assign
        }
    }

    fn scan_bang(scanner: &mut Scanner<'_>) -> TokenKind {
        if scanner.eat('=') {
            Self::with_assign(scanner, TokenKind::NotEqual, TokenKind::StrictNotEqual)
        } else {
            TokenKind::Not
        }
    }

    fn scan_ampersand(scanner: &mut Scanner<'_>) -> TokenKind {
        if scanner.eat('&') {
            Self::with_assign(scanner, TokenKind::LogicalAnd, TokenKind::LogicalAndAssign)
        } else {
            Self::with_assign(scanner, TokenKind::And, TokenKind::AndAssign)
        }
    }

    fn scan_pipe(scanner: &mut Scanner<'_>) -> TokenKind {
        if scanner.eat('|') {
            Self::with_assign(scanner, TokenKind::LogicalOr, TokenKind::LogicalOrAssign)
        } else {
            Self::with_assign(scanner, TokenKind::Or, TokenKind::OrAssign)
        }
    }

    fn scan_caret(scanner: &mut Scanner<'_>) -> TokenKind {
        Self::with_assign(scanner, TokenKind::Xor, TokenKind::XorAssign)
    }

    fn scan_question(scanner: &mut Scanner<'_>) -> TokenKind {
        if scanner.eat('?') {
            return Self::with_assign(scanner, TokenKind::NullishCoalescing, TokenKind::NullishAssign);
        }
        let digit_follows = scanner.peek_at(2).is_some_and(is_decimal_digit);
        if scanner.peek() == Some('.') && !digit_follows {
            scanner.next();
            TokenKind::OptionalChaining
        } else {
            TokenKind::QuestionMark
        }
    }

    fn scan_dot(scanner: &mut Scanner<'_>) -> Result<TokenKind, LexError> {
        if !scanner.eat('.') {
            return Ok(TokenKind::Period);
        }
        if scanner.eat('.') {
            Ok(TokenKind::Ellipsis)
        } else {
            Err(LexError::unexpected(Self::NAME, scanner.position()))
        }
    }
}

impl Matcher for PunctuatorMatcher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognize(&self, scanner: &Scanner<'_>) -> bool {
        scanner.peek().is_some_and(|c| PUNCTUATOR_START.contains(c))
    }

    fn produce(&self, scanner: &mut Scanner<'_>, ctx: &Context) -> Result<Token, LexError> {
        let start = TokenStart::begin(scanner, ctx);
        let Some((ch, _)) = scanner.next() else {
            return Err(LexError::unexpected(Self::NAME, scanner.position()));
        };
        let kind = match ch {
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '~' => TokenKind::Tilde,
            '.' => Self::scan_dot(scanner)?,
            '+' => Self::scan_plus(scanner),
            '-' => Self::scan_minus(scanner),
            '*' => Self::scan_star(scanner),
            '/' => Self::scan_slash(scanner),
            '%' => Self::scan_percent(scanner),
            '<' => Self::scan_less_than(scanner),
            '>' => Self::scan_greater_than(scanner),
            '=' => Self::scan_equal(scanner),
            '!' => Self::scan_bang(scanner),
            '&' => Self::scan_ampersand(scanner),
            '|' => Self::scan_pipe(scanner),
            '^' => Self::scan_caret(scanner),
            '?' => Self::scan_question(scanner),
            _ => return Err(LexError::unexpected(Self::NAME, scanner.position())),
        };
        Ok(start.finish(kind, scanner))
    }
}
