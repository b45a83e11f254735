//! The dispatch loop that turns source text into tokens.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::{Context, MatcherSet, Position, Scanner, Token};
use crate::error::{LexError, ScanFailure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    Done,
    Failed,
}

/// Tokenizes one source text.
///
/// Each step asks the matchers of the set in order; the first that
/// recognizes the cursor produces the next token. The lexer is a fused
/// iterator: after the input is exhausted or the first error it yields
/// `None` forever. Stopping early is just dropping it.
///
/// ```
/// use spacey_lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<_> = Lexer::new("a >>>= 1")
///     .map(|t| t.map(|t| t.kind))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(kinds[2], TokenKind::UnsignedRightShiftAssign);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    scanner: Scanner<'a>,
    ctx: Context,
    state: State,
    emitted: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the standard matcher set.
    pub fn new(source: &'a str) -> Self {
        Self::with_matchers(source, MatcherSet::standard())
    }

    /// Creates a lexer driven by `matchers`, in their order.
    pub fn with_matchers(source: &'a str, matchers: MatcherSet) -> Self {
        debug!(bytes = source.len(), matchers = matchers.len(), "scan started");
        Self {
            scanner: Scanner::new(source),
            ctx: Context::new(matchers),
            state: State::Scanning,
            emitted: 0,
        }
    }

    /// The scan context.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// The cursor position.
    pub fn position(&self) -> Position {
        self.scanner.position()
    }

    /// Returns true once the lexer will yield nothing more.
    pub fn is_finished(&self) -> bool {
        self.state != State::Scanning
    }

    /// Produces the next token.
    ///
    /// Returns `None` at the end of input and after a failure.
    pub fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        if self.state != State::Scanning {
            return None;
        }

        let Some(matcher) = self.ctx.matchers().recognize(&self.scanner) else {
            return self.exhausted();
        };
        let name = matcher.name();
        let offset = self.scanner.offset();

        let result = match matcher.produce(&mut self.scanner, &self.ctx) {
            // A matcher that consumes nothing would loop forever.
            Ok(_) if self.scanner.offset() == offset => {
                Err(LexError::unexpected(name, self.scanner.position()))
            }
            other => other,
        };

        match result {
            Ok(token) => {
                trace!(kind = %token.kind, start = %token.start, end = %token.end, "token");
                self.ctx.record(&token);
                self.emitted += 1;
                Some(Ok(token))
            }
            Err(error) => Some(Err(self.fail(error))),
        }
    }

    /// Collects every token, or the first error together with the tokens
    /// produced before it.
    pub fn tokenize(self) -> Result<Vec<Token>, ScanFailure> {
        let mut tokens = Vec::new();
        for item in self {
            match item {
                Ok(token) => tokens.push(token),
                Err(error) => return Err(ScanFailure { tokens, error }),
            }
        }
        Ok(tokens)
    }

    /// No matcher recognizes the cursor.
    fn exhausted(&mut self) -> Option<Result<Token, LexError>> {
        match self.scanner.peek() {
            None => {
                self.state = State::Done;
                debug!(tokens = self.emitted, "scan finished");
                None
            }
            Some(ch) => Some(Err(self.fail(LexError::UnexpectedCharacter {
                ch,
                position: self.scanner.position(),
            }))),
        }
    }

    fn fail(&mut self, error: LexError) -> LexError {
        self.state = State::Failed;
        debug!(tokens = self.emitted, %error, "scan failed");
        error
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenizes `source` with the standard matcher set.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ScanFailure> {
    Lexer::new(source).tokenize()
}

/// Tokenizes `source` with a caller-supplied matcher set.
pub fn tokenize_with(source: &str, matchers: &MatcherSet) -> Result<Vec<Token>, ScanFailure> {
    Lexer::with_matchers(source, matchers.clone()).tokenize()
}
