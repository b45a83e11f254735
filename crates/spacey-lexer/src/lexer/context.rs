//! Per-scan state threaded through every production call.

use super::{MatcherSet, Position, Token};

/// The state of one scan.
///
/// Owned by the dispatcher for the lifetime of a scan and lent to each
/// matcher by shared reference. Never shared between scans.
#[derive(Debug, Clone, Default)]
pub struct Context {
    matchers: MatcherSet,
    last_token: Option<Token>,
}

impl Context {
    /// Creates a context for a scan driven by `matchers`.
    pub fn new(matchers: MatcherSet) -> Self {
        Self {
            matchers,
            last_token: None,
        }
    }

    /// The active matchers, in priority order.
    pub fn matchers(&self) -> &MatcherSet {
        &self.matchers
    }

    /// The most recently emitted token.
    pub fn last_token(&self) -> Option<&Token> {
        self.last_token.as_ref()
    }

    /// Where the next token starts: the end of the last one, or the origin.
    pub fn start_position(&self) -> Position {
        self.last_token.as_ref().map(|t| t.end).unwrap_or_default()
    }

    pub(crate) fn record(&mut self, token: &Token) {
        self.last_token = Some(token.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_fresh_context_starts_at_origin() {
        let ctx = Context::default();
        assert!(ctx.last_token().is_none());
        assert_eq!(ctx.start_position(), Position::default());
    }

    #[test]
    fn test_record_seeds_next_start() {
        let mut ctx = Context::new(MatcherSet::standard());
        let token = Token::new(TokenKind::LineFeed, "\n", Position::new(0, 4), Position::new(1, 0));
        ctx.record(&token);
        assert_eq!(ctx.start_position(), Position::new(1, 0));
        assert_eq!(ctx.last_token(), Some(&token));
    }
}
