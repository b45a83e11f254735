//! The matcher abstraction and the ordered matcher configuration.
//!
//! A matcher pairs a cheap recognizer ("does my category start here?")
//! with a production routine that consumes the lexeme. The dispatcher asks
//! each matcher of a [`MatcherSet`] in order and lets the first one that
//! recognizes the cursor produce the token, so the order of a set is part
//! of its meaning: both comment matchers must come before the punctuator
//! matcher, which would otherwise claim the leading `/`.

use std::fmt;
use std::sync::Arc;

use super::identifier::IdentifierNameMatcher;
use super::literals::{BooleanMatcher, NullMatcher, NumeralMatcher, StringMatcher};
use super::operators::PunctuatorMatcher;
use super::trivia::{
    LineTerminatorMatcher, MultiLineCommentMatcher, SingleLineCommentMatcher, WhitespaceMatcher,
};
use super::{Context, Position, Scanner, Token, TokenKind};
use crate::error::{Error, LexError};

/// One token category: a recognizer plus a producer.
///
/// Matchers are stateless. Everything they need lives in the [`Scanner`]
/// and the [`Context`].
pub trait Matcher: fmt::Debug + Send + Sync {
    /// Stable name, used in errors and configuration.
    fn name(&self) -> &'static str;

    /// Returns true if this matcher's category starts at the cursor.
    ///
    /// Must not consume anything.
    fn recognize(&self, scanner: &Scanner<'_>) -> bool;

    /// Consumes one lexeme and returns its token.
    ///
    /// Only called after [`recognize`](Self::recognize) returned true for
    /// the same cursor.
    fn produce(&self, scanner: &mut Scanner<'_>, ctx: &Context) -> Result<Token, LexError>;
}

/// Where a token under construction began.
///
/// The start position comes from the context (the end of the previous
/// token) and the text is the source consumed since the start offset, so
/// tokens stay contiguous and lossless.
#[derive(Debug, Clone, Copy)]
pub struct TokenStart {
    offset: usize,
    position: Position,
}

impl TokenStart {
    /// Marks the start of a token at the current cursor.
    pub fn begin(scanner: &Scanner<'_>, ctx: &Context) -> Self {
        Self {
            offset: scanner.offset(),
            position: ctx.start_position(),
        }
    }

    /// The start position of the token.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Builds the token covering everything consumed since `begin`.
    pub fn finish(self, kind: TokenKind, scanner: &Scanner<'_>) -> Token {
        Token::new(
            kind,
            scanner.consumed_since(self.offset),
            self.position,
            scanner.position(),
        )
    }
}

/// Names accepted by [`MatcherSet::from_names`], in the standard order.
pub const MATCHER_NAMES: &[&str] = &[
    WhitespaceMatcher::NAME,
    LineTerminatorMatcher::NAME,
    SingleLineCommentMatcher::NAME,
    MultiLineCommentMatcher::NAME,
    BooleanMatcher::NAME,
    NullMatcher::NAME,
    IdentifierNameMatcher::NAME,
    NumeralMatcher::NAME,
    StringMatcher::NAME,
    PunctuatorMatcher::NAME,
];

/// An ordered list of matchers.
///
/// Earlier matchers win ties. The set is immutable once handed to a lexer
/// and cheap to clone, so one configuration can drive many scans.
#[derive(Debug, Clone)]
pub struct MatcherSet {
    matchers: Vec<Arc<dyn Matcher>>,
}

impl MatcherSet {
    /// Creates an empty set. A lexer with an empty set accepts only empty
    /// input.
    pub fn empty() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// The standard configuration covering every token category.
    ///
    /// Order: white space, line terminators, comments, `true`/`false`,
    /// `null`, identifiers, numerals, strings, punctuators.
    pub fn standard() -> Self {
        Self::empty()
            .with(WhitespaceMatcher)
            .with(LineTerminatorMatcher)
            .with(SingleLineCommentMatcher)
            .with(MultiLineCommentMatcher)
            .with(BooleanMatcher)
            .with(NullMatcher)
            .with(IdentifierNameMatcher)
            .with(NumeralMatcher)
            .with(StringMatcher)
            .with(PunctuatorMatcher)
    }

    /// Builds a set from matcher names, keeping the given order.
    pub fn from_names<I, S>(names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().try_fold(Self::empty(), |set, name| {
            let name = name.as_ref().trim();
            let matcher = Self::builtin(name).ok_or_else(|| Error::UnknownMatcher(name.to_string()))?;
            Ok(set.with_shared(matcher))
        })
    }

    /// Looks up one of the built-in matchers by name.
    pub fn builtin(name: &str) -> Option<Arc<dyn Matcher>> {
        let matcher: Arc<dyn Matcher> = match name {
            WhitespaceMatcher::NAME => Arc::new(WhitespaceMatcher),
            LineTerminatorMatcher::NAME => Arc::new(LineTerminatorMatcher),
            SingleLineCommentMatcher::NAME => Arc::new(SingleLineCommentMatcher),
            MultiLineCommentMatcher::NAME => Arc::new(MultiLineCommentMatcher),
            BooleanMatcher::NAME => Arc::new(BooleanMatcher),
            NullMatcher::NAME => Arc::new(NullMatcher),
            IdentifierNameMatcher::NAME => Arc::new(IdentifierNameMatcher),
            NumeralMatcher::NAME => Arc::new(NumeralMatcher),
            StringMatcher::NAME => Arc::new(StringMatcher),
            PunctuatorMatcher::NAME => Arc::new(PunctuatorMatcher),
            _ => return None,
        };
        Some(matcher)
    }

    /// Appends a matcher with the lowest priority so far.
    pub fn with(self, matcher: impl Matcher + 'static) -> Self {
        self.with_shared(Arc::new(matcher))
    }

    /// Appends an already shared matcher.
    pub fn with_shared(mut self, matcher: Arc<dyn Matcher>) -> Self {
        self.matchers.push(matcher);
        self
    }

    /// The first matcher that recognizes the cursor.
    pub fn recognize(&self, scanner: &Scanner<'_>) -> Option<&dyn Matcher> {
        self.matchers
            .iter()
            .map(|m| m.as_ref())
            .find(|m| m.recognize(scanner))
    }

    /// Matcher names in priority order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.matchers.iter().map(|m| m.name())
    }

    /// Returns true if a matcher with this name is in the set.
    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    /// Number of matchers.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Returns true if the set has no matchers.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Default for MatcherSet {
    fn default() -> Self {
        Self::standard()
    }
}
