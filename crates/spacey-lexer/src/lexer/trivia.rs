//! White space, line terminators, and comments.
//!
//! | Matcher | Starts on | Kinds |
//! |---------|-----------|-------|
//! | `WhitespaceMatcher` | any white space code point | `CHARACTER_TABULATION` .. `OTHER_SPACE` |
//! | `LineTerminatorMatcher` | LF, CR, LS, PS | `LINE_FEED`, `CARRIAGE_RETURN`, `LINE_SEPARATOR`, `PARAGRAPH_SEPARATOR` |
//! | `SingleLineCommentMatcher` | `//` | `SINGLE_LINE_COMMENT` |
//! | `MultiLineCommentMatcher` | `/*` | `MULTI_LINE_COMMENT` |
//!
//! White space and line terminators produce one token per code point, except
//! that `<CR><LF>` becomes a single `CARRIAGE_RETURN` token.

use super::chars::{is_line_terminator, is_whitespace};
use super::matcher::{Matcher, TokenStart};
use super::{Context, Scanner, Token, TokenKind};
use crate::error::LexError;

/// One white space code point.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceMatcher;

impl WhitespaceMatcher {
    /// Configuration name.
    pub const NAME: &'static str = "whitespace";

    fn kind_of(ch: char) -> TokenKind {
        match ch {
            '\u{0009}' => TokenKind::Tab,
            '\u{000B}' => TokenKind::VerticalTab,
            '\u{000C}' => TokenKind::FormFeed,
            '\u{0020}' => TokenKind::Space,
            '\u{00A0}' => TokenKind::NoBreakSpace,
            '\u{FEFF}' => TokenKind::ZeroWidthNoBreakSpace,
            _ => TokenKind::OtherSpace,
        }
    }
}

impl Matcher for WhitespaceMatcher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognize(&self, scanner: &Scanner<'_>) -> bool {
        scanner.peek().is_some_and(is_whitespace)
    }

    fn produce(&self, scanner: &mut Scanner<'_>, ctx: &Context) -> Result<Token, LexError> {
        let start = TokenStart::begin(scanner, ctx);
        match scanner.next() {
            Some((ch, _)) if is_whitespace(ch) => Ok(start.finish(Self::kind_of(ch), scanner)),
            _ => Err(LexError::unexpected(Self::NAME, scanner.position())),
        }
    }
}

/// One line terminator, or a `<CR><LF>` pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineTerminatorMatcher;

impl LineTerminatorMatcher {
    /// Configuration name.
    pub const NAME: &'static str = "line-terminator";
}

impl Matcher for LineTerminatorMatcher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognize(&self, scanner: &Scanner<'_>) -> bool {
        scanner.peek().is_some_and(is_line_terminator)
    }

    fn produce(&self, scanner: &mut Scanner<'_>, ctx: &Context) -> Result<Token, LexError> {
        let start = TokenStart::begin(scanner, ctx);
        let kind = match scanner.next() {
            Some(('\n', _)) => TokenKind::LineFeed,
            Some(('\r', _)) => {
                scanner.eat('\n');
                TokenKind::CarriageReturn
            }
            Some(('\u{2028}', _)) => TokenKind::LineSeparator,
            Some(('\u{2029}', _)) => TokenKind::ParagraphSeparator,
            _ => return Err(LexError::unexpected(Self::NAME, scanner.position())),
        };
        Ok(start.finish(kind, scanner))
    }
}

/// `//` through the end of the line, terminator excluded.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleLineCommentMatcher;

impl SingleLineCommentMatcher {
    /// Configuration name.
    pub const NAME: &'static str = "single-line-comment";
}

impl Matcher for SingleLineCommentMatcher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognize(&self, scanner: &Scanner<'_>) -> bool {
        scanner.lookahead_is("//")
    }

    fn produce(&self, scanner: &mut Scanner<'_>, ctx: &Context) -> Result<Token, LexError> {
        let start = TokenStart::begin(scanner, ctx);
        if !(scanner.eat('/') && scanner.eat('/')) {
            return Err(LexError::unexpected(Self::NAME, scanner.position()));
        }
        scanner.eat_while(|c| !is_line_terminator(c));
        Ok(start.finish(TokenKind::SingleLineComment, scanner))
    }
}

/// `/*` through the first `*/`, possibly spanning lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiLineCommentMatcher;

impl MultiLineCommentMatcher {
    /// Configuration name.
    pub const NAME: &'static str = "multi-line-comment";
}

impl Matcher for MultiLineCommentMatcher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognize(&self, scanner: &Scanner<'_>) -> bool {
        scanner.lookahead_is("/*")
    }

    fn produce(&self, scanner: &mut Scanner<'_>, ctx: &Context) -> Result<Token, LexError> {
        let start = TokenStart::begin(scanner, ctx);
        if !(scanner.eat('/') && scanner.eat('*')) {
            return Err(LexError::unexpected(Self::NAME, scanner.position()));
        }
        loop {
            if scanner.lookahead_is("*/") {
                scanner.next();
                scanner.next();
                return Ok(start.finish(TokenKind::MultiLineComment, scanner));
            }
            if scanner.next().is_none() {
                return Err(LexError::UnterminatedComment {
                    start: start.position(),
                    position: scanner.position(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Position;
    use spacey_macros::{assert_err, assert_matches, assert_ok};

    fn scan_single(matcher: &dyn Matcher, src: &str) -> Result<Token, LexError> {
        let mut scanner = Scanner::new(src);
        assert!(matcher.recognize(&scanner), "{} should recognize {src:?}", matcher.name());
        matcher.produce(&mut scanner, &Context::default())
    }

    #[test]
    fn test_whitespace_kinds() {
        let cases = [
            ("\t", TokenKind::Tab),
            ("\u{000B}", TokenKind::VerticalTab),
            ("\u{000C}", TokenKind::FormFeed),
            (" ", TokenKind::Space),
            ("\u{00A0}", TokenKind::NoBreakSpace),
            ("\u{FEFF}", TokenKind::ZeroWidthNoBreakSpace),
            ("\u{3000}", TokenKind::OtherSpace),
        ];
        for (src, kind) in cases {
            let token = assert_ok!(scan_single(&WhitespaceMatcher, src));
            assert_eq!(token.kind, kind, "{src:?}");
            assert_eq!(token.text, src);
            assert_eq!(token.end, Position::new(0, 1));
        }
    }

    #[test]
    fn test_whitespace_one_code_point_at_a_time() {
        let token = assert_ok!(scan_single(&WhitespaceMatcher, "   x"));
        assert_eq!(token.text, " ");
    }

    #[test]
    fn test_whitespace_ignores_line_terminators() {
        assert!(!WhitespaceMatcher.recognize(&Scanner::new("\n")));
        assert!(!WhitespaceMatcher.recognize(&Scanner::new("")));
    }

    #[test]
    fn test_line_terminator_kinds() {
        let cases = [
            ("\n", TokenKind::LineFeed),
            ("\r", TokenKind::CarriageReturn),
            ("\u{2028}", TokenKind::LineSeparator),
            ("\u{2029}", TokenKind::ParagraphSeparator),
        ];
        for (src, kind) in cases {
            let token = assert_ok!(scan_single(&LineTerminatorMatcher, src));
            assert_eq!(token.kind, kind);
            assert_eq!(token.end, Position::new(1, 0));
        }
    }

    #[test]
    fn test_crlf_is_one_token() {
        let token = assert_ok!(scan_single(&LineTerminatorMatcher, "\r\n"));
        assert_eq!(token.kind, TokenKind::CarriageReturn);
        assert_eq!(token.text, "\r\n");
        assert_eq!(token.end, Position::new(1, 0));
    }

    #[test]
    fn test_lf_cr_stays_two_breaks() {
        let token = assert_ok!(scan_single(&LineTerminatorMatcher, "\n\r"));
        assert_eq!(token.kind, TokenKind::LineFeed);
        assert_eq!(token.text, "\n");
    }

    #[test]
    fn test_single_line_comment() {
        let token = assert_ok!(scan_single(&SingleLineCommentMatcher, "// hello\nworld"));
        assert_eq!(token.kind, TokenKind::SingleLineComment);
        assert_eq!(token.text, "// hello");
        assert_eq!(token.end, Position::new(0, 8));

        let token = assert_ok!(scan_single(&SingleLineCommentMatcher, "//"));
        assert_eq!(token.text, "//");
    }

    #[test]
    fn test_single_line_comment_stops_at_any_terminator() {
        for terminator in ["\r", "\u{2028}", "\u{2029}"] {
            let src = format!("// a{terminator}b");
            let token = assert_ok!(scan_single(&SingleLineCommentMatcher, &src));
            assert_eq!(token.text, "// a");
        }
    }

    #[test]
    fn test_multi_line_comment() {
        let token = assert_ok!(scan_single(&MultiLineCommentMatcher, "/* a\n * b\r\n */ x"));
        assert_eq!(token.kind, TokenKind::MultiLineComment);
        assert_eq!(token.text, "/* a\n * b\r\n */");
        assert_eq!(token.end, Position::new(2, 3));
    }

    #[test]
    fn test_multi_line_comment_closes_early() {
        let token = assert_ok!(scan_single(&MultiLineCommentMatcher, "/**/*/"));
        assert_eq!(token.text, "/**/");
    }

    #[test]
    fn test_unterminated_comment() {
        for src in ["/*", "/* open", "/*/", "/* *"] {
            let err = assert_err!(scan_single(&MultiLineCommentMatcher, src));
            assert_matches!(err, LexError::UnterminatedComment { start, .. } if start == Position::default());
        }
    }

    #[test]
    fn test_comment_recognizers_need_two_chars() {
        assert!(!SingleLineCommentMatcher.recognize(&Scanner::new("/")));
        assert!(!MultiLineCommentMatcher.recognize(&Scanner::new("/")));
        assert!(!SingleLineCommentMatcher.recognize(&Scanner::new("/*")));
        assert!(!MultiLineCommentMatcher.recognize(&Scanner::new("//")));
    }
}
