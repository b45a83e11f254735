//! Token definitions for the JavaScript lexer.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use spacey_macros::str_enum;
use std::fmt;

/// A line/column coordinate in the source text.
///
/// Both fields are zero-based. `column` counts code points consumed since
/// the last line terminator; `line` counts line terminators, with a
/// `<CR><LF>` pair counted once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (zero-based)
    #[serde(rename = "Line")]
    pub line: usize,
    /// Column number (zero-based)
    #[serde(rename = "Column")]
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: column {}", self.line, self.column)
    }
}

/// A token produced by the lexer.
///
/// `text` is the exact slice of source the token covers, so the texts of a
/// complete token stream concatenate back to the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The source text of the token, verbatim
    #[serde(rename = "Text")]
    pub text: String,
    /// The kind of token
    #[serde(rename = "Kind")]
    pub kind: TokenKind,
    /// Where the token starts
    #[serde(rename = "Start")]
    pub start: Position,
    /// Where the token ends (exclusive)
    #[serde(rename = "End")]
    pub end: Position,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, start: Position, end: Position) -> Self {
        Self {
            text: text.into(),
            kind,
            start,
            end,
        }
    }
}

str_enum! {
    /// The different kinds of tokens in JavaScript.
    ///
    /// Each kind has a stable symbolic name (see [`TokenKind::as_str`]) that
    /// is used in the serialized form instead of a numeric tag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum TokenKind {
        // Comments
        /// `// ...`
        SingleLineComment => "SINGLE_LINE_COMMENT",
        /// `/* ... */`
        MultiLineComment => "MULTI_LINE_COMMENT",

        // Line terminators
        /// U+000A
        LineFeed => "LINE_FEED",
        /// U+000D, or a collapsed U+000D U+000A pair
        CarriageReturn => "CARRIAGE_RETURN",
        /// U+2028
        LineSeparator => "LINE_SEPARATOR",
        /// U+2029
        ParagraphSeparator => "PARAGRAPH_SEPARATOR",

        // White space
        /// U+0009
        Tab => "CHARACTER_TABULATION",
        /// U+000B
        VerticalTab => "LINE_TABULATION",
        /// U+000C
        FormFeed => "FORM_FEED",
        /// U+0020
        Space => "SPACE",
        /// U+00A0
        NoBreakSpace => "NO_BREAK_SPACE",
        /// U+FEFF
        ZeroWidthNoBreakSpace => "ZERO_WIDTH_NO_BREAK_SPACE",
        /// Any other Unicode white space code point
        OtherSpace => "OTHER_SPACE",

        /// Identifier or keyword, escapes kept verbatim
        IdentifierName => "IDENTIFIER_NAME",

        // Literals
        /// Decimal integer literal
        Int => "INT",
        /// `0b` literal
        Binary => "BINARY",
        /// `0o` literal
        Octal => "OCTAL",
        /// `0x` literal
        Hex => "HEX",
        /// Decimal literal with a fraction or exponent
        Float => "FLOAT",
        /// String literal, quotes included
        String => "STRING",
        /// `true`
        True => "TRUE",
        /// `false`
        False => "FALSE",
        /// `null`
        Null => "NULL",

        // Arithmetic
        /// +
        Add => "ADD",
        /// -
        Sub => "SUB",
        /// *
        Multiply => "MULTIPLY",
        /// /
        Quotient => "QUOTIENT",
        /// %
        Remainder => "REMAINDER",
        /// **
        Exponent => "EXPONENT",
        /// ++
        Increment => "INCREMENT",
        /// --
        Decrement => "DECREMENT",

        // Bitwise
        /// &
        And => "AND",
        /// |
        Or => "OR",
        /// ^
        Xor => "XOR",
        /// ~
        Tilde => "TILDE",
        /// <<
        LeftShift => "LEFT_SHIFT",
        /// >>
        RightShift => "RIGHT_SHIFT",
        /// >>>
        UnsignedRightShift => "UNSIGNED_RIGHT_SHIFT",

        // Logical
        /// &&
        LogicalAnd => "LOGICAL_AND",
        /// ||
        LogicalOr => "LOGICAL_OR",
        /// !
        Not => "NOT",
        /// ??
        NullishCoalescing => "NULLISH_COALESCING",

        // Comparison
        /// ==
        Equal => "EQUAL",
        /// ===
        StrictEqual => "STRICT_EQUAL",
        /// !=
        NotEqual => "NOT_EQUAL",
        /// !==
        StrictNotEqual => "STRICT_NOT_EQUAL",
        /// <
        LessThan => "LESS_THAN",
        /// >
        GreaterThan => "GREATER_THAN",
        /// <=
        LessThanOrEqual => "LESS_THAN_OR_EQUAL",
        /// >=
        GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",

        // Assignment
        /// =
        Assign => "ASSIGN",
        /// +=
        AddAssign => "ADD_ASSIGN",
        /// -=
        SubAssign => "SUB_ASSIGN",
        /// *=
        MulAssign => "MUL_ASSIGN",
        /// /=
        QuoAssign => "QUO_ASSIGN",
        /// %=
        RemAssign => "REM_ASSIGN",
        /// **=
        ExponentAssign => "EXPONENT_ASSIGN",
        /// &=
        AndAssign => "AND_ASSIGN",
        /// |=
        OrAssign => "OR_ASSIGN",
        /// ^=
        XorAssign => "XOR_ASSIGN",
        /// <<=
        LeftShiftAssign => "LEFT_SHIFT_ASSIGN",
        /// >>=
        RightShiftAssign => "RIGHT_SHIFT_ASSIGN",
        /// >>>=
        UnsignedRightShiftAssign => "UNSIGNED_RIGHT_SHIFT_ASSIGN",
        /// &&=
        LogicalAndAssign => "LOGICAL_AND_ASSIGN",
        /// ||=
        LogicalOrAssign => "LOGICAL_OR_ASSIGN",
        /// ??=
        NullishAssign => "NULLISH_ASSIGN",

        // Punctuation
        /// (
        LeftParen => "LEFT_PAREN",
        /// )
        RightParen => "RIGHT_PAREN",
        /// [
        LeftBracket => "LEFT_BRACKET",
        /// ]
        RightBracket => "RIGHT_BRACKET",
        /// {
        LeftBrace => "LEFT_BRACE",
        /// }
        RightBrace => "RIGHT_BRACE",
        /// ,
        Comma => "COMMA",
        /// .
        Period => "PERIOD",
        /// ...
        Ellipsis => "ELLIPSIS",
        /// ;
        Semicolon => "SEMICOLON",
        /// :
        Colon => "COLON",
        /// ?
        QuestionMark => "QUESTION_MARK",
        /// ?.
        OptionalChaining => "OPTIONAL_CHAINING",
        /// =>
        Arrow => "ARROW",
    }
}

impl TokenKind {
    /// Returns true for comments, white space and line terminators.
    pub fn is_trivia(&self) -> bool {
        self.is_comment() || self.is_whitespace() || self.is_line_terminator()
    }

    /// Returns true for both comment kinds.
    pub fn is_comment(&self) -> bool {
        matches!(self, Self::SingleLineComment | Self::MultiLineComment)
    }

    /// Returns true for the white space kinds.
    pub fn is_whitespace(&self) -> bool {
        matches!(
            self,
            Self::Tab
                | Self::VerticalTab
                | Self::FormFeed
                | Self::Space
                | Self::NoBreakSpace
                | Self::ZeroWidthNoBreakSpace
                | Self::OtherSpace
        )
    }

    /// Returns true for the four line terminator kinds.
    pub fn is_line_terminator(&self) -> bool {
        matches!(
            self,
            Self::LineFeed | Self::CarriageReturn | Self::LineSeparator | Self::ParagraphSeparator
        )
    }

    /// Returns true for numeric literal kinds.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Binary | Self::Octal | Self::Hex | Self::Float)
    }

    /// Returns true for every literal kind, including `true`, `false` and `null`.
    pub fn is_literal(&self) -> bool {
        self.is_numeric() || matches!(self, Self::String | Self::True | Self::False | Self::Null)
    }

    /// Returns true for operators and punctuation.
    pub fn is_punctuator(&self) -> bool {
        !self.is_trivia() && !self.is_literal() && *self != Self::IdentifierName
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TokenKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KindVisitor;

        impl Visitor<'_> for KindVisitor {
            type Value = TokenKind;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a token kind name such as \"IDENTIFIER_NAME\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TokenKind, E> {
                TokenKind::from_name(v).ok_or_else(|| E::custom(format!("unknown token kind `{v}`")))
            }
        }

        deserializer.deserialize_str(KindVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_round_trips_through_its_name() {
        for kind in TokenKind::ALL {
            let name = kind.as_str();
            assert_eq!(TokenKind::from_name(name), Some(*kind), "{name}");
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = TokenKind::ALL.iter().map(TokenKind::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TokenKind::ALL.len());
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(TokenKind::from_name("ILLEGAL"), None);
        assert_eq!(TokenKind::from_name("space"), None);
    }

    #[test]
    fn test_kind_classes_are_disjoint() {
        for kind in TokenKind::ALL {
            let classes = [kind.is_trivia(), kind.is_literal(), kind.is_punctuator()];
            let hits = classes.iter().filter(|c| **c).count();
            let expected = usize::from(*kind != TokenKind::IdentifierName);
            assert_eq!(hits, expected, "{kind}");
        }
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(2, 14).to_string(), "line 2: column 14");
    }
}
