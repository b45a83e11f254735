//! Code point classification.
//!
//! Pure predicates over a single `char`. Anything that needs lookahead
//! lives with the matcher that uses it.

use unicode_xid::UnicodeXID;

/// U+005C, introduces escape sequences.
pub const BACKSLASH: char = '\\';

/// U+200C ZERO WIDTH NON-JOINER
pub const ZWNJ: char = '\u{200C}';

/// U+200D ZERO WIDTH JOINER
pub const ZWJ: char = '\u{200D}';

/// U+2019 RIGHT SINGLE QUOTATION MARK, accepted as a single-character escape.
pub const TYPOGRAPHIC_QUOTE: char = '\u{2019}';

/// Checks if a character can start an identifier.
pub fn is_id_start(ch: char) -> bool {
    ch == '$' || ch == '_' || ch.is_xid_start()
}

/// Checks if a character can continue an identifier.
pub fn is_id_continue(ch: char) -> bool {
    ch == '$' || ch == '_' || ch == ZWNJ || ch == ZWJ || ch.is_xid_continue()
}

/// The four ECMAScript line terminators.
pub fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\u{000A}' | '\u{000D}' | '\u{2028}' | '\u{2029}')
}

/// White space that is not a line terminator.
pub fn is_whitespace(ch: char) -> bool {
    match ch {
        '\u{0009}' | '\u{000B}' | '\u{000C}' | '\u{0020}' | '\u{00A0}' | '\u{FEFF}' => true,
        _ => ch.is_whitespace() && !is_line_terminator(ch),
    }
}

/// Separates tokens without belonging to either side.
pub fn is_token_separator(ch: char) -> bool {
    is_whitespace(ch) || is_line_terminator(ch)
}

/// `0`-`9`
pub fn is_decimal_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// `0`-`9`, `a`-`f`, `A`-`F`
pub fn is_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

/// `0`-`7`
pub fn is_octal_digit(ch: char) -> bool {
    matches!(ch, '0'..='7')
}

/// `0` or `1`
pub fn is_binary_digit(ch: char) -> bool {
    matches!(ch, '0' | '1')
}

/// Escapes that stand for exactly one character after the backslash.
pub fn is_single_char_escape(ch: char) -> bool {
    matches!(ch, '"' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' | BACKSLASH | TYPOGRAPHIC_QUOTE)
}

/// Characters that introduce an escape with its own grammar, or that are a
/// single-character escape.
pub fn is_escape_char(ch: char) -> bool {
    is_single_char_escape(ch) || is_decimal_digit(ch) || ch == 'x' || ch == 'u'
}

/// Any code point that is passed through verbatim after a backslash.
pub fn is_non_escape_char(ch: char) -> bool {
    !is_escape_char(ch)
}
