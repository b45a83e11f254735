//! End-to-end tokenizer tests over the public API.

use spacey_lexer::lexer::MATCHER_NAMES;
use spacey_lexer::{
    Error, LexError, Lexer, MatcherSet, Position, Token, TokenKind, from_json, to_json, tokenize,
    tokenize_with,
};
use spacey_macros::{assert_err, assert_matches, assert_ok};

const PROGRAM: &str = "/**\n * Sums a list.\n */\r\nconst sum = (xs) => xs.reduce((a, b) => a + b, 0);\n\
let big = 0xFFn === undefined ? 1e-3 : .5; // tail\u{2028}\
label: for (let i = 0; i < 10; i++) { i **= 2; i >>>= 1; i ??= null; }\n\
obj?.prop ?? 'fallback\\'s' || \"\\u{1F600}\\x41\";\n";

fn texts(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

fn kinds(src: &str) -> Vec<TokenKind> {
    assert_ok!(tokenize(src)).iter().map(|t| t.kind).collect()
}

fn significant(src: &str) -> Vec<(TokenKind, String)> {
    assert_ok!(tokenize(src))
        .into_iter()
        .filter(|t| !t.kind.is_trivia())
        .map(|t| (t.kind, t.text))
        .collect()
}

#[test]
fn test_lossless_and_contiguous() {
    // `0xFFn` is a bigint, which is not a numeral here.
    let source = PROGRAM.replace("0xFFn", "0xFF");
    let tokens = assert_ok!(tokenize(&source));
    assert_eq!(texts(&tokens), source);

    assert_eq!(tokens[0].start, Position::default());
    for pair in tokens.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "gap between {:?} and {:?}", pair[0], pair[1]);
    }
    assert_eq!(tokens.last().unwrap().end, Position::new(7, 0));
}

#[test]
fn test_bigint_suffix_is_rejected() {
    let failure = assert_err!(tokenize(PROGRAM));
    assert_matches!(failure.error, LexError::UnexpectedToken { matcher: "numeral", .. });
    assert!(!failure.tokens.is_empty());
    assert!(PROGRAM.starts_with(&texts(&failure.tokens)));
}

#[test]
fn test_maximal_munch() {
    assert_eq!(kinds(">>>="), vec![TokenKind::UnsignedRightShiftAssign]);
    assert_eq!(kinds(">>>>"), vec![TokenKind::UnsignedRightShift, TokenKind::GreaterThan]);
    assert_eq!(kinds("a+++b"), vec![
        TokenKind::IdentifierName,
        TokenKind::Increment,
        TokenKind::Add,
        TokenKind::IdentifierName,
    ]);
    assert_eq!(kinds("!==="), vec![TokenKind::StrictNotEqual, TokenKind::Assign]);
    assert_eq!(kinds("...."), vec![TokenKind::Ellipsis, TokenKind::Period]);
}

#[test]
fn test_lone_double_dot_fails() {
    let failure = assert_err!(tokenize("a..b"));
    assert_matches!(failure.error, LexError::UnexpectedToken { matcher: "punctuator", .. });
}

#[test]
fn test_radix_classification() {
    let cases = [
        ("0", TokenKind::Int),
        ("3", TokenKind::Int),
        ("3.14", TokenKind::Float),
        ("123e5", TokenKind::Float),
        ("123e-5", TokenKind::Float),
        ("0.5e2", TokenKind::Float),
        ("0xFF", TokenKind::Hex),
        ("0b11111111", TokenKind::Binary),
        ("0o377", TokenKind::Octal),
    ];
    for (src, kind) in cases {
        assert_eq!(kinds(src), vec![kind], "{src}");
    }
}

#[test]
fn test_bad_numerals() {
    for src in ["0b12", "0xFG", "3in"] {
        let failure = assert_err!(tokenize(src));
        assert_matches!(failure.error, LexError::UnexpectedToken { matcher: "numeral", .. });
    }
}

#[test]
fn test_string_escapes() {
    assert_eq!(kinds(r#""abc""#), vec![TokenKind::String]);
    for src in [r#""\u{g}""#, r#""\x0g""#, r#""\u1""#] {
        let failure = assert_err!(tokenize(src));
        assert_matches!(failure.error, LexError::UnexpectedToken { matcher: "string", .. });
    }
    let failure = assert_err!(tokenize("\"abc"));
    assert_matches!(failure.error, LexError::UnterminatedString { .. });
}

#[test]
fn test_missing_quote_before_newline_is_unterminated() {
    let failure = assert_err!(tokenize("let s = \"abc\n"));
    assert_matches!(failure.error, LexError::UnterminatedString { start, .. } if start == Position::new(0, 8));
    assert_eq!(texts(&failure.tokens), "let s = ");

    let tokens = assert_ok!(tokenize("\"a\nb\""));
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].end, Position::new(1, 2));
}

#[test]
fn test_radix_literal_needs_separator() {
    for src in ["0xFF)", "f(0b1)", "[0o7,", "0xA;"] {
        let failure = assert_err!(tokenize(src), "for {src:?}");
        assert_matches!(failure.error, LexError::UnexpectedToken { matcher: "numeral", .. });
    }
    assert_eq!(kinds("0xFF\n0b1 0o7"), vec![
        TokenKind::Hex,
        TokenKind::LineFeed,
        TokenKind::Binary,
        TokenKind::Space,
        TokenKind::Octal,
    ]);
    // decimal literals still end at a punctuator
    assert_eq!(kinds("f(10)").len(), 4);
}

#[test]
fn test_crlf_collapses() {
    let tokens = assert_ok!(tokenize("\r\n"));
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::CarriageReturn);
    assert_eq!(tokens[0].text, "\r\n");
    assert_eq!(tokens[0].end, Position::new(1, 0));

    let tokens = assert_ok!(tokenize("\r\r\n\n"));
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::CarriageReturn, TokenKind::CarriageReturn, TokenKind::LineFeed]);
    assert_eq!(tokens[2].end, Position::new(3, 0));
}

#[test]
fn test_identifier_escapes() {
    for src in ["\\u{000000000061}", "a"] {
        let tokens = assert_ok!(tokenize(src));
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::IdentifierName);
        assert_eq!(tokens[0].text, src);
    }
}

#[test]
fn test_reserved_words_are_identifier_names() {
    assert_eq!(significant("if (x) return this"), vec![
        (TokenKind::IdentifierName, "if".to_string()),
        (TokenKind::LeftParen, "(".to_string()),
        (TokenKind::IdentifierName, "x".to_string()),
        (TokenKind::RightParen, ")".to_string()),
        (TokenKind::IdentifierName, "return".to_string()),
        (TokenKind::IdentifierName, "this".to_string()),
    ]);
}

#[test]
fn test_division_versus_comments() {
    assert_eq!(significant("a /b/ c"), vec![
        (TokenKind::IdentifierName, "a".to_string()),
        (TokenKind::Quotient, "/".to_string()),
        (TokenKind::IdentifierName, "b".to_string()),
        (TokenKind::Quotient, "/".to_string()),
        (TokenKind::IdentifierName, "c".to_string()),
    ]);
    assert_eq!(kinds("a/=b//c"), vec![
        TokenKind::IdentifierName,
        TokenKind::QuoAssign,
        TokenKind::IdentifierName,
        TokenKind::SingleLineComment,
    ]);
}

#[test]
fn test_columns_count_code_points() {
    let tokens = assert_ok!(tokenize("'é中😀' x"));
    assert_eq!(tokens[0].end, Position::new(0, 5));
    assert_eq!(tokens[2].start, Position::new(0, 6));
}

#[test]
fn test_exhausted_input_is_explicit() {
    for (src, ch) in [("#!", '#'), ("a @b", '@'), ("`tpl`", '`')] {
        let failure = assert_err!(tokenize(src));
        assert_matches!(failure.error, LexError::UnexpectedCharacter { ch: c, .. } if c == ch);
        assert!(src.starts_with(&texts(&failure.tokens)));
    }
}

#[test]
fn test_iterator_stops_after_first_error() {
    let items: Vec<_> = Lexer::new("a # b c").collect();
    assert_eq!(items.len(), 3);
    assert!(items[..2].iter().all(Result::is_ok));
    assert!(items[2].is_err());
}

#[test]
fn test_matcher_configuration() {
    let names: Vec<_> = MatcherSet::default().names().collect();
    assert_eq!(names, MATCHER_NAMES);

    // Identifiers first: `true` is no longer a literal.
    let set = assert_ok!(MatcherSet::from_names(["identifier-name", "boolean", "whitespace"]));
    let tokens = assert_ok!(tokenize_with("true x", &set));
    assert_eq!(tokens[0].kind, TokenKind::IdentifierName);

    let err = assert_err!(MatcherSet::from_names(["template"]));
    assert_matches!(err, Error::UnknownMatcher(name) if name == "template");
}

#[test]
fn test_kind_names_round_trip() {
    for kind in TokenKind::ALL {
        assert_eq!(TokenKind::from_name(kind.as_str()), Some(*kind));
        let token = Token::new(*kind, "x", Position::default(), Position::new(0, 1));
        let json = assert_ok!(to_json(&token));
        assert_eq!(assert_ok!(from_json(&json)), token);
        assert_eq!(assert_ok!(to_json(&assert_ok!(from_json(&json)))), json);
    }
}
