//! Escape grammar shared by identifiers and strings.
//!
//! Escapes are validated and consumed but never decoded; token text keeps
//! them verbatim.

use super::Scanner;
use super::chars::is_hex_digit;

/// Largest code point a braced `\u{...}` escape may name.
const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Why an escape could not be consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EscapeError {
    /// Input ended inside the escape.
    EndOfInput,
    /// A code point broke the escape grammar.
    Malformed,
}

/// Consumes the body of a `\u` escape. The cursor must sit just past the `u`.
///
/// Accepts exactly four hex digits, or `{` one or more hex digits `}` whose
/// value does not exceed U+10FFFF. Leading zeros are allowed in the braced
/// form.
pub(crate) fn consume_unicode_escape(scanner: &mut Scanner<'_>) -> Result<(), EscapeError> {
    match scanner.next() {
        None => Err(EscapeError::EndOfInput),
        Some(('{', _)) => consume_braced(scanner),
        Some((ch, _)) if is_hex_digit(ch) => consume_hex_digits(scanner, 3),
        Some(_) => Err(EscapeError::Malformed),
    }
}

/// Consumes exactly `count` hex digits.
pub(crate) fn consume_hex_digits(scanner: &mut Scanner<'_>, count: usize) -> Result<(), EscapeError> {
    for _ in 0..count {
        match scanner.next() {
            None => return Err(EscapeError::EndOfInput),
            Some((ch, _)) if is_hex_digit(ch) => {}
            Some(_) => return Err(EscapeError::Malformed),
        }
    }
    Ok(())
}

fn consume_braced(scanner: &mut Scanner<'_>) -> Result<(), EscapeError> {
    let mut value: u32 = 0;
    let mut digits = 0;
    loop {
        match scanner.next() {
            None => return Err(EscapeError::EndOfInput),
            Some(('}', _)) if digits > 0 && value <= MAX_CODE_POINT => return Ok(()),
            Some(('}', _)) => return Err(EscapeError::Malformed),
            Some((ch, _)) => {
                let digit = ch.to_digit(16).ok_or(EscapeError::Malformed)?;
                value = value.saturating_mul(16).saturating_add(digit);
                digits += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consume(body: &str) -> (Result<(), EscapeError>, usize) {
        let mut scanner = Scanner::new(body);
        let result = consume_unicode_escape(&mut scanner);
        (result, scanner.offset())
    }

    #[test]
    fn test_four_digit_form() {
        assert_eq!(consume("0041"), (Ok(()), 4));
        assert_eq!(consume("00e9z"), (Ok(()), 4));
        assert_eq!(consume("004").0, Err(EscapeError::EndOfInput));
        assert_eq!(consume("00g1").0, Err(EscapeError::Malformed));
        assert_eq!(consume("z").0, Err(EscapeError::Malformed));
    }

    #[test]
    fn test_braced_form() {
        assert_eq!(consume("{61}"), (Ok(()), 4));
        assert_eq!(consume("{000000000061}").0, Ok(()));
        assert_eq!(consume("{10FFFF}").0, Ok(()));
        assert_eq!(consume("{110000}").0, Err(EscapeError::Malformed));
        assert_eq!(consume("{FFFFFFFFFFFF}").0, Err(EscapeError::Malformed));
        assert_eq!(consume("{}").0, Err(EscapeError::Malformed));
        assert_eq!(consume("{g}").0, Err(EscapeError::Malformed));
        assert_eq!(consume("{61").0, Err(EscapeError::EndOfInput));
    }

    #[test]
    fn test_hex_digits() {
        let mut scanner = Scanner::new("7fz");
        assert_eq!(consume_hex_digits(&mut scanner, 2), Ok(()));
        assert_eq!(consume_hex_digits(&mut scanner, 1), Err(EscapeError::Malformed));
    }
}
