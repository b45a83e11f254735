//! Token interchange format.
//!
//! Tokens serialize as JSON objects with the fields `Text`, `Kind`,
//! `Start` and `End` in that order. `Kind` is the symbolic name of the
//! kind and positions are `{"Line": .., "Column": ..}` objects. Output is
//! pretty-printed with one tab per indentation level:
//!
//! ```text
//! {
//! 	"Text": "// note",
//! 	"Kind": "SINGLE_LINE_COMMENT",
//! 	"Start": {
//! 		"Line": 0,
//! 		"Column": 0
//! 	},
//! 	"End": {
//! 		"Line": 0,
//! 		"Column": 7
//! 	}
//! }
//! ```
//!
//! Decoding a document and encoding the result gives back the same bytes.

use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;
use crate::lexer::Token;

/// Writes `value` as tab-indented JSON.
pub fn write_json<W, T>(writer: W, value: &T) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}

fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    write_json(&mut buf, value)?;
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Encodes one token.
pub fn to_json(token: &Token) -> Result<String> {
    to_string(token)
}

/// Encodes a token stream as a JSON array.
pub fn tokens_to_json(tokens: &[Token]) -> Result<String> {
    to_string(tokens)
}

/// Decodes one token. Unknown kind names are an error.
pub fn from_json(json: &str) -> Result<Token> {
    Ok(serde_json::from_str(json)?)
}

/// Decodes a JSON array of tokens.
pub fn tokens_from_json(json: &str) -> Result<Vec<Token>> {
    Ok(serde_json::from_str(json)?)
}
