//! The code point cursor that matchers read from.

use super::Position;
use super::chars::is_line_terminator;

/// Cursor state restored by [`Scanner::rewind`].
#[derive(Debug, Clone, Copy)]
struct Checkpoint {
    offset: usize,
    position: Position,
    after_cr: bool,
}

/// A buffered cursor over JavaScript source text.
///
/// The scanner hands out one code point at a time, can look ahead any
/// number of code points without consuming them, and can step back over
/// the last code point it returned. It also keeps the line/column of the
/// cursor so matchers never have to count positions themselves.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    offset: usize,
    position: Position,
    /// The last consumed code point was a carriage return.
    after_cr: bool,
    previous: Option<Checkpoint>,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            position: Position::default(),
            after_cr: false,
            previous: None,
        }
    }

    /// Consumes the code point under the cursor.
    ///
    /// Returns the code point and its UTF-8 width in bytes, or `None` at
    /// end of input.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<(char, usize)> {
        let ch = self.rest().chars().next()?;
        let width = ch.len_utf8();

        self.previous = Some(self.checkpoint());
        self.offset += width;
        self.advance_position(ch);

        Some((ch, width))
    }

    /// Returns the code point under the cursor without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.peek_at(1)
    }

    /// Returns the `n`-th code point ahead of the cursor (1-based) without
    /// consuming anything.
    ///
    /// `None` means fewer than `n` code points remain, which callers treat
    /// as "no match".
    pub fn peek_at(&self, n: usize) -> Option<char> {
        let index = n.checked_sub(1)?;
        self.rest().chars().nth(index)
    }

    /// Returns true if the next code points spell out `expected`.
    pub fn lookahead_is(&self, expected: &str) -> bool {
        self.rest().starts_with(expected)
    }

    /// Consumes the next code point if it is `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Consumes code points while `pred` holds; returns how many.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.peek().is_some_and(&pred) {
            self.next();
            count += 1;
        }
        count
    }

    /// Un-consumes the last code point returned by [`next`](Self::next).
    ///
    /// Only one step is remembered; a second call without an intervening
    /// `next` returns `None` and leaves the cursor where it is.
    pub fn rewind(&mut self) -> Option<char> {
        let checkpoint = self.previous.take()?;
        let ch = self.source[checkpoint.offset..self.offset].chars().next();

        self.offset = checkpoint.offset;
        self.position = checkpoint.position;
        self.after_cr = checkpoint.after_cr;

        ch
    }

    /// The line/column of the cursor.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The byte offset of the cursor.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns true once every code point has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// The source consumed since byte offset `start`.
    pub fn consumed_since(&self, start: usize) -> &'a str {
        &self.source[start.min(self.offset)..self.offset]
    }

    /// The unconsumed remainder of the source.
    pub fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            offset: self.offset,
            position: self.position,
            after_cr: self.after_cr,
        }
    }

    fn advance_position(&mut self, ch: char) {
        if ch == '\n' && self.after_cr {
            // Second half of <CR><LF>; the break was already counted.
            self.after_cr = false;
        } else if is_line_terminator(ch) {
            self.position.line += 1;
            self.position.column = 0;
            self.after_cr = ch == '\r';
        } else {
            self.position.column += 1;
            self.after_cr = false;
        }
    }
}
