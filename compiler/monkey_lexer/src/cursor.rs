//! Byte cursor over the scanner's input.
//!
//! The cursor holds the byte under examination (`current`) together with its
//! offset (`position`) and the offset of the next unread byte
//! (`read_position`). Once the input is exhausted, `current` is the sentinel
//! byte `0x00` and the cursor stays parked at `position == input.len()`.
//!
//! # Interior Null Bytes
//!
//! A `0x00` byte inside the input reads the same as the sentinel. The cursor
//! distinguishes them by comparing `position` against the input length: a
//! null at `position < len` is an interior null, a null at `position >= len`
//! is end of input.

/// Cursor over a source string, advancing one byte at a time.
///
/// # Invariant
///
/// `read_position == position + 1` at all times after construction, and
/// `position >= input.len()` implies `current == 0`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    input: &'src str,
    /// Offset of `current`.
    position: usize,
    /// Offset of the next unread byte.
    read_position: usize,
    /// Byte at `position`, or `0` past the end.
    current: u8,
}

impl<'src> Cursor<'src> {
    /// Create a cursor primed on the first byte of `input`.
    ///
    /// For empty input, `current` is already the sentinel.
    pub fn new(input: &'src str) -> Self {
        let mut cursor = Self {
            input,
            position: 0,
            read_position: 0,
            current: 0,
        };
        cursor.advance();
        cursor
    }

    /// Returns the byte at the current position, `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Returns the byte one position ahead of current without moving.
    ///
    /// Returns the sentinel when the lookahead falls past the input.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.read_position)
    }

    /// Advance the cursor by one byte.
    ///
    /// At end of input this is a no-op: the cursor never moves past
    /// `input.len()`.
    #[inline]
    pub fn advance(&mut self) {
        if self.read_position > self.input.len() {
            return;
        }
        self.position = self.read_position;
        self.read_position += 1;
        self.current = self.byte_at(self.position);
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    ///
    /// Keeps `position` on a character boundary, so slices taken afterwards
    /// are valid `&str`.
    #[inline]
    pub fn advance_char(&mut self) {
        for _ in 0..Self::utf8_char_width(self.current) {
            self.advance();
        }
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, otherwise the loop never leaves the
    /// sentinel. All byte classes the scanner uses satisfy this.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current) {
            self.advance();
        }
    }

    /// Advance past spaces, tabs, newlines, and carriage returns.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'));
    }

    /// Returns `true` once the cursor has moved past the last input byte.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Current byte offset in the input.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Offset of the next unread byte.
    #[inline]
    pub fn read_position(&self) -> usize {
        self.read_position
    }

    /// Extract the input from `start` up to (excluding) the current position.
    ///
    /// # Contract
    ///
    /// `start` must be a position this cursor previously reported, so both
    /// ends fall on character boundaries.
    pub fn slice_from(&self, start: usize) -> &'src str {
        debug_assert!(
            start <= self.position,
            "slice start {start} exceeds position {}",
            self.position
        );
        &self.input[start..self.position]
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.input.as_bytes().get(index).copied().unwrap_or(0)
    }
}
