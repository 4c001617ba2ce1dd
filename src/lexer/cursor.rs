//! Code-point cursor over rule-set source text
//!
//! The grammar is ambiguous at the token level, so parsing works directly on
//! code points with saved-position backtracking instead of a token stream.

use crate::util::span::Position;

/// Source cursor with position tracking
#[derive(Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

/// Saved cursor state for backtracking
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint {
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the source
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Get current byte offset
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get current position
    #[inline]
    pub fn position(&self) -> Position {
        Position::with_offset(self.line, self.column, self.offset)
    }

    /// Get the unconsumed remainder of the source
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.src[self.offset..]
    }

    /// Check if at end of input
    #[inline]
    pub fn at_end(&self) -> bool {
        self.offset >= self.src.len()
    }

    /// Peek at next code point
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Peek at the code point after next
    #[inline]
    pub fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Check whether the remaining input starts with `s`
    #[inline]
    pub fn starts_with(&self, s: &str) -> bool {
        self.rest().starts_with(s)
    }

    /// Advance past the next code point
    pub fn bump(&mut self) -> Option<char> {
        match self.peek() {
            Some('\n') => {
                self.offset += 1;
                self.line += 1;
                self.column = 1;
                Some('\n')
            }
            Some(c) => {
                self.offset += c.len_utf8();
                self.column += 1;
                Some(c)
            }
            None => None,
        }
    }

    /// Consume `c` if it is next
    #[inline]
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume `s` if the remaining input starts with it
    pub fn eat_str(&mut self, s: &str) -> bool {
        if self.starts_with(s) {
            for _ in s.chars() {
                self.bump();
            }
            true
        } else {
            false
        }
    }

    /// Save the cursor state
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Restore a previously saved state
    #[inline]
    pub fn restore(&mut self, cp: Checkpoint) {
        self.offset = cp.offset;
        self.line = cp.line;
        self.column = cp.column;
    }

    /// Skip whitespace that is insignificant inside a rule (space and tab)
    pub fn skip_inline(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t')) {
            self.bump();
        }
    }

    /// Skip a `#` comment through end of line (exclusive of the terminator)
    pub fn skip_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    /// Skip whitespace and comment lines between rules
    ///
    /// Newlines and carriage returns are skippable only here, at rule
    /// boundaries; comments at a boundary trail the previous separator.
    pub fn skip_boundary(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\n' | '\r') => {
                    self.bump();
                }
                Some('#') => self.skip_comment(),
                _ => break,
            }
        }
    }
}
