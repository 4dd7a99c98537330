//! Whitespace-separated token reader over any `BufRead`.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Yields one token per call, reading further lines only when needed.
///
/// Blank lines are skipped, and a line holding several tokens feeds several
/// prompts.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
