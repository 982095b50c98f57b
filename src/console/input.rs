//! Whitespace tokenizer over a line-oriented input stream.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use tracing::{instrument, trace};

/// Reads whitespace-delimited tokens, one input line at a time.
///
/// Tokens left over from the current line are buffered so that a malformed
/// token can take the rest of its line down with it via [`TokenReader::discard_line`].
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// Blank lines are skipped.
    #[instrument(skip(self), fields(pending = self.pending.len()))]
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                trace!(%token, "Token read");
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            // Undecodable bytes become U+FFFD and fail to parse as a move.
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }

    /// Drops whatever is left of the current line.
    pub fn discard_line(&mut self) {
        if !self.pending.is_empty() {
            trace!(discarded = self.pending.len(), "Discarding rest of line");
        }
        self.pending.clear();
    }
}
