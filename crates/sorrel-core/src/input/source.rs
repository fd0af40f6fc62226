use std::collections::VecDeque;
use std::io::BufRead;
use std::str::SplitWhitespace;

use tracing::warn;

/// A pull-based source of whitespace-delimited tokens.
///
/// Implementations yield tokens in input order and return `None` once the
/// underlying input is exhausted. Tokens never contain whitespace and are
/// never empty.
pub trait TokenSource {
    /// Returns the next token, or `None` when the source has run dry.
    fn next_token(&mut self) -> Option<String>;
}

/// A token source over a borrowed string.
#[derive(Debug, Clone)]
pub struct TextTokens<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> TextTokens<'a> {
    /// Creates a token source that walks `text` front to back.
    pub fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace(),
        }
    }
}

impl TokenSource for TextTokens<'_> {
    fn next_token(&mut self) -> Option<String> {
        self.tokens.next().map(str::to_string)
    }
}

/// A token source that reads a buffered stream one line at a time.
///
/// Lines are split on whitespace as they are read, so tokens flow across line
/// boundaries transparently and blank lines are skipped. A read error ends the
/// stream after logging a warning; the tokens already handed out stay valid.
pub struct StreamTokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> StreamTokens<R> {
    /// Creates a token source over `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> TokenSource for StreamTokens<R> {
    fn next_token(&mut self) -> Option<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_string)),
                Err(err) => {
                    warn!("Failed to read from parameter stream: {}", err);
                    return None;
                }
            }
        }
    }
}
