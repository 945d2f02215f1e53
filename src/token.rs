//! Whitespace tokenizer for ACL lines.

use std::iter::Peekable;
use std::str::SplitWhitespace;

/// Marker that comments out a configuration line.
pub const COMMENT_MARKER: char = '!';

/// Check whether a line is commented out.
///
/// Leading indentation is ignored.
pub fn is_commented(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_MARKER)
}

/// Token stream over a single line.
///
/// A leading comment marker is stripped before tokenizing, whether it is
/// attached to the first word (`!permit`) or stands alone (`! permit`).
pub struct Tokens<'a> {
    commented: bool,
    inner: Peekable<SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    /// Tokenize a line.
    pub fn new(line: &'a str) -> Self {
        let trimmed = line.trim_start();
        let (commented, body) = match trimmed.strip_prefix(COMMENT_MARKER) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        Self {
            commented,
            inner: body.split_whitespace().peekable(),
        }
    }

    /// Whether the line carried a comment marker.
    pub fn is_commented(&self) -> bool {
        self.commented
    }

    /// Look at the next token without consuming it.
    pub fn peek(&mut self) -> Option<&'a str> {
        self.inner.peek().copied()
    }

    /// Consume the next token if it equals `keyword`.
    pub fn eat(&mut self, keyword: &str) -> bool {
        if self.peek() == Some(keyword) {
            self.inner.next();
            true
        } else {
            false
        }
    }

    /// Consume the next token if `pred` accepts it.
    pub fn next_if(&mut self, pred: impl FnOnce(&str) -> bool) -> Option<&'a str> {
        self.inner.next_if(|tok| pred(*tok))
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Check whether a token is made only of digits and dots.
///
/// This is the loose shape of an IPv4 literal; whether the octets are in
/// range is decided when the token is resolved.
pub fn is_dotted(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}
