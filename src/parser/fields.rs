//! Token-level helpers for AGF lines.

use crate::config::SENTINEL;
use crate::error::{ConvertError, Result};

/// True for the catalog's "not provided" token.
pub fn is_sentinel(token: &str) -> bool {
    token.is_empty() || token == SENTINEL
}

/// Parse a numeric token.
pub fn parse_number(token: &str, line: usize, field: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| ConvertError::InvalidNumber {
            line,
            field: field.to_string(),
            value: token.to_string(),
        })
}

/// Parse a numeric token that may be the `-` sentinel.
pub fn parse_optional_number(token: &str, line: usize, field: &str) -> Result<Option<f64>> {
    if is_sentinel(token) {
        Ok(None)
    } else {
        parse_number(token, line, field).map(Some)
    }
}

/// A whitespace-split AGF line: a tag followed by its fields.
#[derive(Debug)]
pub struct TaggedLine<'a> {
    /// 1-based line number in the catalog.
    pub line: usize,
    tokens: Vec<&'a str>,
}

impl<'a> TaggedLine<'a> {
    /// Split a line, `None` for blank lines.
    pub fn split(text: &'a str, line: usize) -> Option<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.is_empty() {
            None
        } else {
            Some(Self { line, tokens })
        }
    }

    pub fn tag(&self) -> &'a str {
        self.tokens[0]
    }

    /// Number of tokens, tag included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }

    /// Tokens after `start`, possibly empty.
    pub fn rest(&self, start: usize) -> &[&'a str] {
        self.tokens.get(start..).unwrap_or(&[])
    }

    /// Token at `index`, or a missing-field error naming `field`.
    pub fn require(&self, index: usize, field: &str) -> Result<&'a str> {
        self.get(index).ok_or_else(|| ConvertError::MissingField {
            line: self.line,
            tag: self.tag().to_string(),
            field: field.to_string(),
        })
    }

    pub fn number(&self, index: usize, field: &str) -> Result<f64> {
        parse_number(self.require(index, field)?, self.line, field)
    }

    /// Required token that may hold the `-` sentinel.
    pub fn optional_number(&self, index: usize, field: &str) -> Result<Option<f64>> {
        parse_optional_number(self.require(index, field)?, self.line, field)
    }

    /// All tokens from `start` on, parsed as numbers.
    pub fn numbers_from(&self, start: usize, field: &str) -> Result<Vec<f64>> {
        self.rest(start)
            .iter()
            .map(|token| parse_number(token, self.line, field))
            .collect()
    }
}
