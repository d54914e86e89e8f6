//! Reference tokens: one unescaped path segment.

use std::fmt;

use crate::{escape_token, unescape_token, PointerError};

/// The sentinel token addressing one past the end of an array.
const APPEND_SENTINEL: &str = "-";

/// One reference token, stored unescaped.
///
/// In array context a token is either the append sentinel `-` or an unsigned
/// decimal index; in object context it is the member key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// Build a token from raw (already unescaped) text.
    pub fn new(raw: impl Into<String>) -> Self {
        Token(raw.into())
    }

    /// Build a token from one escaped pointer segment.
    pub fn from_escaped(segment: &str) -> Self {
        Token(unescape_token(segment))
    }

    /// The unescaped token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the `-` append sentinel.
    pub fn is_append(&self) -> bool {
        self.0 == APPEND_SENTINEL
    }

    /// Interpret the token as an array index.
    ///
    /// The append sentinel resolves to `current_size`; anything else must
    /// parse as an unsigned decimal integer.
    ///
    /// # Example
    ///
    /// ```
    /// use json_mutable_pointer::Token;
    ///
    /// assert_eq!(Token::new("2").as_index(5).unwrap(), 2);
    /// assert_eq!(Token::new("-").as_index(5).unwrap(), 5);
    /// assert!(Token::new("x").as_index(5).is_err());
    /// ```
    pub fn as_index(&self, current_size: usize) -> Result<usize, PointerError> {
        if self.is_append() {
            return Ok(current_size);
        }
        self.0
            .parse::<usize>()
            .map_err(|_| PointerError::NotAnIndex(self.0.clone()))
    }

    /// The escaped form of the token, as it appears inside a pointer string.
    pub fn escaped(&self) -> String {
        escape_token(&self.0)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_parsing() {
        assert_eq!(Token::new("0").as_index(3).unwrap(), 0);
        assert_eq!(Token::new("12").as_index(3).unwrap(), 12);
        assert_eq!(
            Token::new("1.5").as_index(3),
            Err(PointerError::NotAnIndex("1.5".to_string()))
        );
        assert_eq!(
            Token::new("-1").as_index(3),
            Err(PointerError::NotAnIndex("-1".to_string()))
        );
        assert_eq!(
            Token::new("abc").as_index(3),
            Err(PointerError::NotAnIndex("abc".to_string()))
        );
        assert_eq!(
            Token::new("").as_index(3),
            Err(PointerError::NotAnIndex(String::new()))
        );
    }

    #[test]
    fn append_sentinel() {
        let tok = Token::new("-");
        assert!(tok.is_append());
        assert_eq!(tok.as_index(0).unwrap(), 0);
        assert_eq!(tok.as_index(7).unwrap(), 7);
        assert!(!Token::new("0").is_append());
    }

    #[test]
    fn escaping_roundtrip() {
        let tok = Token::from_escaped("a~0b~1c");
        assert_eq!(tok.as_str(), "a~b/c");
        assert_eq!(tok.escaped(), "a~0b~1c");
        assert_eq!(tok.to_string(), "a~b/c");
    }
}
