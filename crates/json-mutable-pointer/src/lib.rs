//! JSON Pointer (RFC 6901) value type.
//!
//! This crate implements the pointer grammar used to address one location
//! within a JSON document: the empty pointer denotes the whole document,
//! every other pointer is a `/`-separated sequence of reference tokens with
//! `~` escaped as `~0` and `/` escaped as `~1`.
//!
//! # Example
//!
//! ```
//! use json_mutable_pointer::Pointer;
//!
//! let ptr = Pointer::parse("/foo/bar").unwrap();
//! assert_eq!(ptr.to_string(), "/foo/bar");
//! assert_eq!(ptr.parent(), Pointer::parse("/foo").unwrap());
//!
//! let tokens = ptr.tokens();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].as_str(), "foo");
//!
//! // The whole-document pointer is its own parent.
//! let root = Pointer::root();
//! assert_eq!(root.parent(), root);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

mod token;
pub use token::Token;

/// Maximum allowed pointer string length in bytes.
pub const MAX_POINTER_LENGTH: usize = 1024;

/// Unescapes a reference token.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use json_mutable_pointer::unescape_token;
///
/// assert_eq!(unescape_token("a~0b"), "a~b");
/// assert_eq!(unescape_token("c~1d"), "c/d");
/// assert_eq!(unescape_token("no-escapes"), "no-escapes");
/// ```
pub fn unescape_token(token: &str) -> String {
    if !token.contains('~') {
        return token.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    token.replace("~1", "/").replace("~0", "~")
}

/// Escapes a reference token.
///
/// Per RFC 6901, `/` is replaced with `~1` and `~` is replaced with `~0`.
///
/// # Example
///
/// ```
/// use json_mutable_pointer::escape_token;
///
/// assert_eq!(escape_token("a~b"), "a~0b");
/// assert_eq!(escape_token("c/d"), "c~1d");
/// assert_eq!(escape_token("no-escapes"), "no-escapes");
/// ```
pub fn escape_token(token: &str) -> String {
    if !token.contains('/') && !token.contains('~') {
        return token.to_string();
    }
    // Order matters: ~ must be escaped before /
    token.replace('~', "~0").replace('/', "~1")
}

/// A parsed JSON Pointer.
///
/// Immutable value type. Equality and hashing use the canonical string form,
/// so `/a~0b` and `/a~0b` are equal while `/a~0b` and `/a%7Eb` are not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pointer {
    text: String,
}

impl Pointer {
    /// The whole-document pointer (canonical form: the empty string).
    pub fn root() -> Self {
        Pointer {
            text: String::new(),
        }
    }

    /// Parse a pointer from its canonical string form.
    ///
    /// # Errors
    ///
    /// - `MissingLeadingSlash` - non-empty text that does not start with `/`
    /// - `TrailingSlash` - text other than `/` itself that ends with `/`
    /// - `TooLong` - text longer than [`MAX_POINTER_LENGTH`] bytes
    ///
    /// # Example
    ///
    /// ```
    /// use json_mutable_pointer::Pointer;
    ///
    /// assert!(Pointer::parse("").is_ok());
    /// assert!(Pointer::parse("/").is_ok());
    /// assert!(Pointer::parse("/foo/0").is_ok());
    /// assert!(Pointer::parse("foo").is_err());
    /// assert!(Pointer::parse("/foo/").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, PointerError> {
        if text.is_empty() {
            return Ok(Pointer::root());
        }
        if !text.starts_with('/') {
            return Err(PointerError::MissingLeadingSlash);
        }
        if text.len() > MAX_POINTER_LENGTH {
            return Err(PointerError::TooLong);
        }
        if text != "/" && text.ends_with('/') {
            return Err(PointerError::TrailingSlash);
        }
        Ok(Pointer {
            text: text.to_string(),
        })
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True for the whole-document pointer.
    pub fn is_root(&self) -> bool {
        self.text.is_empty()
    }

    /// The pointer with the last token stripped.
    ///
    /// Pointers with zero or one token have the whole-document pointer as
    /// their parent; the whole-document pointer is its own parent.
    pub fn parent(&self) -> Pointer {
        match self.text.rfind('/') {
            None | Some(0) => Pointer::root(),
            Some(idx) => Pointer {
                text: self.text[..idx].to_string(),
            },
        }
    }

    /// The unescaped reference tokens, in order.
    ///
    /// Only the leading empty segment is dropped, so `/` yields the single
    /// empty token (the empty-string object key) and `/a//b` yields
    /// `["a", "", "b"]`.
    pub fn tokens(&self) -> Vec<Token> {
        if self.is_root() {
            return Vec::new();
        }
        self.text[1..].split('/').map(Token::from_escaped).collect()
    }

    /// The last reference token, or `None` for the whole-document pointer.
    pub fn last_token(&self) -> Option<Token> {
        if self.is_root() {
            return None;
        }
        self.text
            .rfind('/')
            .map(|idx| Token::from_escaped(&self.text[idx + 1..]))
    }

    /// True if `other` lies strictly below this pointer.
    ///
    /// The comparison is token-wise, so `/ab` is not a prefix of `/abc`
    /// while `/a` is a prefix of `/a/b`. The whole-document pointer is a
    /// prefix of every other pointer.
    pub fn is_prefix_of(&self, other: &Pointer) -> bool {
        let mine = self.tokens();
        let theirs = other.tokens();
        mine.len() < theirs.len() && mine.iter().zip(theirs.iter()).all(|(a, b)| a == b)
    }

    /// The pointer extended by one (raw, unescaped) segment.
    ///
    /// # Example
    ///
    /// ```
    /// use json_mutable_pointer::Pointer;
    ///
    /// let ptr = Pointer::root().child("a/b").child("0");
    /// assert_eq!(ptr.as_str(), "/a~1b/0");
    /// ```
    pub fn child(&self, segment: &str) -> Pointer {
        let mut text = String::with_capacity(self.text.len() + segment.len() + 1);
        text.push_str(&self.text);
        text.push('/');
        text.push_str(&escape_token(segment));
        Pointer { text }
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Pointer {
    type Err = PointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pointer::parse(s)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("pointer must start with '/'")]
    MissingLeadingSlash,
    #[error("pointer must not end with '/'")]
    TrailingSlash,
    #[error("pointer longer than {MAX_POINTER_LENGTH} bytes")]
    TooLong,
    #[error("token '{0}' is not an array index")]
    NotAnIndex(String),
}
