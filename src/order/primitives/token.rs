//! Position tokens.
//!
//! A token is the only ordering information an item persists. It is an
//! immutable string compared byte-wise; since alphabets are ascending in
//! byte value this is the same as comparing digit ranks.

use std::borrow::Borrow;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use super::alphabet::Alphabet;

/// An opaque sort key.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Wrap a string already known to be a valid token.
    pub(crate) fn from_trusted(text: String) -> Token {
        return Token(text);
    }

    /// The token text.
    #[inline]
    pub fn as_str(&self) -> &str {
        return &self.0;
    }

    /// Number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        return self.0.len();
    }

    /// Tokens produced by this crate are never empty; deserialized ones may be.
    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.0.is_empty();
    }

    /// Unwrap into the underlying string.
    pub fn into_string(self) -> String {
        return self.0;
    }
}

/// Parses against the default base62 alphabet.
impl FromStr for Token {
    type Err = Error;

    fn from_str(s: &str) -> Result<Token, Error> {
        return Alphabet::base62().parse(s);
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        return &self.0;
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        return &self.0;
    }
}

impl From<Token> for String {
    fn from(token: Token) -> String {
        return token.0;
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f.write_str(&self.0);
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "Token({:?})", self.0);
    }
}
