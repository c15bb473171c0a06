//! Error types for order-key operations.
//!
//! Generation over well-formed tokens never fails. Errors are reserved for
//! misuse: tokens or alphabets that break the encoding, and move requests
//! that cannot be mapped onto the sequence they were computed against.

use thiserror::Error;

use crate::order::primitives::token::Token;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Structured error type for the order-key engine.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The character set cannot be used as a digit alphabet.
    #[error("invalid alphabet: {reason}")]
    InvalidAlphabet { reason: String },

    /// A token must carry at least one digit.
    #[error("token is empty")]
    EmptyToken,

    /// A token contains a character outside the alphabet.
    #[error("token {token:?} contains {character:?} at position {position}, which is not in the alphabet")]
    InvalidCharacter {
        token: String,
        character: char,
        position: usize,
    },

    /// A token ends with the alphabet's lowest digit, leaving no room below it.
    #[error("token {token:?} ends with the alphabet's minimum character")]
    TrailingMinimum { token: String },

    /// A checked generation call received bounds that are equal or inverted.
    #[error("bounds are not ordered: {low} must sort strictly before {high}")]
    UnorderedBounds { low: Token, high: Token },

    /// The move target does not index into the unselected remainder.
    #[error("target index {index} out of bounds for {len} remaining items")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The same item was selected twice.
    #[error("item at selection index {index} is selected more than once")]
    DuplicateSelection { index: usize },

    /// Both anchors around the target carry the same token.
    #[error("anchors around the target share token {token}; rebalance before moving")]
    CollidingAnchors { token: Token },

    /// A configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl Error {
    /// Check if this error describes a malformed token.
    pub fn is_token_error(&self) -> bool {
        return matches!(
            self,
            Error::EmptyToken | Error::InvalidCharacter { .. } | Error::TrailingMinimum { .. }
        );
    }

    /// Check if this error came out of move planning.
    pub fn is_plan_error(&self) -> bool {
        return matches!(
            self,
            Error::IndexOutOfBounds { .. }
                | Error::DuplicateSelection { .. }
                | Error::CollidingAnchors { .. }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_token_errors() {
        assert!(Error::EmptyToken.is_token_error());
        assert!(Error::TrailingMinimum { token: "a0".into() }.is_token_error());
        assert!(!Error::EmptyToken.is_plan_error());
    }

    #[test]
    fn classifies_plan_errors() {
        let err = Error::IndexOutOfBounds { index: 4, len: 2 };
        assert!(err.is_plan_error());
        assert!(!err.is_token_error());
        assert_eq!(err.to_string(), "target index 4 out of bounds for 2 remaining items");
    }
}
