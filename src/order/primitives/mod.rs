//! Shared primitives for the order-key engine.
//!
//! - `Alphabet`: the ordered digit set and rank comparator
//! - `Token`: the persisted sort key
//! - `digits`: exact base-`n` fixed-point arithmetic for even spacing

pub mod alphabet;
pub mod digits;
pub mod token;

// Re-exports for convenience
pub use alphabet::Alphabet;
pub use alphabet::BASE62;
pub use alphabet::Digits;
pub use token::Token;
