//! Lineup - fractional order keys for arranging cards on a page.
//!
//! Each card carries a string token. Sorting by token gives the page order,
//! and inserting or moving cards only ever writes the tokens of the cards
//! that moved.
//!
//! # Quick Start
//!
//! ```
//! use lineup::Engine;
//! use lineup::order::Entry;
//!
//! let engine = Engine::default();
//!
//! // Append two cards, then insert one between them.
//! let first = engine.key_after(None).unwrap();
//! let last = engine.key_after(Some(&first)).unwrap();
//! let middle = engine.key_between(&first, &last).unwrap();
//!
//! let mut cards = vec![
//!     Entry::new(1, first),
//!     Entry::new(2, last),
//!     Entry::new(3, middle),
//! ];
//! engine.sort_by_token(&mut cards);
//! let ids: Vec<u32> = cards.iter().map(|card| card.id).collect();
//! assert_eq!(ids, vec![1, 3, 2]);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod order;

pub use config::Config;
pub use engine::Engine;
pub use error::Error;
pub use error::Result;
pub use order::Entry;
pub use order::Item;
pub use order::primitives::Alphabet;
pub use order::primitives::Token;
