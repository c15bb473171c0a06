//! Order keys for sequences of cards.
//!
//! Every card owns one `Token`. Sorting cards by token gives their order on
//! the page, and moving a card only ever rewrites that card's token. The
//! modules here are pure functions over tokens; callers keep their own
//! records and write the returned tokens back.
//!
//! - `keygen`: new tokens before, after, or between existing ones
//! - `plan`: new tokens for a batch of cards dropped at one position
//! - `rebalance`: evenly spaced replacements once tokens degenerate
//! - `sort`: deterministic ordering, including colliding tokens

use std::hash::Hash;

use serde::Deserialize;
use serde::Serialize;

pub mod keygen;
pub mod plan;
pub mod primitives;
pub mod rebalance;
pub mod sort;

use primitives::Token;

/// A caller record that occupies a position in a sequence.
pub trait Item {
    /// Identity of the record; also the default tie-break for equal tokens.
    type Id: Clone + Eq + Hash + Ord;

    fn id(&self) -> &Self::Id;

    fn token(&self) -> &Token;
}

impl<T: Item> Item for &T {
    type Id = T::Id;

    fn id(&self) -> &T::Id {
        return (**self).id();
    }

    fn token(&self) -> &Token {
        return (**self).token();
    }
}

/// A bare `(id, token)` record for callers without their own item type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry<I> {
    pub id: I,
    pub token: Token,
}

impl<I> Entry<I> {
    pub fn new(id: I, token: Token) -> Entry<I> {
        return Entry { id, token };
    }
}

impl<I: Clone + Eq + Hash + Ord> Item for Entry<I> {
    type Id = I;

    fn id(&self) -> &I {
        return &self.id;
    }

    fn token(&self) -> &Token {
        return &self.token;
    }
}
