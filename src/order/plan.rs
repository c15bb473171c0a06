//! Move planning for one or more selected items.
//!
//! Dragging a multi-selection, importing a batch, or inserting a single card
//! are all the same request: give these `k` items new tokens so they land,
//! in the given order, at one position of the sequence that remains once
//! they are taken out. Only the selected items get new tokens; the other
//! `n - k` items keep theirs. The cost is `k` key generations whatever `n`
//! is.
//!
//! # Example
//!
//! ```
//! use lineup::order::Entry;
//! use lineup::order::plan::Planner;
//!
//! let sequence: Vec<Entry<&str>> = ["a", "b", "c", "d"]
//!     .iter()
//!     .map(|t| Entry::new(*t, t.parse().unwrap()))
//!     .collect();
//!
//! // Move the first two cards between "c" and "d".
//! let plan = Planner::default().plan_move(&["a", "b"], 1, &sequence).unwrap();
//! let a = plan.token_for(&"a").unwrap();
//! let b = plan.token_for(&"b").unwrap();
//! assert!("c" < a.as_str() && a < b && b.as_str() < "d");
//! ```

use rustc_hash::FxHashSet;
use tracing::debug;
use tracing::warn;

use crate::error::Error;
use crate::error::Result;
use super::Item;
use super::keygen::KeyGen;
use super::primitives::Token;
use super::sort::is_sorted_by_token;

/// One item's new token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move<I> {
    pub id: I,
    pub token: Token,
}

/// New tokens for a batch of items, in selection order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovePlan<I> {
    moves: Vec<Move<I>>,
}

impl<I> MovePlan<I> {
    /// A plan that changes nothing.
    pub fn empty() -> MovePlan<I> {
        return MovePlan { moves: Vec::new() };
    }

    pub fn len(&self) -> usize {
        return self.moves.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.moves.is_empty();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move<I>> {
        return self.moves.iter();
    }

    /// Length of the longest new token, 0 for an empty plan.
    pub fn max_token_len(&self) -> usize {
        return self.moves.iter().map(|m| m.token.len()).max().unwrap_or(0);
    }

    pub fn into_moves(self) -> Vec<Move<I>> {
        return self.moves;
    }
}

impl<I: Eq> MovePlan<I> {
    /// The new token for an item, if the plan moves it.
    pub fn token_for(&self, id: &I) -> Option<&Token> {
        return self.moves.iter().find(|m| &m.id == id).map(|m| &m.token);
    }
}

impl<I> IntoIterator for MovePlan<I> {
    type Item = Move<I>;
    type IntoIter = std::vec::IntoIter<Move<I>>;

    fn into_iter(self) -> Self::IntoIter {
        return self.moves.into_iter();
    }
}

impl<'a, I> IntoIterator for &'a MovePlan<I> {
    type Item = &'a Move<I>;
    type IntoIter = std::slice::Iter<'a, Move<I>>;

    fn into_iter(self) -> Self::IntoIter {
        return self.moves.iter();
    }
}

/// Computes move plans.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Planner {
    keygen: KeyGen,
}

impl Planner {
    pub fn new(keygen: KeyGen) -> Planner {
        return Planner { keygen };
    }

    /// Plan moving `selected`, in the given order, to index `target` of the
    /// sequence with the selected items removed.
    ///
    /// `sequence` must be sorted by token. Selected ids that are not in the
    /// sequence are treated as new items and simply receive tokens.
    pub fn plan_move<T: Item>(
        &self,
        selected: &[T::Id],
        target: usize,
        sequence: &[T],
    ) -> Result<MovePlan<T::Id>> {
        debug_assert!(is_sorted_by_token(sequence), "plan_move requires a sorted sequence");
        if selected.is_empty() {
            return Ok(MovePlan::empty());
        }

        let mut chosen: FxHashSet<&T::Id> = FxHashSet::default();
        chosen.reserve(selected.len());
        for (index, id) in selected.iter().enumerate() {
            if !chosen.insert(id) {
                return Err(Error::DuplicateSelection { index });
            }
        }

        let remaining: Vec<&T> = sequence.iter().filter(|item| !chosen.contains(item.id())).collect();
        if target > remaining.len() {
            return Err(Error::IndexOutOfBounds {
                index: target,
                len: remaining.len(),
            });
        }

        if already_in_place(selected, target, sequence) {
            debug!(count = selected.len(), target, "selection already in place");
            return Ok(MovePlan::empty());
        }

        let low = target.checked_sub(1).map(|i| remaining[i].token());
        let high = remaining.get(target).map(|item| item.token());
        if let (Some(low), Some(high)) = (low, high) {
            if low == high {
                warn!(token = %low, target, "anchors collide, sequence needs a rebalance");
                return Err(Error::CollidingAnchors { token: low.clone() });
            }
        }

        let tokens = self.keygen.keys_between(low, high, selected.len())?;
        let moves: Vec<Move<T::Id>> = selected
            .iter()
            .cloned()
            .zip(tokens)
            .map(|(id, token)| Move { id, token })
            .collect();

        let plan = MovePlan { moves };
        debug!(
            count = plan.len(),
            target,
            max_token_len = plan.max_token_len(),
            "planned move",
        );
        return Ok(plan);
    }

    /// Plan inserting `ids` as new items at index `target` of `sequence`.
    pub fn plan_insert<T: Item>(
        &self,
        ids: &[T::Id],
        target: usize,
        sequence: &[T],
    ) -> Result<MovePlan<T::Id>> {
        return self.plan_move(ids, target, sequence);
    }
}

/// A contiguous block dropped back at its own position. The block starts
/// at `target` in the full sequence exactly when `target` unselected items
/// precede it.
fn already_in_place<T: Item>(selected: &[T::Id], target: usize, sequence: &[T]) -> bool {
    let Some(block) = sequence.get(target..target + selected.len()) else {
        return false;
    };
    return block.iter().zip(selected).all(|(item, id)| item.id() == id);
}
