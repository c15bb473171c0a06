//! Deterministic ordering of items by token.
//!
//! Tokens decide the order. Equal tokens only show up after a caller-level
//! race, and until the rebalancer repairs them they are ordered by a
//! secondary key so repeated renders agree.

use super::Item;

/// Sort items by token, breaking ties by id.
pub fn sort_by_token<T: Item>(items: &mut [T]) {
    items.sort_by(|a, b| a.token().cmp(b.token()).then_with(|| a.id().cmp(b.id())));
}

/// Sort items by token, breaking ties by a caller supplied key such as a
/// creation timestamp.
pub fn sort_by_token_with<T, K, F>(items: &mut [T], tiebreak: F)
where
    T: Item,
    K: Ord,
    F: Fn(&T) -> K,
{
    items.sort_by(|a, b| a.token().cmp(b.token()).then_with(|| tiebreak(a).cmp(&tiebreak(b))));
}

/// Whether items are in non-decreasing token order.
pub fn is_sorted_by_token<T: Item>(items: &[T]) -> bool {
    return items.windows(2).all(|pair| pair[0].token() <= pair[1].token());
}
