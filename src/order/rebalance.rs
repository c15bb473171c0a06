//! Maintenance passes that replace degenerate tokens.
//!
//! Local generation never renumbers neighbours, so dense insertion makes
//! tokens longer, and a caller-level race can persist two items with the
//! same token. The rebalancer detects both and assigns a fresh, evenly
//! spaced set of tokens that keeps the items' relative order exactly.
//!
//! A pass over `n` items costs O(n L) for tokens of length `L`, which is
//! `O(log n)` after the pass. Passes only run when `inspect` reports
//! degeneration, so the cost is amortized over many cheap edits.

use tracing::debug;

use crate::error::Error;
use crate::error::Result;
use super::Item;
use super::primitives::Alphabet;
use super::primitives::Token;
use super::primitives::digits;

/// Default length above which tokens count as degenerate.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 24;

/// What `inspect` found in a sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Health {
    /// Number of tokens inspected.
    pub len: usize,
    /// Length of the longest token.
    pub longest: usize,
    /// Indices whose token equals the previous one.
    pub collisions: Vec<usize>,
    /// Indices whose token sorts before the previous one.
    pub inversions: Vec<usize>,
    /// Whether `longest` exceeds the configured threshold.
    pub too_long: bool,
}

impl Health {
    pub fn needs_rebalance(&self) -> bool {
        return self.too_long || !self.collisions.is_empty() || !self.inversions.is_empty();
    }
}

/// Reassigns evenly spaced tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rebalancer {
    alphabet: Alphabet,
    max_token_len: usize,
}

impl Default for Rebalancer {
    fn default() -> Rebalancer {
        return Rebalancer::new(Alphabet::default(), DEFAULT_MAX_TOKEN_LEN);
    }
}

impl Rebalancer {
    pub fn new(alphabet: Alphabet, max_token_len: usize) -> Rebalancer {
        return Rebalancer {
            alphabet,
            max_token_len,
        };
    }

    pub fn max_token_len(&self) -> usize {
        return self.max_token_len;
    }

    /// Check a sequence, in its current order, for degeneration.
    pub fn inspect<T: Item>(&self, items: &[T]) -> Health {
        let mut health = Health {
            len: items.len(),
            ..Health::default()
        };

        for (i, item) in items.iter().enumerate() {
            health.longest = health.longest.max(item.token().len());
            if i == 0 {
                continue;
            }
            let prev = items[i - 1].token();
            if item.token() == prev {
                health.collisions.push(i);
            } else if item.token() < prev {
                health.inversions.push(i);
            }
        }

        health.too_long = health.longest > self.max_token_len;
        return health;
    }

    /// `count` evenly spaced tokens strictly inside `(low, high)`; a missing
    /// bound opens that side to the edge of the token range.
    pub fn spread(&self, low: Option<&Token>, high: Option<&Token>, count: usize) -> Result<Vec<Token>> {
        let lo = low.map(|t| self.alphabet.decode(t.as_str())).transpose()?;
        let hi = high.map(|t| self.alphabet.decode(t.as_str())).transpose()?;
        if let (Some(low), Some(high), Some(lo_digits), Some(hi_digits)) = (low, high, &lo, &hi) {
            if lo_digits >= hi_digits {
                return Err(Error::UnorderedBounds {
                    low: low.clone(),
                    high: high.clone(),
                });
            }
        }

        let spaced = digits::spread(self.alphabet.base(), lo.as_deref(), hi.as_deref(), count);
        return Ok(spaced.iter().map(|d| self.alphabet.encode(d)).collect());
    }

    /// Fresh tokens across the whole range for items already in their
    /// intended order. The result only depends on the number of items, so a
    /// second pass changes nothing.
    pub fn rebalance<'a, T: Item>(&self, items: &'a [T]) -> Vec<(&'a T, Token)> {
        let spaced = digits::spread(self.alphabet.base(), None, None, items.len());
        let tokens: Vec<Token> = spaced.iter().map(|d| self.alphabet.encode(d)).collect();
        debug!(
            items = items.len(),
            token_len = tokens.last().map_or(0, |t| t.len()),
            "rebalanced sequence",
        );
        return items.iter().zip(tokens).collect();
    }

    /// Fresh tokens for a run of items that must stay between two anchors,
    /// leaving every item outside the window untouched.
    pub fn rebalance_window<'a, T: Item>(
        &self,
        items: &'a [T],
        low: Option<&Token>,
        high: Option<&Token>,
    ) -> Result<Vec<(&'a T, Token)>> {
        let tokens = self.spread(low, high, items.len())?;
        debug!(
            items = items.len(),
            low = ?low.map(Token::as_str),
            high = ?high.map(Token::as_str),
            "rebalanced window",
        );
        return Ok(items.iter().zip(tokens).collect());
    }
}
