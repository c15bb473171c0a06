//! Token generation.
//!
//! Tokens are base-`n` fractions in `(0, 1)`, so there is always room for
//! another one between any two of them. Generation works directly on digit
//! ranks: walk the shared prefix of the two bounds, then at the first digit
//! where they differ pick the rank halfway between. When the two digits are
//! adjacent there is no rank in between at that position, so the lower digit
//! is kept and the search continues one position further with the upper
//! bound lifted, which is where tokens grow.
//!
//! Results are the shortest practical separators, not exact averages.
//! Exact even spacing lives in the rebalancer.
//!
//! Appends and prepends take a single step instead of halving the open side
//! of the range: the first digit with room is moved by one rank and the rest
//! is dropped, so `"mzz"` is followed by `"n"`. Only a run of maximal digits
//! grows, by one middle digit (`"z"` is followed by `"zn"`). A chain of
//! appends then grows by one digit every `base / 2` steps or so.
//!
//! Complexity, for bounds of length `L`:
//! - key_after / key_before / key_between: O(L)
//! - keys_between (n keys): O(n (L + log n))

use std::cmp::Ordering;

use smallvec::smallvec;
use tracing::trace;
use tracing::warn;

use crate::error::Error;
use crate::error::Result;
use super::primitives::Alphabet;
use super::primitives::Digits;
use super::primitives::Token;

/// Generates tokens for one alphabet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyGen {
    alphabet: Alphabet,
}

impl KeyGen {
    pub fn new(alphabet: Alphabet) -> KeyGen {
        return KeyGen { alphabet };
    }

    pub fn alphabet(&self) -> &Alphabet {
        return &self.alphabet;
    }

    /// The token for the first item of an empty sequence: the middle digit.
    pub fn initial(&self) -> Token {
        return self.alphabet.encode(&[self.alphabet.mid_rank()]);
    }

    /// A token after `last`, or the initial token when there is none.
    pub fn key_after(&self, last: Option<&Token>) -> Result<Token> {
        let low = self.decode(last)?;
        return Ok(self.generate(low.as_deref(), None));
    }

    /// A token before `first`, or the initial token when there is none.
    pub fn key_before(&self, first: Option<&Token>) -> Result<Token> {
        let high = self.decode(first)?;
        return Ok(self.generate(None, high.as_deref()));
    }

    /// A token strictly between `low` and `high`.
    ///
    /// Callers must pass `low < high`. Debug builds assert it; release builds
    /// swap inverted bounds and answer equal bounds with a token after them.
    pub fn key_between(&self, low: &Token, high: &Token) -> Result<Token> {
        let lo = self.alphabet.decode(low.as_str())?;
        let hi = self.alphabet.decode(high.as_str())?;
        debug_assert!(lo < hi, "key_between requires {low} < {high}");

        match lo.cmp(&hi) {
            Ordering::Less => return Ok(self.generate(Some(lo.as_slice()), Some(hi.as_slice()))),
            Ordering::Greater => {
                warn!(%low, %high, "key_between called with inverted bounds, swapping");
                return Ok(self.generate(Some(hi.as_slice()), Some(lo.as_slice())));
            }
            Ordering::Equal => {
                warn!(%low, "key_between called with equal bounds, placing after");
                return Ok(self.generate(Some(lo.as_slice()), None));
            }
        }
    }

    /// Like `key_between`, but reports unordered bounds as an error.
    pub fn try_key_between(&self, low: &Token, high: &Token) -> Result<Token> {
        let lo = self.alphabet.decode(low.as_str())?;
        let hi = self.alphabet.decode(high.as_str())?;
        if lo >= hi {
            return Err(Error::UnorderedBounds {
                low: low.clone(),
                high: high.clone(),
            });
        }
        return Ok(self.generate(Some(lo.as_slice()), Some(hi.as_slice())));
    }

    /// `count` ascending tokens strictly between the bounds; a missing bound
    /// leaves that side of the range open.
    ///
    /// Keys are placed by bisection, middle first, so their length grows
    /// with `log count` rather than `count`.
    pub fn keys_between(
        &self,
        low: Option<&Token>,
        high: Option<&Token>,
        count: usize,
    ) -> Result<Vec<Token>> {
        let lo = self.decode(low)?;
        let hi = self.decode(high)?;
        if let (Some(low), Some(high), Some(lo_digits), Some(hi_digits)) = (low, high, &lo, &hi) {
            if lo_digits >= hi_digits {
                return Err(Error::UnorderedBounds {
                    low: low.clone(),
                    high: high.clone(),
                });
            }
        }

        let mut keys = Vec::with_capacity(count);
        self.fill(lo.as_deref(), hi.as_deref(), count, &mut keys);
        return Ok(keys.iter().map(|digits| self.alphabet.encode(digits)).collect());
    }

    fn fill(&self, low: Option<&[u8]>, high: Option<&[u8]>, count: usize, out: &mut Vec<Digits>) {
        if count == 0 {
            return;
        }
        let key = self.digits_within(low, high);
        let left = count / 2;
        self.fill(low, Some(key.as_slice()), left, out);
        out.push(key.clone());
        self.fill(Some(key.as_slice()), high, count - left - 1, out);
    }

    fn decode(&self, token: Option<&Token>) -> Result<Option<Digits>> {
        return token.map(|t| self.alphabet.decode(t.as_str())).transpose();
    }

    fn generate(&self, low: Option<&[u8]>, high: Option<&[u8]>) -> Token {
        let digits = self.digits_within(low, high);
        let token = self.alphabet.encode(&digits);
        trace!(%token, "generated key");
        return token;
    }

    fn digits_within(&self, low: Option<&[u8]>, high: Option<&[u8]>) -> Digits {
        let base = self.alphabet.base();
        match (low, high) {
            (None, None) => return smallvec![self.alphabet.mid_rank()],
            (Some(low), None) => return step_after(low, base),
            (None, Some(high)) => return step_before(high, base),
            (Some(low), Some(high)) => return midpoint(low, Some(high), base),
        }
    }
}

/// Digits just above `low`: the first non-maximal digit plus one, or `low`
/// extended by a middle digit when every digit is maximal.
fn step_after(low: &[u8], base: u8) -> Digits {
    let max = base - 1;
    let mut out = Digits::new();
    match low.iter().position(|digit| *digit < max) {
        Some(i) => {
            out.extend_from_slice(&low[..i]);
            out.push(low[i] + 1);
        }
        None => {
            out.extend_from_slice(low);
            out.push(base / 2);
        }
    }
    return out;
}

/// Digits just below `high`: the first digit above 1 minus one. With no such
/// digit a decrement would end in the minimum, so take the midpoint toward
/// the bottom of the range instead.
fn step_before(high: &[u8], base: u8) -> Digits {
    match high.iter().position(|digit| *digit > 1) {
        Some(i) => {
            let mut out = Digits::from_slice(&high[..i]);
            out.push(high[i] - 1);
            return out;
        }
        None => return midpoint(&[], Some(high), base),
    }
}

/// Digits strictly between `low` and `high`, where `None` is the top of the
/// range and an empty `low` the bottom. Missing digits of `low` count as
/// zero. Requires `low < high`; neither bound may end in a zero digit.
fn midpoint(low: &[u8], high: Option<&[u8]>, base: u8) -> Digits {
    let mut out = Digits::new();
    let mut low = low;
    let mut high = high;

    loop {
        if let Some(h) = high {
            let shared = h
                .iter()
                .enumerate()
                .take_while(|(i, digit)| low.get(*i).copied().unwrap_or(0) == **digit)
                .count();
            out.extend_from_slice(&h[..shared]);
            low = low.get(shared..).unwrap_or(&[]);
            high = Some(&h[shared..]);
        }

        let a = low.first().copied().unwrap_or(0) as u16;
        let b = high.and_then(|h| h.first()).map_or(base as u16, |digit| *digit as u16);
        debug_assert!(a < b, "midpoint requires low < high");

        if b > a + 1 {
            out.push(((a + b + 1) / 2) as u8);
            return out;
        }

        // Adjacent digits. A longer upper bound can be cut short instead.
        if let Some(h) = high {
            if h.len() > 1 {
                out.push(h[0]);
                return out;
            }
        }

        out.push(a as u8);
        low = low.get(1..).unwrap_or(&[]);
        high = None;
    }
}
