//! Exact fixed-point arithmetic over token digits.
//!
//! A token `d1 d2 ... dk` is the base-`n` fraction `0.d1 d2 ... dk`. To
//! compute evenly spaced values between two tokens we pick a scale `s`
//! (number of fractional digits) and treat every value as the integer
//! `value * n^s`. `Fixed` is that integer: an arbitrary precision unsigned
//! number in base `n`, stored least significant digit first, with carries
//! and borrows propagated across the whole digit string.
//!
//! Complexity, for `L` digits:
//! - add/sub: O(L)
//! - mul_small/div_small: O(L)

use super::alphabet::Digits;

/// An unsigned integer in base `base`, least significant digit first,
/// with no high zero digits (zero is the empty vector).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixed {
    base: u8,
    limbs: Vec<u8>,
}

impl Fixed {
    /// `base^scale`, the fraction `1.0` at the given scale.
    pub fn one(base: u8, scale: usize) -> Fixed {
        let mut limbs = vec![0; scale];
        limbs.push(1);
        return Fixed { base, limbs };
    }

    /// The fraction `0.digits` as an integer at the given scale.
    pub fn from_fraction(base: u8, digits: &[u8], scale: usize) -> Fixed {
        debug_assert!(digits.len() <= scale, "scale too small for {} digits", digits.len());
        let mut limbs = vec![0; scale - digits.len()];
        limbs.extend(digits.iter().rev());
        let mut fixed = Fixed { base, limbs };
        fixed.trim();
        return fixed;
    }

    /// Render as exactly `scale` fractional digits, most significant first,
    /// with trailing zeros dropped. The value must be below `base^scale`.
    pub fn to_fraction(&self, scale: usize) -> Digits {
        debug_assert!(self.limbs.len() <= scale, "value does not fit the scale");
        let mut digits: Digits = (0..scale)
            .rev()
            .map(|i| self.limbs.get(i).copied().unwrap_or(0))
            .collect();
        while digits.last() == Some(&0) {
            digits.pop();
        }
        return digits;
    }

    pub fn is_zero(&self) -> bool {
        return self.limbs.is_empty();
    }

    pub fn add(&self, other: &Fixed) -> Fixed {
        let base = self.base as u16;
        let len = self.limbs.len().max(other.limbs.len());
        let mut limbs = Vec::with_capacity(len + 1);
        let mut carry = 0u16;
        for i in 0..len {
            let sum = self.limb(i) as u16 + other.limb(i) as u16 + carry;
            limbs.push((sum % base) as u8);
            carry = sum / base;
        }
        if carry > 0 {
            limbs.push(carry as u8);
        }
        let mut fixed = Fixed { base: self.base, limbs };
        fixed.trim();
        return fixed;
    }

    /// `self - other`; requires `self >= other`.
    pub fn sub(&self, other: &Fixed) -> Fixed {
        let base = self.base as i16;
        let mut limbs = Vec::with_capacity(self.limbs.len());
        let mut borrow = 0i16;
        for i in 0..self.limbs.len() {
            let mut diff = self.limb(i) as i16 - other.limb(i) as i16 - borrow;
            borrow = 0;
            if diff < 0 {
                diff += base;
                borrow = 1;
            }
            limbs.push(diff as u8);
        }
        debug_assert!(
            borrow == 0 && other.limbs.len() <= self.limbs.len(),
            "subtraction underflow",
        );
        let mut fixed = Fixed { base: self.base, limbs };
        fixed.trim();
        return fixed;
    }

    pub fn mul_small(&self, factor: u64) -> Fixed {
        let base = self.base as u128;
        let mut limbs = Vec::with_capacity(self.limbs.len() + 8);
        let mut carry = 0u128;
        for limb in &self.limbs {
            let product = *limb as u128 * factor as u128 + carry;
            limbs.push((product % base) as u8);
            carry = product / base;
        }
        while carry > 0 {
            limbs.push((carry % base) as u8);
            carry /= base;
        }
        let mut fixed = Fixed { base: self.base, limbs };
        fixed.trim();
        return fixed;
    }

    /// Floor division by a small divisor.
    pub fn div_small(&self, divisor: u64) -> Fixed {
        debug_assert!(divisor > 0, "division by zero");
        let base = self.base as u128;
        let divisor = divisor as u128;
        let mut limbs = vec![0; self.limbs.len()];
        let mut remainder = 0u128;
        for i in (0..self.limbs.len()).rev() {
            remainder = remainder * base + self.limbs[i] as u128;
            limbs[i] = (remainder / divisor) as u8;
            remainder %= divisor;
        }
        let mut fixed = Fixed { base: self.base, limbs };
        fixed.trim();
        return fixed;
    }

    #[inline]
    fn limb(&self, i: usize) -> u8 {
        return self.limbs.get(i).copied().unwrap_or(0);
    }

    fn trim(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }
}

impl PartialOrd for Fixed {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        return Some(self.cmp(other));
    }
}

impl Ord for Fixed {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.limbs.len().cmp(&other.limbs.len()) {
            std::cmp::Ordering::Equal => self.limbs.iter().rev().cmp(other.limbs.iter().rev()),
            other => other,
        }
    }
}

/// `count` evenly spaced fractions strictly inside `(low, high)`.
///
/// A missing `low` is `0.0` and a missing `high` is `1.0`. The i-th result
/// (1-based) is `low + floor(i * (high - low) / (count + 1))` at the smallest
/// scale where that step is at least one unit, so results are strictly
/// increasing, never empty, and never end in a zero digit.
pub fn spread(base: u8, low: Option<&[u8]>, high: Option<&[u8]>, count: usize) -> Vec<Digits> {
    if count == 0 {
        return Vec::new();
    }

    let parts = count as u64 + 1;
    let mut scale = low.map_or(0, |d| d.len()).max(high.map_or(0, |d| d.len()));
    let (start, width) = loop {
        let start = Fixed::from_fraction(base, low.unwrap_or(&[]), scale);
        let end = match high {
            Some(digits) => Fixed::from_fraction(base, digits, scale),
            None => Fixed::one(base, scale),
        };
        debug_assert!(start < end, "spread requires low < high");
        let width = end.sub(&start);
        if !width.div_small(parts).is_zero() {
            break (start, width);
        }
        scale += 1;
    };

    return (1..=count as u64)
        .map(|i| start.add(&width.mul_small(i).div_small(parts)).to_fraction(scale))
        .collect();
}
