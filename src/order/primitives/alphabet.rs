//! The digit alphabet tokens are written in.
//!
//! An alphabet is an ordered set of printable ASCII characters. Each
//! character is a digit whose value is its rank, so a token reads as a
//! base-`n` fraction `0.d1 d2 d3 ...` with `n` the alphabet size.
//!
//! Characters must be strictly ascending in byte value. That keeps rank order
//! and byte order identical, so tokens persisted as plain strings sort the
//! same way in any store that compares bytes.
//!
//! Complexity:
//! - rank lookup: O(1)
//! - compare: O(min(len a, len b))
//! - decode/parse: O(len)

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::error::Error;
use crate::error::Result;
use super::token::Token;

/// Digits 0-9, then A-Z, then a-z.
pub const BASE62: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Marks a byte with no rank in `Alphabet::ranks`.
const NO_RANK: u8 = u8::MAX;

/// Token digits as ranks, most significant first.
pub type Digits = SmallVec<[u8; 16]>;

/// An ordered character set used as the digits of a token.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<u8>,
    ranks: [u8; 128],
}

impl Alphabet {
    /// Build an alphabet from its characters in ascending order.
    pub fn new(chars: &str) -> Result<Alphabet> {
        let bytes = chars.as_bytes();
        if bytes.len() < 3 {
            return Err(Error::InvalidAlphabet {
                reason: format!("need at least 3 characters, got {}", bytes.len()),
            });
        }

        if let Some(c) = chars.chars().find(|c| !c.is_ascii_graphic()) {
            return Err(Error::InvalidAlphabet {
                reason: format!("{c:?} is not a printable ASCII character"),
            });
        }

        if let Some(pair) = bytes.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(Error::InvalidAlphabet {
                reason: format!(
                    "characters must be strictly ascending, found {:?} before {:?}",
                    pair[0] as char, pair[1] as char,
                ),
            });
        }

        let mut ranks = [NO_RANK; 128];
        for (rank, byte) in bytes.iter().enumerate() {
            ranks[*byte as usize] = rank as u8;
        }

        return Ok(Alphabet {
            chars: bytes.to_vec(),
            ranks,
        });
    }

    /// The default alphabet, `0-9A-Za-z`.
    pub fn base62() -> Alphabet {
        let mut ranks = [NO_RANK; 128];
        for (rank, byte) in BASE62.bytes().enumerate() {
            ranks[byte as usize] = rank as u8;
        }
        return Alphabet {
            chars: BASE62.as_bytes().to_vec(),
            ranks,
        };
    }

    /// Number of digits in the alphabet.
    #[inline]
    pub fn base(&self) -> u8 {
        return self.chars.len() as u8;
    }

    /// The characters in rank order.
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored.
        return std::str::from_utf8(&self.chars).unwrap_or_default();
    }

    /// Rank of the lowest digit. Tokens never end in it.
    #[inline]
    pub fn min_rank(&self) -> u8 {
        return 0;
    }

    /// Rank of the highest digit.
    #[inline]
    pub fn max_rank(&self) -> u8 {
        return self.base() - 1;
    }

    /// Rank of the middle digit, used for the first token of a sequence.
    #[inline]
    pub fn mid_rank(&self) -> u8 {
        return self.max_rank() / 2;
    }

    /// Rank of a character, if it belongs to the alphabet.
    #[inline]
    pub fn rank(&self, c: char) -> Option<u8> {
        if !c.is_ascii() {
            return None;
        }
        let rank = self.ranks[c as usize];
        if rank == NO_RANK {
            return None;
        }
        return Some(rank);
    }

    /// Character for a rank. Panics if the rank is out of range.
    #[inline]
    pub fn digit(&self, rank: u8) -> char {
        return self.chars[rank as usize] as char;
    }

    /// Compare two strings by character rank.
    ///
    /// Characters outside the alphabet sort after every alphabet character,
    /// by byte value among themselves, so the order stays total.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let key = |byte: u8| -> u16 {
            let rank = if byte < 128 { self.ranks[byte as usize] } else { NO_RANK };
            if rank == NO_RANK {
                return 256 + byte as u16;
            }
            return rank as u16;
        };

        for (x, y) in a.bytes().zip(b.bytes()) {
            match key(x).cmp(&key(y)) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        return a.len().cmp(&b.len());
    }

    /// Decode a token into ranks, rejecting anything the generator could
    /// not have produced.
    pub fn decode(&self, token: &str) -> Result<Digits> {
        if token.is_empty() {
            return Err(Error::EmptyToken);
        }

        let mut digits = Digits::with_capacity(token.len());
        for (position, character) in token.chars().enumerate() {
            match self.rank(character) {
                Some(rank) => digits.push(rank),
                None => {
                    return Err(Error::InvalidCharacter {
                        token: token.to_string(),
                        character,
                        position,
                    });
                }
            }
        }

        if digits.last() == Some(&self.min_rank()) {
            return Err(Error::TrailingMinimum {
                token: token.to_string(),
            });
        }

        return Ok(digits);
    }

    /// Encode ranks as a token.
    pub fn encode(&self, digits: &[u8]) -> Token {
        debug_assert!(!digits.is_empty(), "tokens carry at least one digit");
        debug_assert!(digits.last() != Some(&0), "tokens never end in the minimum digit");
        let text: String = digits.iter().map(|rank| self.digit(*rank)).collect();
        return Token::from_trusted(text);
    }

    /// Validate a string as a token of this alphabet.
    pub fn parse(&self, token: &str) -> Result<Token> {
        self.decode(token)?;
        return Ok(Token::from_trusted(token.to_string()));
    }
}

impl Default for Alphabet {
    fn default() -> Alphabet {
        return Alphabet::base62();
    }
}

impl std::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "Alphabet({:?})", self.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower() -> Alphabet {
        return Alphabet::new("abcdefghijklmnopqrstuvwxyz").unwrap();
    }

    #[test]
    fn base62_matches_constructor() {
        assert_eq!(Alphabet::base62(), Alphabet::new(BASE62).unwrap());
        assert_eq!(Alphabet::base62().base(), 62);
    }

    #[test]
    fn ranks_follow_character_order() {
        let alphabet = lower();
        assert_eq!(alphabet.rank('a'), Some(0));
        assert_eq!(alphabet.rank('m'), Some(12));
        assert_eq!(alphabet.rank('z'), Some(25));
        assert_eq!(alphabet.rank('A'), None);
        assert_eq!(alphabet.rank('é'), None);
        assert_eq!(alphabet.digit(12), 'm');
        assert_eq!(alphabet.min_rank(), 0);
        assert_eq!(alphabet.mid_rank(), 12);
        assert_eq!(alphabet.max_rank(), 25);
    }

    #[test]
    fn rejects_short_alphabet() {
        let err = Alphabet::new("ab").unwrap_err();
        assert!(matches!(err, Error::InvalidAlphabet { .. }));
    }

    #[test]
    fn rejects_unsorted_alphabet() {
        assert!(Alphabet::new("abdc").is_err());
        assert!(Alphabet::new("aabc").is_err());
    }

    #[test]
    fn rejects_non_printable_alphabet() {
        assert!(Alphabet::new("a bc").is_err());
        assert!(Alphabet::new("abcé").is_err());
    }

    #[test]
    fn compare_is_lexicographic_by_rank() {
        let alphabet = Alphabet::base62();
        assert_eq!(alphabet.compare("a", "b"), Ordering::Less);
        assert_eq!(alphabet.compare("a", "a0"), Ordering::Less);
        assert_eq!(alphabet.compare("Z", "a"), Ordering::Less);
        assert_eq!(alphabet.compare("9", "A"), Ordering::Less);
        assert_eq!(alphabet.compare("ab", "ab"), Ordering::Equal);
        assert_eq!(alphabet.compare("b", "azzz"), Ordering::Greater);
    }

    #[test]
    fn compare_agrees_with_byte_order() {
        let alphabet = Alphabet::base62();
        let samples = ["0", "01", "1", "9z", "A", "Az", "U", "a", "a1", "zz"];
        for a in samples {
            for b in samples {
                assert_eq!(alphabet.compare(a, b), a.cmp(b), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn foreign_characters_sort_last() {
        let alphabet = lower();
        assert_eq!(alphabet.compare("z", "A"), Ordering::Less);
        assert_eq!(alphabet.compare("A", "B"), Ordering::Less);
    }

    #[test]
    fn decode_validates() {
        let alphabet = lower();
        assert_eq!(alphabet.decode("mb").unwrap().as_slice(), &[12, 1]);
        assert_eq!(alphabet.decode(""), Err(Error::EmptyToken));
        assert!(matches!(
            alphabet.decode("mA"),
            Err(Error::InvalidCharacter { character: 'A', position: 1, .. })
        ));
        assert!(matches!(alphabet.decode("ma"), Err(Error::TrailingMinimum { .. })));
    }

    #[test]
    fn encode_round_trips_parse() {
        let alphabet = lower();
        let token = alphabet.encode(&[12, 16]);
        assert_eq!(token.as_str(), "mq");
        assert_eq!(alphabet.parse("mq").unwrap(), token);
    }
}
