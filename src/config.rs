//! Engine configuration.
//!
//! `Config` derives `serde::Deserialize` with defaults for every field, so a
//! host application can embed it in whatever settings file it already reads:
//!
//! ```
//! let config: lineup::Config = serde_json::from_str(r#"{ "max_token_len": 12 }"#).unwrap();
//! let engine = config.build().unwrap();
//! assert_eq!(engine.alphabet().base(), 62);
//! ```

use serde::Deserialize;
use serde::Serialize;

use crate::engine::Engine;
use crate::error::Error;
use crate::error::Result;
use crate::order::primitives::Alphabet;
use crate::order::primitives::BASE62;
use crate::order::rebalance::DEFAULT_MAX_TOKEN_LEN;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Token digits in ascending byte order.
    pub alphabet: String,
    /// Tokens longer than this mark a sequence for rebalancing.
    pub max_token_len: usize,
}

impl Default for Config {
    fn default() -> Config {
        return Config {
            alphabet: BASE62.to_string(),
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
        };
    }
}

impl Config {
    /// Validate and build an engine.
    pub fn build(&self) -> Result<Engine> {
        if self.max_token_len == 0 {
            return Err(Error::InvalidConfig {
                reason: "max_token_len must be at least 1".to_string(),
            });
        }
        let alphabet = Alphabet::new(&self.alphabet)?;
        return Ok(Engine::new(alphabet, self.max_token_len));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.alphabet, BASE62);
        assert_eq!(config.max_token_len, DEFAULT_MAX_TOKEN_LEN);
        assert!(config.build().is_ok());
    }

    #[test]
    fn rejects_zero_threshold() {
        let config = Config {
            max_token_len: 0,
            ..Config::default()
        };
        assert!(matches!(config.build(), Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn rejects_bad_alphabet() {
        let config = Config {
            alphabet: "zyx".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.build(), Err(Error::InvalidAlphabet { .. })));
    }

    #[test]
    fn deserializes_partial() {
        let config: Config = serde_json::from_str(r#"{ "alphabet": "abcdefghijklmnopqrstuvwxyz" }"#).unwrap();
        assert_eq!(config.max_token_len, DEFAULT_MAX_TOKEN_LEN);
        let engine = config.build().unwrap();
        assert_eq!(engine.key_after(None).unwrap().as_str(), "m");
    }
}
