//! One configured entry point for every order-key operation.

use crate::error::Result;
use crate::order::Item;
use crate::order::keygen::KeyGen;
use crate::order::plan::MovePlan;
use crate::order::plan::Planner;
use crate::order::primitives::Alphabet;
use crate::order::primitives::Token;
use crate::order::rebalance::DEFAULT_MAX_TOKEN_LEN;
use crate::order::rebalance::Health;
use crate::order::rebalance::Rebalancer;
use crate::order::sort;

/// Key generator, planner, and rebalancer sharing one alphabet.
///
/// The engine holds no sequence state; it can be shared freely between
/// threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    keygen: KeyGen,
    planner: Planner,
    rebalancer: Rebalancer,
}

impl Default for Engine {
    fn default() -> Engine {
        return Engine::new(Alphabet::default(), DEFAULT_MAX_TOKEN_LEN);
    }
}

impl Engine {
    pub fn new(alphabet: Alphabet, max_token_len: usize) -> Engine {
        let keygen = KeyGen::new(alphabet.clone());
        return Engine {
            planner: Planner::new(keygen.clone()),
            rebalancer: Rebalancer::new(alphabet, max_token_len),
            keygen,
        };
    }

    pub fn alphabet(&self) -> &Alphabet {
        return self.keygen.alphabet();
    }

    pub fn keygen(&self) -> &KeyGen {
        return &self.keygen;
    }

    pub fn planner(&self) -> &Planner {
        return &self.planner;
    }

    pub fn rebalancer(&self) -> &Rebalancer {
        return &self.rebalancer;
    }

    /// Validate a stored string as a token of this engine's alphabet.
    pub fn parse(&self, token: &str) -> Result<Token> {
        return self.alphabet().parse(token);
    }

    pub fn key_after(&self, last: Option<&Token>) -> Result<Token> {
        return self.keygen.key_after(last);
    }

    pub fn key_before(&self, first: Option<&Token>) -> Result<Token> {
        return self.keygen.key_before(first);
    }

    pub fn key_between(&self, low: &Token, high: &Token) -> Result<Token> {
        return self.keygen.key_between(low, high);
    }

    pub fn try_key_between(&self, low: &Token, high: &Token) -> Result<Token> {
        return self.keygen.try_key_between(low, high);
    }

    pub fn keys_between(&self, low: Option<&Token>, high: Option<&Token>, count: usize) -> Result<Vec<Token>> {
        return self.keygen.keys_between(low, high, count);
    }

    pub fn sort_by_token<T: Item>(&self, items: &mut [T]) {
        sort::sort_by_token(items);
    }

    pub fn plan_move<T: Item>(&self, selected: &[T::Id], target: usize, sequence: &[T]) -> Result<MovePlan<T::Id>> {
        return self.planner.plan_move(selected, target, sequence);
    }

    pub fn inspect<T: Item>(&self, items: &[T]) -> Health {
        return self.rebalancer.inspect(items);
    }

    pub fn rebalance<'a, T: Item>(&self, items: &'a [T]) -> Vec<(&'a T, Token)> {
        return self.rebalancer.rebalance(items);
    }

    pub fn rebalance_window<'a, T: Item>(
        &self,
        items: &'a [T],
        low: Option<&Token>,
        high: Option<&Token>,
    ) -> Result<Vec<(&'a T, Token)>> {
        return self.rebalancer.rebalance_window(items, low, high);
    }
}
