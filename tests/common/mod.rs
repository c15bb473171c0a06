//! Shared setup for the integration test binaries.

use lineup::Alphabet;
use lineup::Engine;
use lineup::Entry;
use lineup::Token;
use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("lineup=info".parse().unwrap()))
        .with_test_writer()
        .try_init();
}

/// An engine over `a-z`, the alphabet used in the worked examples.
#[allow(dead_code)]
pub fn lower() -> Engine {
    return Engine::new(Alphabet::new("abcdefghijklmnopqrstuvwxyz").unwrap(), 24);
}

#[allow(dead_code)]
pub fn tok(engine: &Engine, s: &str) -> Token {
    return engine.parse(s).unwrap();
}

/// A sorted sequence with ids `0..n` built by repeated appends.
#[allow(dead_code)]
pub fn appended(engine: &Engine, n: usize) -> Vec<Entry<usize>> {
    let mut cards: Vec<Entry<usize>> = Vec::with_capacity(n);
    for id in 0..n {
        let token = engine.key_after(cards.last().map(|card| &card.token)).unwrap();
        cards.push(Entry::new(id, token));
    }
    return cards;
}

/// Write a plan back into the caller's records, the way a persistence
/// layer would, and re-sort.
#[allow(dead_code)]
pub fn apply(engine: &Engine, cards: &mut Vec<Entry<usize>>, plan: lineup::order::plan::MovePlan<usize>) {
    for step in plan {
        match cards.iter_mut().find(|card| card.id == step.id) {
            Some(card) => card.token = step.token,
            None => cards.push(Entry::new(step.id, step.token)),
        }
    }
    engine.sort_by_token(cards);
}
