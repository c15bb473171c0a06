//! AFL fuzz harness for order keys
//!
//! Drives one card list through byte-encoded inserts, moves, and rebalances
//! and checks after every step:
//! 1. Order: the list sorted by token matches the list the operations built
//! 2. Locality: a move only rewrites the tokens of the moved cards
//! 3. Validity: every generated token parses under the engine's alphabet

use afl::fuzz;
use lineup::Engine;
use lineup::Entry;
use lineup::order::plan::MovePlan;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Insert `count` new cards at a fraction of the list
    Insert { pos_frac: u8, count: u8 },
    /// Move up to `count` cards starting at `from_frac` to `to_frac`
    Move { from_frac: u8, count: u8, to_frac: u8 },
    /// Rewrite every token
    Rebalance,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 3;
        let rest = &bytes[1..];

        match op_type {
            0 if rest.len() >= 2 => {
                let op = FuzzOp::Insert {
                    pos_frac: rest[0],
                    count: (rest[1] % 8).saturating_add(1),
                };
                Some((op, &rest[2..]))
            }
            1 if rest.len() >= 3 => {
                let op = FuzzOp::Move {
                    from_frac: rest[0],
                    count: (rest[1] % 4).saturating_add(1),
                    to_frac: rest[2],
                };
                Some((op, &rest[3..]))
            }
            2 => Some((FuzzOp::Rebalance, rest)),
            _ => None,
        }
    }
}

fn scaled(frac: u8, len: usize) -> usize {
    return (frac as usize * (len + 1) / 256).min(len);
}

/// Apply a plan to both the card list and the expected id order.
fn apply(engine: &Engine, cards: &mut Vec<Entry<u64>>, plan: MovePlan<u64>) {
    for step in plan {
        engine.parse(step.token.as_str()).expect("generated token must parse");
        match cards.iter_mut().find(|card| card.id == step.id) {
            Some(card) => card.token = step.token,
            None => cards.push(Entry::new(step.id, step.token)),
        }
    }
    engine.sort_by_token(cards);
}

fn main() {
    let engine = Engine::default();

    fuzz!(|data: &[u8]| {
        let mut cards: Vec<Entry<u64>> = Vec::new();
        let mut expected: Vec<u64> = Vec::new();
        let mut next_id = 0u64;
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Insert { pos_frac, count } => {
                    let target = scaled(pos_frac, cards.len());
                    let ids: Vec<u64> = (next_id..next_id + count as u64).collect();
                    next_id += count as u64;

                    let plan = engine.planner().plan_insert(&ids, target, &cards).expect("insert must plan");
                    assert_eq!(plan.len(), ids.len());
                    apply(&engine, &mut cards, plan);
                    expected.splice(target..target, ids);
                }

                FuzzOp::Move { from_frac, count, to_frac } => {
                    if cards.is_empty() {
                        continue;
                    }
                    let start = scaled(from_frac, cards.len() - 1);
                    let end = (start + count as usize).min(cards.len());
                    // reverse the block so the move also reorders it
                    let selected: Vec<u64> = cards[start..end].iter().rev().map(|card| card.id).collect();
                    let target = scaled(to_frac, cards.len() - selected.len());

                    let before = cards.clone();
                    let plan = engine.plan_move(&selected, target, &cards).expect("move must plan");
                    apply(&engine, &mut cards, plan);

                    expected.retain(|id| !selected.contains(id));
                    expected.splice(target..target, selected.iter().copied());

                    for card in &cards {
                        if !selected.contains(&card.id) {
                            let old = before.iter().find(|old| old.id == card.id).expect("card must exist");
                            assert_eq!(old.token, card.token, "Locality failure! card {} was rewritten", card.id);
                        }
                    }
                }

                FuzzOp::Rebalance => {
                    let fresh: Vec<Entry<u64>> = engine
                        .rebalance(&cards)
                        .into_iter()
                        .map(|(card, token)| Entry::new(card.id, token))
                        .collect();
                    assert!(!engine.inspect(&fresh).needs_rebalance());
                    cards = fresh;
                }
            }

            // CRITICAL INVARIANT: token order is the order the operations built
            let order: Vec<u64> = cards.iter().map(|card| card.id).collect();
            assert_eq!(order, expected, "Order failure!");
            for pair in cards.windows(2) {
                assert!(pair[0].token < pair[1].token, "Tokens must be strictly increasing");
            }
        }
    });
}
