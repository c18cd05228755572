//! RNG-тесты для waters-engine.
//!
//! Проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие колод
//! - сохранение множества карт при shuffle
//! - стабильность hash-reseeding RngSeed

use std::collections::HashSet;

use waters_engine::domain::deck::Deck;
use waters_engine::domain::Card;
use waters_engine::engine::{shuffle, RandomSource};
use waters_engine::infra::{DeterministicRng, RngSeed, SystemRng};

fn make_u64_seed(a: u64) -> [u8; 32] {
    let mut s = [0u8; 32];
    s[..8].copy_from_slice(&a.to_le_bytes());
    s
}

//
// TEST 1 — DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(make_u64_seed(123));
    let mut r2 = DeterministicRng::from_seed(make_u64_seed(123));

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

//
// TEST 2 — different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_seed(make_u64_seed(111));
    let mut r2 = DeterministicRng::from_seed(make_u64_seed(222));

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "Different seeds must produce different shuffle");
}

//
// TEST 3 — shuffle keeps the 52-card set intact
//
#[test]
fn shuffle_preserves_card_set() {
    let original: HashSet<Card> = Deck::standard_52().cards.into_iter().collect();

    let mut deck = Deck::standard_52();
    let mut rng = DeterministicRng::from_u64(7);
    shuffle(&mut deck, &mut rng);

    assert_eq!(deck.len(), 52);
    let shuffled: HashSet<Card> = deck.cards.into_iter().collect();
    assert_eq!(shuffled, original, "Shuffle must not create or lose cards");
}

//
// TEST 4 — SystemRng also keeps the set intact
//
#[test]
fn system_rng_shuffle_preserves_card_set() {
    let original: HashSet<Card> = Deck::standard_52().cards.into_iter().collect();

    let mut deck = Deck::standard_52();
    let mut rng = SystemRng;
    shuffle(&mut deck, &mut rng);

    let shuffled: HashSet<Card> = deck.cards.into_iter().collect();
    assert_eq!(shuffled, original);
}

//
// TEST 5 — RngSeed derivation is stable and context-sensitive
//
#[test]
fn rng_seed_derive_stable_and_distinct() {
    let base = RngSeed::from_u64(42);

    // тот же контекст → тот же seed
    let d1 = base.derive(1, 10, 0);
    let d2 = base.derive(1, 10, 0);
    assert_eq!(d1, d2, "Same context must derive the same seed");

    // другой контекст → другой seed
    let other_room = base.derive(2, 10, 0);
    let other_round = base.derive(1, 11, 0);
    let other_index = base.derive(1, 10, 1);
    assert_ne!(d1, other_room);
    assert_ne!(d1, other_round);
    assert_ne!(d1, other_index);

    // derive не равен исходному
    assert_ne!(d1, base);
}

//
// TEST 6 — RngSeed::to_rng reproduces the same deal
//
#[test]
fn rng_seed_to_rng_reproducible() {
    let seed = RngSeed::from_u64(5).derive(3, 1, 0);

    let mut deck_a = Deck::standard_52();
    let mut deck_b = Deck::standard_52();
    shuffle(&mut deck_a, &mut seed.to_rng());
    shuffle(&mut deck_b, &mut seed.to_rng());

    assert_eq!(deck_a, deck_b, "Same derived seed must shuffle identically");
}
