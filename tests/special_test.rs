//! Тесты детектора особых 13-карточных рук.

use waters_engine::domain::{Card, SpecialKind};
use waters_engine::eval::{detect_special, EvalError};

/// Утилита: 13 карт из строки вида "2c 3d ... Ah".
fn hand(spec: &str) -> Vec<Card> {
    let cards: Vec<Card> = spec
        .split_whitespace()
        .map(|s| s.parse().expect("card literal"))
        .collect();
    cards
}

#[test]
fn rejects_non_13_card_hands() {
    assert_eq!(
        detect_special(&hand("2c 3d 4h 5s 6c")),
        Err(EvalError::InvalidGroupSize(5))
    );
    assert_eq!(detect_special(&[]), Err(EvalError::InvalidGroupSize(0)));
}

/// "Дракон": ранги ровно 2..A по одному разу, масти любые.
#[test]
fn detects_dragon() {
    let cards = hand("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ah");
    let special = detect_special(&cards).unwrap().expect("dragon expected");
    assert_eq!(special.kind, SpecialKind::Dragon);
    assert_eq!(special.cards.len(), 13);
}

/// Шесть пар + синглтон.
#[test]
fn detects_six_pairs() {
    let cards = hand("2c 2d 5c 5d 7c 7d 9c 9d Jc Jd Kc Kd Ah");
    let special = detect_special(&cards).unwrap().expect("six pairs expected");
    assert_eq!(special.kind, SpecialKind::SixPairs);
}

/// Каре внутри "шести пар" законно считается двумя парами.
#[test]
fn six_pairs_accepts_a_quad_as_two_pairs() {
    // 4×9 + пары 2,5,J,K + одиночный туз = 6 "пар" + синглтон
    let cards = hand("9c 9d 9h 9s 2c 2d 5c 5d Jc Jd Kc Kd Ah");
    let special = detect_special(&cards).unwrap().expect("six pairs expected");
    assert_eq!(special.kind, SpecialKind::SixPairs);
}

/// Пять пар + тройка — это НЕ шесть пар.
#[test]
fn five_pairs_with_trips_is_not_six_pairs() {
    let cards = hand("2c 2d 5c 5d 7c 7d 9c 9d Jc Jd Kc Kd Kh");
    assert_eq!(detect_special(&cards).unwrap(), None);
}

/// "Три флеша": рука разбивается на одномастные группы 3/5/5.
#[test]
fn detects_three_flushes() {
    // hearts: 2 5 9 / spades: 3 6 8 J K / clubs: 2 4 7 9 Q
    let cards = hand("2h 5h 9h 3s 6s 8s Js Ks 2c 4c 7c 9c Qc");
    let special = detect_special(&cards)
        .unwrap()
        .expect("three flushes expected");
    assert_eq!(special.kind, SpecialKind::ThreeFlushes);
}

/// Разбиение не обязано совпадать с мастями "по порядку":
/// 8 карт одной масти дают и тройку, и пятёрку.
#[test]
fn three_flushes_with_split_suit() {
    // diamonds ×8 (3+5) + clubs ×5; ранг 2 повторён, чтобы не вышел дракон
    let cards = hand("2d 4d 5d 7d 8d Td Jd Kd 2c 3c 6c 9c Qc");
    let special = detect_special(&cards)
        .unwrap()
        .expect("three flushes expected");
    assert_eq!(special.kind, SpecialKind::ThreeFlushes);
}

/// "Три стрита": тройка подряд + два 5-карточных стрита.
#[test]
fn detects_three_straights() {
    // front 3c 4d 5h / middle 6c 7d 8h 9c Td / back 5s 6s 7s 8s 9h
    let cards = hand("3c 4d 5h 6c 7d 8h 9c Td 5s 6s 7s 8s 9h");
    let special = detect_special(&cards)
        .unwrap()
        .expect("three straights expected");
    assert_eq!(special.kind, SpecialKind::ThreeStraights);
}

/// Wheel-случаи в "трёх стритах": A23 спереди и A2345 в пятёрке.
#[test]
fn three_straights_with_wheels() {
    // front Ac 2d 3h / middle Ad 2h 3s 4c 5d / back 9c Tc Jh Qs Kd
    let cards = hand("Ac 2d 3h Ad 2h 3s 4c 5d 9c Tc Jh Qs Kd");
    let special = detect_special(&cards)
        .unwrap()
        .expect("three straights expected");
    assert_eq!(special.kind, SpecialKind::ThreeStraights);
}

/// Приоритет: рука одновременно "шесть пар" и "три флеша" →
/// побеждает более дорогой тип.
#[test]
fn three_flushes_outranks_six_pairs() {
    // hearts: 2 3 4 5 6 / spades: 2 3 4 5 7 / clubs: 6 7 A
    // пары: 2,3,4,5 (h/s), 6 (h/c), 7 (s/c) + одиночный туз
    let cards = hand("2h 3h 4h 5h 6h 2s 3s 4s 5s 7s 6c 7c Ac");
    let special = detect_special(&cards).unwrap().expect("special expected");
    assert_eq!(special.kind, SpecialKind::ThreeFlushes);
}

/// Обычная рука — ничего особого.
#[test]
fn ordinary_hand_has_no_special() {
    let cards = hand("2c 2d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Kh");
    assert_eq!(detect_special(&cards).unwrap(), None);
}
