use thiserror::Error;

use crate::domain::card::{Card, Rank};
use crate::domain::hand::{HandCategory, HandClass};

use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};

/// Ошибки оценщика.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// classify вызвали с группой не из 3 и не из 5 карт —
    /// это ошибка интеграции, а не игровая ситуация.
    #[error("Invalid group size: {0} (expected 3 or 5 cards)")]
    InvalidGroupSize(usize),
}

/// Классифицировать 3- или 5-карточную группу.
///
/// Чистая функция: не зависит от порядка карт, без скрытого состояния.
/// Любой другой размер группы — `EvalError::InvalidGroupSize`.
pub fn classify(cards: &[Card]) -> Result<HandClass, EvalError> {
    match cards.len() {
        5 => Ok(classify5(cards)),
        3 => Ok(classify3(cards)),
        n => Err(EvalError::InvalidGroupSize(n)),
    }
}

/// (ранг, сколько раз встретился), по убыванию количества, затем ранга.
/// Это даёт паттерны вида [4,1], [3,2], [2,2,1] и т.д.
fn rank_count_list(cards: &[Card]) -> Vec<(Rank, u8)> {
    let mut rank_counts = [0u8; 15]; // индексы 2..=14
    for card in cards {
        rank_counts[card.rank.value() as usize] += 1;
    }

    let mut rc_list: Vec<(Rank, u8)> = Vec::with_capacity(cards.len());
    for v in (2u8..=14).rev() {
        let c = rank_counts[v as usize];
        if c > 0 {
            // v из диапазона 2..=14, from_value не может не сработать
            if let Some(rank) = Rank::from_value(v) {
                rc_list.push((rank, c));
            }
        }
    }

    rc_list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
    rc_list
}

/// Оценка строго 5-карточной группы. Порядок проверок — строгий
/// приоритет категорий, первая сработавшая побеждает.
fn classify5(cards: &[Card]) -> HandClass {
    let mut rank_mask: RankMask = 0;
    for card in cards {
        rank_mask |= rank_to_bit(card.rank);
    }

    let first_suit = cards[0].suit;
    let is_flush = cards.iter().all(|c| c.suit == first_suit);
    let straight_high = detect_straight(rank_mask);

    let rc_list = rank_count_list(cards);
    let pattern: Vec<u8> = rc_list.iter().map(|rc| rc.1).collect();

    let make = |category, primary: Vec<Rank>, kickers: Vec<Rank>| HandClass {
        category,
        primary,
        kickers,
        cards: cards.to_vec(),
    };

    // Straight flush.
    if is_flush {
        if let Some(high) = straight_high {
            return make(HandCategory::StraightFlush, vec![high], vec![]);
        }
    }

    // Four of a kind: 4+1.
    if pattern == [4, 1] {
        return make(HandCategory::FourOfAKind, vec![rc_list[0].0], vec![rc_list[1].0]);
    }

    // Full house: 3+2.
    if pattern == [3, 2] {
        return make(HandCategory::FullHouse, vec![rc_list[0].0], vec![rc_list[1].0]);
    }

    // Flush: все 5 рангов по убыванию идут в primary (тай-брейк по кикерам).
    if is_flush {
        let mut ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
        ranks.sort_by(|a, b| b.cmp(a));
        return make(HandCategory::Flush, ranks, vec![]);
    }

    // Straight: старшая карта (у wheel'а — пятёрка, не туз).
    if let Some(high) = straight_high {
        return make(HandCategory::Straight, vec![high], vec![]);
    }

    // Three of a kind: 3+1+1.
    if pattern == [3, 1, 1] {
        return make(
            HandCategory::ThreeOfAKind,
            vec![rc_list[0].0],
            vec![rc_list[1].0, rc_list[2].0],
        );
    }

    // Two pair: 2+2+1, пары по убыванию.
    if pattern == [2, 2, 1] {
        return make(
            HandCategory::TwoPair,
            vec![rc_list[0].0, rc_list[1].0],
            vec![rc_list[2].0],
        );
    }

    // One pair: 2+1+1+1.
    if pattern == [2, 1, 1, 1] {
        return make(
            HandCategory::OnePair,
            vec![rc_list[0].0],
            vec![rc_list[1].0, rc_list[2].0, rc_list[3].0],
        );
    }

    // High card: все 5 рангов по убыванию.
    let ranks: Vec<Rank> = rc_list.iter().map(|rc| rc.0).collect();
    make(HandCategory::HighCard, ranks, vec![])
}

/// Оценка 3-карточной группы. В передней дороге стриты и флеши
/// не считаются — возможны только сет, пара и старшая карта.
fn classify3(cards: &[Card]) -> HandClass {
    let rc_list = rank_count_list(cards);
    let pattern: Vec<u8> = rc_list.iter().map(|rc| rc.1).collect();

    let make = |category, primary: Vec<Rank>, kickers: Vec<Rank>| HandClass {
        category,
        primary,
        kickers,
        cards: cards.to_vec(),
    };

    // Three of a kind.
    if pattern == [3] {
        return make(HandCategory::ThreeOfAKind, vec![rc_list[0].0], vec![]);
    }

    // One pair: 2+1.
    if pattern == [2, 1] {
        return make(HandCategory::OnePair, vec![rc_list[0].0], vec![rc_list[1].0]);
    }

    // High card: 3 ранга по убыванию.
    let ranks: Vec<Rank> = rc_list.iter().map(|rc| rc.0).collect();
    make(HandCategory::HighCard, ranks, vec![])
}
