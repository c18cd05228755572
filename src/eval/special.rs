use crate::domain::card::Card;
use crate::domain::hand::{SpecialHand, SpecialKind};

use super::classifier::EvalError;
use super::combos::Combinations;
use super::lookup_tables::{detect_straight, detect_straight3, rank_to_bit, RankMask};

/// Жёсткий потолок на перебор разбиений 3/5/5.
/// Полный перебор — C(13,3) × C(10,5) = 286 × 252 = 72 072 вариантов;
/// лимит сверху защищает от случайной раскрутки при будущих правках.
const PARTITION_SEARCH_LIMIT: usize = 100_000;

/// Найти особую 13-карточную руку, если она есть.
///
/// Проверки идут в фиксированном порядке приоритета, от самого дорогого
/// типа вниз, поэтому вернётся ровно один (или ни одного) результат:
///   Dragon → ThreeFlushes → SixPairs → ThreeStraights.
///
/// Требует ровно 13 карт; другой размер — `EvalError::InvalidGroupSize`.
pub fn detect_special(cards: &[Card]) -> Result<Option<SpecialHand>, EvalError> {
    if cards.len() != 13 {
        return Err(EvalError::InvalidGroupSize(cards.len()));
    }

    let kind = if is_dragon(cards) {
        Some(SpecialKind::Dragon)
    } else if is_three_flushes(cards) {
        Some(SpecialKind::ThreeFlushes)
    } else if is_six_pairs(cards) {
        Some(SpecialKind::SixPairs)
    } else if is_three_straights(cards) {
        Some(SpecialKind::ThreeStraights)
    } else {
        None
    };

    Ok(kind.map(|kind| SpecialHand {
        kind,
        cards: cards.to_vec(),
    }))
}

/// "Дракон": все 13 рангов различны, т.е. ровно 2..A по одному разу.
fn is_dragon(cards: &[Card]) -> bool {
    let mut mask: RankMask = 0;
    for card in cards {
        mask |= rank_to_bit(card.rank);
    }
    mask.count_ones() == 13
}

/// "Шесть пар": мультимножество счётчиков рангов — шесть двоек плюс
/// одна единица. Каре легально считается двумя парами, а вот тройка
/// (пара + одиночка того же ранга) руку дисквалифицирует.
fn is_six_pairs(cards: &[Card]) -> bool {
    let mut rank_counts = [0u8; 15];
    for card in cards {
        rank_counts[card.rank.value() as usize] += 1;
    }

    let mut pairs = 0u8;
    let mut singles = 0u8;
    for c in rank_counts {
        match c {
            0 => {}
            1 => singles += 1,
            2 => pairs += 1,
            4 => pairs += 2,
            // count == 3: сет не раскладывается на чистые пары
            _ => return false,
        }
    }
    pairs == 6 && singles == 1
}

/// "Три флеша": рука разбивается на три одномастные группы 3/5/5.
fn is_three_flushes(cards: &[Card]) -> bool {
    find_partition_355(cards, group_is_one_suit, group_is_one_suit)
}

/// "Три стрита": рука разбивается на стрит-тройку и два 5-карточных
/// стрита (wheel'ы A23 и A2345 допустимы).
fn is_three_straights(cards: &[Card]) -> bool {
    find_partition_355(cards, group_is_run3, group_is_run5)
}

fn group_is_one_suit(group: &[Card]) -> bool {
    let first = group[0].suit;
    group.iter().all(|c| c.suit == first)
}

fn group_is_run3(group: &[Card]) -> bool {
    detect_straight3(group_mask(group)).is_some()
}

fn group_is_run5(group: &[Card]) -> bool {
    detect_straight(group_mask(group)).is_some()
}

/// Маска рангов группы. Дубликат ранга даёт < len(group) бит,
/// так что маска с дублями ни один стрит-шаблон не покроет.
fn group_mask(group: &[Card]) -> RankMask {
    let mut mask: RankMask = 0;
    for card in group {
        mask |= rank_to_bit(card.rank);
    }
    mask
}

/// Исчерпывающий перебор разбиений 13 карт на группы 3/5/5.
///
/// Возвращает true, если есть разбиение, где передняя тройка проходит
/// `ok3`, а обе пятёрки — `ok5`. Это требование правил (не эвристика):
/// пропущенное валидное разбиение — это неверно засчитанный раунд.
fn find_partition_355(
    cards: &[Card],
    ok3: impl Fn(&[Card]) -> bool,
    ok5: impl Fn(&[Card]) -> bool,
) -> bool {
    debug_assert_eq!(cards.len(), 13);

    let mut iterations = 0usize;

    for front_idx in Combinations::new(13, 3) {
        let front: Vec<Card> = front_idx.iter().map(|&i| cards[i]).collect();
        if !ok3(&front) {
            // Пятёрки перебирать незачем — тройка уже не подходит.
            iterations += 1;
            if iterations > PARTITION_SEARCH_LIMIT {
                return false;
            }
            continue;
        }

        let rest: Vec<Card> = (0..13)
            .filter(|i| !front_idx.contains(i))
            .map(|i| cards[i])
            .collect();

        for mid_idx in Combinations::new(10, 5) {
            iterations += 1;
            if iterations > PARTITION_SEARCH_LIMIT {
                return false;
            }

            let middle: Vec<Card> = mid_idx.iter().map(|&i| rest[i]).collect();
            if !ok5(&middle) {
                continue;
            }

            let back: Vec<Card> = (0..10)
                .filter(|i| !mid_idx.contains(i))
                .map(|i| rest[i])
                .collect();
            if ok5(&back) {
                return true;
            }
        }
    }

    false
}
