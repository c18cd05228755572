use crate::domain::card::Rank;

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Константы масок для всех 5-карточных стритов (5 подряд).
/// Индексация по "старшей карте" стрита.
///
/// Индексы:
///   0: A-5 (wheel)     : A2345
///   1: 6-2             : 23456
///   2: 7-3             : 34567
///   3: 8-4             : 45678
///   4: 9-5             : 56789
///   5: T-6             : 6789T
///   6: J-7             : 789TJ
///   7: Q-8             : 89TJQ
///   8: K-9             : 9TJQK
///   9: A-T (broadway)  : TJQKA
pub const STRAIGHT_MASKS: [RankMask; 10] = [
    // A2345 (wheel)
    mask_from_ranks(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]),
    mask_from_ranks(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]),
    mask_from_ranks(&[Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven]),
    mask_from_ranks(&[Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight]),
    mask_from_ranks(&[Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine]),
    mask_from_ranks(&[Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten]),
    mask_from_ranks(&[Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack]),
    mask_from_ranks(&[Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen]),
    mask_from_ranks(&[Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]),
    // TJQKA (broadway)
    mask_from_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]),
];

/// Маски 3-карточных "стритов" для детектора особых рук
/// (в передней дороге "три подряд" — это стрит-тройка).
/// A23 считается wheel'ом (старшая — тройка), QKA — обычный верхний.
///
/// Индексы:
///   0: A23 (wheel), 1: 234, ..., 11: QKA
pub const STRAIGHT3_MASKS: [RankMask; 12] = [
    // A23 (wheel)
    mask_from_ranks(&[Rank::Ace, Rank::Two, Rank::Three]),
    mask_from_ranks(&[Rank::Two, Rank::Three, Rank::Four]),
    mask_from_ranks(&[Rank::Three, Rank::Four, Rank::Five]),
    mask_from_ranks(&[Rank::Four, Rank::Five, Rank::Six]),
    mask_from_ranks(&[Rank::Five, Rank::Six, Rank::Seven]),
    mask_from_ranks(&[Rank::Six, Rank::Seven, Rank::Eight]),
    mask_from_ranks(&[Rank::Seven, Rank::Eight, Rank::Nine]),
    mask_from_ranks(&[Rank::Eight, Rank::Nine, Rank::Ten]),
    mask_from_ranks(&[Rank::Nine, Rank::Ten, Rank::Jack]),
    mask_from_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen]),
    mask_from_ranks(&[Rank::Jack, Rank::Queen, Rank::King]),
    // QKA
    mask_from_ranks(&[Rank::Queen, Rank::King, Rank::Ace]),
];

/// Получить битовую маску для одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    let idx = (rank as u8).saturating_sub(2); // Rank::Two = 2
    1u16 << idx
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        let r = ranks[i] as u8;
        let idx = r.saturating_sub(2);
        mask |= 1 << idx;
        i += 1;
    }
    mask
}

/// Найти 5-карточный стрит в битовой маске рангов.
/// Возвращает старшую карту стрита, если он есть.
///
/// Особый случай: wheel (A2345) → возвращаем Rank::Five, не туза.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    // Проверяем от самого сильного (broadway) к слабейшему.
    for (i, sm) in STRAIGHT_MASKS.iter().enumerate().rev() {
        if rank_mask & sm == *sm {
            return Some(match i {
                0 => Rank::Five, // wheel A2345
                _ => Rank::from_value(i as u8 + 5).unwrap_or(Rank::Ace),
            });
        }
    }
    None
}

/// Найти 3-карточный стрит (ровно 3 подряд) в маске рангов.
/// Возвращает старшую карту; A23 → Rank::Three.
pub fn detect_straight3(rank_mask: RankMask) -> Option<Rank> {
    for (i, sm) in STRAIGHT3_MASKS.iter().enumerate().rev() {
        if rank_mask & sm == *sm {
            return Some(match i {
                0 => Rank::Three, // wheel A23
                _ => Rank::from_value(i as u8 + 3).unwrap_or(Rank::Ace),
            });
        }
    }
    None
}
