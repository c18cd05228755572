use core::cmp::Ordering;

use crate::domain::card::Rank;
use crate::domain::hand::HandClass;

/// Полный порядок над классифицированными руками.
///
/// Сначала сила категории, при равенстве — `primary` поэлементно
/// (первое расхождение решает), затем так же `kickers`. Если всё совпало —
/// настоящая ничья. Функция не знает, из какого слота пришли руки:
/// правильные пары слотов — ответственность вызывающего.
pub fn compare_hands(a: &HandClass, b: &HandClass) -> Ordering {
    (a.category as u8)
        .cmp(&(b.category as u8))
        .then_with(|| compare_keys(&a.primary, &b.primary))
        .then_with(|| compare_keys(&a.kickers, &b.kickers))
}

/// Поэлементное сравнение последовательностей рангов.
fn compare_keys(a: &[Rank], b: &[Rank]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
