use core::cmp::Ordering;

use crate::domain::arrangement::{Arrangement, ArrangementVerdict, FoulReason};
use crate::eval::{classify, compare_hands};

/// Проверить раскладку 3/5/5 на "фол" (правило нерегрессии:
/// front ≤ middle ≤ back).
///
/// Первое нарушенное правило и попадает в вердикт. Неверные размеры
/// слотов — защитная проверка: из корректного UI такое не приходит,
/// но сюда оно возвращается как обычный `Fouled(WrongSizes)`,
/// а не паника и не ошибка сквозь вызывающего.
pub fn validate_arrangement(arrangement: &Arrangement) -> ArrangementVerdict {
    if !arrangement.has_legal_sizes() {
        return ArrangementVerdict::Fouled(FoulReason::WrongSizes);
    }

    // Размеры проверены выше, classify на 3/5 не может не сработать.
    let front = classify(&arrangement.front).expect("front size checked");
    let middle = classify(&arrangement.middle).expect("middle size checked");
    let back = classify(&arrangement.back).expect("back size checked");

    if compare_hands(&front, &middle) == Ordering::Greater {
        return ArrangementVerdict::Fouled(FoulReason::MiddleBelowFront);
    }
    if compare_hands(&middle, &back) == Ordering::Greater {
        return ArrangementVerdict::Fouled(FoulReason::BackBelowMiddle);
    }

    ArrangementVerdict::Valid
}
