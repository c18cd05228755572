//! Модуль оценки комбинаций "Тринадцати вод".
//!
//! Основные функции:
//!   `classify(cards) -> HandClass` — категория 3/5-карточной группы
//!   `compare_hands(a, b) -> Ordering` — полный порядок над руками
//!   `detect_special(cards) -> Option<SpecialHand>` — особые 13-карточные руки

pub mod classifier;
pub mod combos;
pub mod compare;
pub mod lookup_tables;
pub mod special;

pub use classifier::{classify, EvalError};
pub use compare::compare_hands;
pub use special::detect_special;
