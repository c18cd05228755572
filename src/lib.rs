//! Движок "Тринадцать вод" (十三水, китайский покер).
//!
//! Чистое вычислительное ядро: классификация 3/5-карточных комбинаций,
//! сравнение с тай-брейком, проверка раскладки 3/5/5 на "фол", особые
//! 13-карточные руки и подсчёт очков между игроками. Без сети, без UI,
//! без хранилища — всё это забота внешнего приложения.
//!
//! Основные входные точки:
//!   - `eval::classify` / `eval::compare_hands` / `eval::detect_special`
//!   - `engine::validate_arrangement`
//!   - `engine::score_round`
//!   - `engine::GameRound` — контекст одного раунда: раздача → раскладки → счёт

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
