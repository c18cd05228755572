//! Движок раунда "Тринадцати вод": раздача, проверка раскладок, счёт.
//!
//! Высокоуровневый объект: `GameRound` — явный контекст одного раунда.
//! Основные операции:
//!   - `shuffle` / `deal` — перемешать колоду и раздать без возврата
//!   - `validate_arrangement` — проверка 3/5/5 на "фол"
//!   - `score_round` — попарный счёт игроков с бонусами

pub mod dealing;
pub mod errors;
pub mod round;
pub mod scoring;
pub mod validation;

pub use dealing::{deal, shuffle};
pub use errors::EngineError;
pub use round::GameRound;
pub use scoring::{score_round, PairOutcome, PairResult, PlayerEntry, RoundReport, ScoreTable, SlotOutcome};
pub use validation::validate_arrangement;

/// RNG интерфейс для engine.
/// Реализации живут в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
