//! Доменная модель игры: карты, колода, категории рук, раскладка, очки.

pub mod arrangement;
pub mod card;
pub mod deck;
pub mod hand;
pub mod player;
pub mod points;

// Базовые идентификаторы (комната и раунд живут во внешнем приложении,
// движку нужны только числа для seed-derivation и отчётов).
pub type PlayerId = u64;
pub type RoomId = u64;
pub type RoundId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use arrangement::*;
pub use card::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use points::*;
