use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Перемешать колоду. Вся случайность — в `RandomSource`, так что
/// с DeterministicRng раздачи полностью воспроизводимы.
pub fn shuffle(deck: &mut Deck, rng: &mut impl RandomSource) {
    rng.shuffle(&mut deck.cards);
}

/// Снять ровно n карт с колоды.
///
/// Если карт не хватает — `InsufficientCards`, а колода остаётся
/// нетронутой. Молчаливой неполной раздачи не бывает.
pub fn deal(deck: &mut Deck, n: usize) -> Result<Vec<Card>, EngineError> {
    if deck.len() < n {
        return Err(EngineError::InsufficientCards {
            requested: n,
            remaining: deck.len(),
        });
    }
    Ok(deck.draw_top(n))
}
