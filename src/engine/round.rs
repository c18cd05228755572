use serde::{Deserialize, Serialize};

use crate::domain::arrangement::{Arrangement, ArrangementVerdict};
use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::player::RoundSeat;
use crate::domain::{PlayerId, RoundId};
use crate::engine::dealing::{deal, shuffle};
use crate::engine::errors::EngineError;
use crate::engine::scoring::{score_round, PlayerEntry, RoundReport, ScoreTable};
use crate::engine::{validate_arrangement, RandomSource};
use crate::eval::detect_special;

/// Сколько карт получает каждый игрок.
pub const CARDS_PER_PLAYER: usize = 13;

/// Контекст одного раунда: раздача → раскладки → счёт.
///
/// Явный объект вместо модульных глобалов комнаты: сам движок остаётся
/// без состояния, всё принадлежащее раунду лежит здесь и умирает с ним.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRound {
    pub round_id: RoundId,
    pub seats: Vec<RoundSeat>,
}

impl GameRound {
    /// Раздать новый раунд: свежая колода, перемешивание, по 13 карт
    /// каждому игроку, сразу же — поиск особых 13-карточных рук.
    pub fn deal(
        round_id: RoundId,
        player_ids: &[PlayerId],
        rng: &mut impl RandomSource,
    ) -> Result<Self, EngineError> {
        if player_ids.len() < 2 {
            return Err(EngineError::NotEnoughPlayers(player_ids.len()));
        }
        if player_ids.len() > 4 {
            return Err(EngineError::TooManyPlayers(player_ids.len()));
        }

        let mut deck = Deck::standard_52();
        shuffle(&mut deck, rng);

        let mut seats = Vec::with_capacity(player_ids.len());
        for &player_id in player_ids {
            let cards = deal(&mut deck, CARDS_PER_PLAYER)?;
            let special = detect_special(&cards)?;
            let mut seat = RoundSeat::new(player_id, cards);
            seat.special = special;
            seats.push(seat);
        }

        Ok(Self { round_id, seats })
    }

    pub fn seat(&self, player: PlayerId) -> Option<&RoundSeat> {
        self.seats.iter().find(|s| s.player_id == player)
    }

    /// Принять раскладку игрока.
    ///
    /// Структурные нарушения (не 3/5/5, чужие или потерянные карты) —
    /// это ошибки интеграции и отклоняются сразу. "Фол" же — легальный
    /// исход: раскладка сохраняется, а вердикт возвращается вызывающему.
    pub fn submit_arrangement(
        &mut self,
        player: PlayerId,
        arrangement: Arrangement,
    ) -> Result<ArrangementVerdict, EngineError> {
        let seat = self
            .seats
            .iter_mut()
            .find(|s| s.player_id == player)
            .ok_or(EngineError::PlayerNotInRound(player))?;

        if !arrangement.has_legal_sizes() {
            return Err(EngineError::MalformedArrangement {
                front: arrangement.front.len(),
                middle: arrangement.middle.len(),
                back: arrangement.back.len(),
            });
        }

        let mut submitted: Vec<Card> = arrangement
            .front
            .iter()
            .chain(arrangement.middle.iter())
            .chain(arrangement.back.iter())
            .copied()
            .collect();
        let mut dealt = seat.cards.clone();
        sort_cards(&mut submitted);
        sort_cards(&mut dealt);
        if submitted != dealt {
            return Err(EngineError::ForeignCards(player));
        }

        let verdict = validate_arrangement(&arrangement);
        seat.arrangement = Some(arrangement);
        Ok(verdict)
    }

    /// Посчитать раунд. Каждый игрок без особой руки обязан успеть
    /// сдать раскладку — иначе `ArrangementMissing`.
    pub fn score(&self, table: &ScoreTable) -> Result<RoundReport, EngineError> {
        for seat in &self.seats {
            if seat.special.is_none() && seat.arrangement.is_none() {
                return Err(EngineError::ArrangementMissing(seat.player_id));
            }
        }

        let entries: Vec<PlayerEntry> = self
            .seats
            .iter()
            .map(|seat| PlayerEntry {
                player_id: seat.player_id,
                arrangement: seat.arrangement.clone(),
                special: seat.special.clone(),
            })
            .collect();

        Ok(score_round(&entries, table))
    }
}

/// Канонический порядок для сравнения мультимножеств карт.
fn sort_cards(cards: &mut [Card]) {
    cards.sort_by_key(|c| (c.rank.value(), c.suit.index()));
}
