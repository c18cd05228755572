use serde::{Deserialize, Serialize};

use crate::domain::arrangement::Arrangement;
use crate::domain::card::Card;
use crate::domain::hand::SpecialHand;
use crate::domain::PlayerId;

/// Место игрока в одном раунде: его 13 карт и (когда придёт) раскладка.
/// Снимок принадлежит ровно одному (игроку, раунду) — никакого шаринга.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSeat {
    pub player_id: PlayerId,
    /// Ровно 13 карт после раздачи.
    pub cards: Vec<Card>,
    /// Раскладка 3/5/5; None, пока игрок её не сдал.
    pub arrangement: Option<Arrangement>,
    /// Особая 13-карточная рука, если нашлась при раздаче.
    pub special: Option<SpecialHand>,
}

impl RoundSeat {
    pub fn new(player_id: PlayerId, cards: Vec<Card>) -> Self {
        Self {
            player_id,
            cards,
            arrangement: None,
            special: None,
        }
    }
}
