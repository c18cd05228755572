use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Слот раскладки: передняя "дорога" из 3 карт, средняя и задняя по 5.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Slot {
    Front,
    Middle,
    Back,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Front, Slot::Middle, Slot::Back];

    /// Сколько карт должно лежать в слоте.
    pub fn expected_len(self) -> usize {
        match self {
            Slot::Front => 3,
            Slot::Middle => 5,
            Slot::Back => 5,
        }
    }
}

/// Раскладка 3/5/5 одного игрока на один раунд.
/// Принадлежит ровно одной паре (игрок, раунд); после создания не мутируется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Arrangement {
    pub front: Vec<Card>,
    pub middle: Vec<Card>,
    pub back: Vec<Card>,
}

impl Arrangement {
    pub fn new(front: Vec<Card>, middle: Vec<Card>, back: Vec<Card>) -> Self {
        Self { front, middle, back }
    }

    pub fn slot(&self, slot: Slot) -> &[Card] {
        match slot {
            Slot::Front => &self.front,
            Slot::Middle => &self.middle,
            Slot::Back => &self.back,
        }
    }

    /// Структурная проверка размеров 3/5/5.
    pub fn has_legal_sizes(&self) -> bool {
        self.front.len() == 3 && self.middle.len() == 5 && self.back.len() == 5
    }
}

/// Почему раскладка признана "фолом".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum FoulReason {
    /// Размеры слотов не 3/5/5.
    WrongSizes,
    /// Средняя дорога слабее передней.
    MiddleBelowFront,
    /// Задняя дорога слабее средней.
    BackBelowMiddle,
}

/// Итог проверки раскладки. Fouled — НЕ ошибка, а легальное игровое
/// состояние: такая раскладка остаётся в игре и проигрывает автоматически.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ArrangementVerdict {
    Valid,
    Fouled(FoulReason),
}

impl ArrangementVerdict {
    pub fn is_fouled(&self) -> bool {
        matches!(self, ArrangementVerdict::Fouled(_))
    }
}
