use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};

/// Категория комбинации по силе. Один закрытый порядок для всей системы:
/// любое сравнение рук опирается именно на эти значения.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    /// Человеческое название категории (для отчётов/UI).
    pub fn describe(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
        }
    }
}

/// Результат классификации 3- или 5-карточной группы.
///
/// `primary` — ранги, определяющие категорию (ранг каре, старшая карта
/// стрита, обе пары двухпарной руки и т.д.), от важного к менее важному.
/// `kickers` — оставшиеся ранги по убыванию, для тай-брейка.
/// После создания не мутируется: при любом изменении карт пересобираем заново.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandClass {
    pub category: HandCategory,
    pub primary: Vec<Rank>,
    pub kickers: Vec<Rank>,
    /// Исходные карты группы (как их передал вызывающий).
    pub cards: Vec<Card>,
}

/// Особая 13-карточная рука. Проверяется ДО разбиения на 3/5/5
/// и отменяет обычный послотовый счёт.
///
/// Порядок вариантов — по силе (и приоритету проверки): сверяем от Dragon вниз.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecialKind {
    ThreeStraights = 0,
    SixPairs = 1,
    ThreeFlushes = 2,
    Dragon = 3,
}

impl SpecialKind {
    pub fn describe(self) -> &'static str {
        match self {
            SpecialKind::ThreeStraights => "Three straights",
            SpecialKind::SixPairs => "Six pairs",
            SpecialKind::ThreeFlushes => "Three flushes",
            SpecialKind::Dragon => "Dragon",
        }
    }
}

/// Найденная особая рука игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecialHand {
    pub kind: SpecialKind,
    /// Все 13 карт, по которым рука была определена.
    pub cards: Vec<Card>,
}
