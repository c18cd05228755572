use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::arrangement::{Arrangement, Slot};
use crate::domain::hand::{HandCategory, HandClass, SpecialHand, SpecialKind};
use crate::domain::points::Points;
use crate::domain::PlayerId;
use crate::eval::{classify, compare_hands};

/// Таблица очков. Исходные черновики правил так и не сошлись на точных
/// значениях бонусов, поэтому это конфигурация, а не константы движка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreTable {
    /// Базовая цена выигранного слота для обычных категорий.
    pub base_slot_point: Points,
    /// Точечные надбавки цены слота для конкретных (слот, категория).
    pub slot_overrides: Vec<SlotWeight>,
    /// Фиксированные бонусы особых 13-карточных рук.
    pub three_straights_bonus: Points,
    pub six_pairs_bonus: Points,
    pub three_flushes_bonus: Points,
    pub dragon_bonus: Points,
}

/// Переопределённая цена победы в слоте данной категорией.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotWeight {
    pub slot: Slot,
    pub category: HandCategory,
    pub points: Points,
}

impl Default for ScoreTable {
    /// Все обычные слоты по 1 очку; бонусы особых рук монотонны
    /// их приоритету: дракон дороже всех.
    fn default() -> Self {
        Self {
            base_slot_point: Points(1),
            slot_overrides: Vec::new(),
            three_straights_bonus: Points(4),
            six_pairs_bonus: Points(5),
            three_flushes_bonus: Points(6),
            dragon_bonus: Points(13),
        }
    }
}

impl ScoreTable {
    /// Традиционный вариант: сет в передней дороге, фулл-хаус в средней,
    /// каре и стрит-флеш в пятикарточных слотах стоят дороже единицы.
    pub fn classic() -> Self {
        Self {
            slot_overrides: vec![
                SlotWeight {
                    slot: Slot::Front,
                    category: HandCategory::ThreeOfAKind,
                    points: Points(3),
                },
                SlotWeight {
                    slot: Slot::Middle,
                    category: HandCategory::FullHouse,
                    points: Points(2),
                },
                SlotWeight {
                    slot: Slot::Middle,
                    category: HandCategory::FourOfAKind,
                    points: Points(4),
                },
                SlotWeight {
                    slot: Slot::Back,
                    category: HandCategory::FourOfAKind,
                    points: Points(4),
                },
                SlotWeight {
                    slot: Slot::Middle,
                    category: HandCategory::StraightFlush,
                    points: Points(5),
                },
                SlotWeight {
                    slot: Slot::Back,
                    category: HandCategory::StraightFlush,
                    points: Points(5),
                },
            ],
            ..Self::default()
        }
    }

    /// Цена победы данной категорией в данном слоте.
    pub fn slot_points(&self, slot: Slot, category: HandCategory) -> Points {
        self.slot_overrides
            .iter()
            .find(|w| w.slot == slot && w.category == category)
            .map(|w| w.points)
            .unwrap_or(self.base_slot_point)
    }

    /// Бонус особой 13-карточной руки.
    pub fn special_points(&self, kind: SpecialKind) -> Points {
        match kind {
            SpecialKind::ThreeStraights => self.three_straights_bonus,
            SpecialKind::SixPairs => self.six_pairs_bonus,
            SpecialKind::ThreeFlushes => self.three_flushes_bonus,
            SpecialKind::Dragon => self.dragon_bonus,
        }
    }
}

/// Вход скоринга: один игрок раунда.
///
/// Раскладка может отсутствовать только у держателя особой руки
/// (она отменяет разбиение); отсутствие и того и другого — "фол".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerEntry {
    pub player_id: PlayerId,
    pub arrangement: Option<Arrangement>,
    pub special: Option<SpecialHand>,
}

/// Итог одного слота в паре игроков. `winner == None` — ничья.
/// Категория — выигравшая (при ничьей категории равны, берём общую).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotOutcome {
    pub slot: Slot,
    pub winner: Option<PlayerId>,
    pub category: HandCategory,
    pub points: Points,
}

/// Как разрешилась одна пара игроков.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PairOutcome {
    /// Особая рука против обычной (или более слабой особой).
    SpecialWin {
        winner: PlayerId,
        kind: SpecialKind,
        points: Points,
    },
    /// Одинаковые особые руки — ничья, очки не двигаются.
    SpecialTie { kind: SpecialKind },
    /// Фол против валидной раскладки: все три слота уходят сопернику.
    FoulLoss { winner: PlayerId, points: Points },
    /// Оба сфолили — ничья.
    BothFouled,
    /// Обычное послотовое сравнение.
    Slots {
        slots: [SlotOutcome; 3],
        /// Кто забрал все три слота (удвоение), если такой был.
        swept_by: Option<PlayerId>,
    },
}

/// Результат пары (a, b). `net` — очки a против b; b получает `-net`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PairResult {
    pub a: PlayerId,
    pub b: PlayerId,
    pub net: Points,
    pub outcome: PairOutcome,
}

/// Суммарный счёт игрока за раунд.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerScore {
    pub player_id: PlayerId,
    pub total: Points,
}

/// Полный отчёт раунда: итоги и разбор по парам для UI.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundReport {
    pub scores: Vec<PlayerScore>,
    pub pairs: Vec<PairResult>,
}

impl RoundReport {
    pub fn total_of(&self, player: PlayerId) -> Option<Points> {
        self.scores
            .iter()
            .find(|s| s.player_id == player)
            .map(|s| s.total)
    }
}

/// Подготовленное состояние игрока: вердикт и классифицированные слоты.
struct Prepared {
    player_id: PlayerId,
    special: Option<SpecialKind>,
    /// Some только для валидной раскладки.
    slots: Option<[HandClass; 3]>,
}

impl Prepared {
    fn from_entry(entry: &PlayerEntry) -> Prepared {
        let special = entry.special.as_ref().map(|s| s.kind);

        let slots = match &entry.arrangement {
            Some(arr) if !crate::engine::validate_arrangement(arr).is_fouled() => {
                // Вердикт Valid ⇒ размеры 3/5/5, classify не упадёт.
                let front = classify(&arr.front).expect("front size checked");
                let middle = classify(&arr.middle).expect("middle size checked");
                let back = classify(&arr.back).expect("back size checked");
                Some([front, middle, back])
            }
            _ => None,
        };

        Prepared {
            player_id: entry.player_id,
            special,
            slots,
        }
    }

    fn is_fouled(&self) -> bool {
        self.special.is_none() && self.slots.is_none()
    }
}

/// Попарный счёт всех игроков раунда.
///
/// Каждая неупорядоченная пара считается независимо; очки пары строго
/// антисимметричны (zero-sum внутри пары). Итог игрока — сумма его
/// результатов против каждого соперника, ровно в таком агрегировании.
pub fn score_round(entries: &[PlayerEntry], table: &ScoreTable) -> RoundReport {
    let prepared: Vec<Prepared> = entries.iter().map(Prepared::from_entry).collect();

    let mut totals = vec![Points::ZERO; entries.len()];
    let mut pairs = Vec::new();

    for i in 0..prepared.len() {
        for j in (i + 1)..prepared.len() {
            let (net, outcome) = settle_pair(&prepared[i], &prepared[j], table);
            totals[i] += net;
            totals[j] -= net;
            pairs.push(PairResult {
                a: prepared[i].player_id,
                b: prepared[j].player_id,
                net,
                outcome,
            });
        }
    }

    RoundReport {
        scores: prepared
            .iter()
            .zip(totals)
            .map(|(p, total)| PlayerScore {
                player_id: p.player_id,
                total,
            })
            .collect(),
        pairs,
    }
}

/// Разрешить одну пару. Возвращает (очки a против b, исход).
fn settle_pair(a: &Prepared, b: &Prepared, table: &ScoreTable) -> (Points, PairOutcome) {
    // Особые руки отменяют послотовый счёт целиком.
    match (a.special, b.special) {
        (Some(ka), Some(kb)) => {
            if ka == kb {
                return (Points::ZERO, PairOutcome::SpecialTie { kind: ka });
            }
            // Разные особые руки: сильнейшая выигрывает свой бонус.
            let (winner, kind, sign) = if ka > kb {
                (a.player_id, ka, 1i64)
            } else {
                (b.player_id, kb, -1i64)
            };
            let points = table.special_points(kind);
            return (
                Points(points.0 * sign),
                PairOutcome::SpecialWin {
                    winner,
                    kind,
                    points,
                },
            );
        }
        (Some(ka), None) => {
            let points = table.special_points(ka);
            return (
                points,
                PairOutcome::SpecialWin {
                    winner: a.player_id,
                    kind: ka,
                    points,
                },
            );
        }
        (None, Some(kb)) => {
            let points = table.special_points(kb);
            return (
                -points,
                PairOutcome::SpecialWin {
                    winner: b.player_id,
                    kind: kb,
                    points,
                },
            );
        }
        (None, None) => {}
    }

    // Фолы: проигравший отдаёт все три слота по ценам победителя.
    match (a.slots.as_ref(), b.slots.as_ref()) {
        (None, None) => (Points::ZERO, PairOutcome::BothFouled),
        (Some(slots_a), None) => {
            let points = foul_credit(slots_a, table);
            (
                points,
                PairOutcome::FoulLoss {
                    winner: a.player_id,
                    points,
                },
            )
        }
        (None, Some(slots_b)) => {
            let points = foul_credit(slots_b, table);
            (
                -points,
                PairOutcome::FoulLoss {
                    winner: b.player_id,
                    points,
                },
            )
        }
        (Some(slots_a), Some(slots_b)) => settle_slots(a, b, slots_a, slots_b, table),
    }
}

/// Полный кредит за фол соперника: цена каждого слота по категориям
/// валидной стороны. Удвоения за "sweep" здесь нет — слоты не сравнивались.
fn foul_credit(slots: &[HandClass; 3], table: &ScoreTable) -> Points {
    let mut sum = Points::ZERO;
    for (slot, class) in Slot::ALL.iter().zip(slots.iter()) {
        sum += table.slot_points(*slot, class.category);
    }
    sum
}

/// Обычное послотовое сравнение двух валидных раскладок.
fn settle_slots(
    a: &Prepared,
    b: &Prepared,
    slots_a: &[HandClass; 3],
    slots_b: &[HandClass; 3],
    table: &ScoreTable,
) -> (Points, PairOutcome) {
    let mut net = Points::ZERO;
    let mut wins_a = 0u8;
    let mut wins_b = 0u8;
    let mut outcomes: Vec<SlotOutcome> = Vec::with_capacity(3);

    for ((slot, ca), cb) in Slot::ALL.iter().zip(slots_a.iter()).zip(slots_b.iter()) {
        match compare_hands(ca, cb) {
            Ordering::Greater => {
                let points = table.slot_points(*slot, ca.category);
                net += points;
                wins_a += 1;
                outcomes.push(SlotOutcome {
                    slot: *slot,
                    winner: Some(a.player_id),
                    category: ca.category,
                    points,
                });
            }
            Ordering::Less => {
                let points = table.slot_points(*slot, cb.category);
                net -= points;
                wins_b += 1;
                outcomes.push(SlotOutcome {
                    slot: *slot,
                    winner: Some(b.player_id),
                    category: cb.category,
                    points,
                });
            }
            Ordering::Equal => {
                outcomes.push(SlotOutcome {
                    slot: *slot,
                    winner: None,
                    category: ca.category,
                    points: Points::ZERO,
                });
            }
        }
    }

    // Sweep: все три слота одной стороне — чистый результат пары удваивается.
    let swept_by = if wins_a == 3 {
        Some(a.player_id)
    } else if wins_b == 3 {
        Some(b.player_id)
    } else {
        None
    };
    if swept_by.is_some() {
        net += net;
    }

    let slots: [SlotOutcome; 3] = outcomes
        .try_into()
        .expect("exactly three slots compared");

    (net, PairOutcome::Slots { slots, swept_by })
}
