use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Улица раздачи (раунд ставок).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Следующая улица; `None` после ривера (дальше только шоудаун).
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    /// Сколько общих карт открывается при переходе на эту улицу.
    pub fn cards_to_deal(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }
}

/// Фаза раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    /// Стол собран, колода перемешана, блайнды ещё не поставлены.
    Idle,
    /// Блайнды поставлены, карманные карты ещё не розданы.
    InitialDeal,
    /// Идёт раунд ставок на улице.
    Betting(Street),
    /// Раздача закончена (шоудаун или все сфолдили), банк распределён.
    Showdown,
}

impl Phase {
    pub fn street(self) -> Option<Street> {
        match self {
            Phase::Betting(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_betting(self) -> bool {
        matches!(self, Phase::Betting(_))
    }
}

/// Ранг руки. Чем больше значение, тем сильнее рука; равные руки дают
/// побитово равные значения. Кодирование — в `eval::hand_rank`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);

/// Запись шоудауна для одного игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownEntry {
    pub seat: SeatIndex,
    pub name: String,
    pub best_hand: Vec<Card>,
    pub rank: HandRank,
    /// Человеческое название комбинации ("Full house" и т.п.).
    pub description: String,
    /// Стек в конце раздачи минус стек в начале.
    pub chip_delta: i64,
}

/// Одна ступень иерархии шоудауна: либо один игрок, либо ничья.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RankingResult {
    Single(ShowdownEntry),
    Tie(Vec<ShowdownEntry>),
}

impl RankingResult {
    pub fn entries(&self) -> &[ShowdownEntry] {
        match self {
            RankingResult::Single(entry) => std::slice::from_ref(entry),
            RankingResult::Tie(entries) => entries,
        }
    }

    pub fn rank(&self) -> HandRank {
        // Tie всегда непустой: строится только из групп размером >= 2.
        self.entries().first().map(|e| e.rank).unwrap_or(HandRank(0))
    }
}

/// Выплата одного банка одному игроку.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotAward {
    /// Номер банка: 0 — основной, дальше сайд-поты.
    pub pot_index: usize,
    pub seat: SeatIndex,
    pub amount: Chips,
}

/// Итог раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandOutcome {
    /// Все, кроме одного, сфолдили — банк забирается без вскрытия.
    Uncontested { seat: SeatIndex, amount: Chips },
    /// Вскрытие: иерархия рук от сильнейшей к слабейшей и выплаты по банкам.
    Showdown {
        hierarchy: Vec<RankingResult>,
        awards: Vec<PotAward>,
    },
}
