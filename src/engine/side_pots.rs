use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, HandRank, PotAward, SeatIndex};

/// Сайд-пот: часть банка, на которую претендуют только некоторые игроки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    /// Не сфолдившие места, внёсшие не меньше уровня этого банка (по возрастанию).
    pub eligible_seats: Vec<SeatIndex>,
}

/// Посчитать банки из сумм, которые внесли игроки.
///
/// Вход: contributions[seat] = сколько суммарно фишек внёс игрок (во всех улицах),
/// folded = сфолдившие места (их фишки остаются в банке, но претендовать они не могут).
/// Выход: основной банк первым, дальше сайд-поты; множества претендентов
/// строго сужаются от банка к банку.
pub fn compute_side_pots(
    contributions: &BTreeMap<SeatIndex, Chips>,
    folded: &BTreeSet<SeatIndex>,
) -> Vec<SidePot> {
    let mut levels: Vec<Chips> = contributions
        .values()
        .copied()
        .filter(|c| !c.is_zero())
        .collect();
    levels.sort_unstable();
    levels.dedup();

    let mut pots: Vec<SidePot> = Vec::new();
    // Слой, у которого пока нет претендентов (вклады только сфолдивших).
    let mut orphaned = Chips::ZERO;
    let mut prev_level = Chips::ZERO;

    for level in levels {
        let amount: Chips = contributions
            .values()
            .map(|&c| c.min(level).saturating_sub(c.min(prev_level)))
            .sum();
        let eligible: Vec<SeatIndex> = contributions
            .iter()
            .filter(|(seat, c)| **c >= level && !folded.contains(*seat))
            .map(|(seat, _)| *seat)
            .collect();
        prev_level = level;

        if eligible.is_empty() {
            match pots.last_mut() {
                Some(last) => last.amount += amount,
                None => orphaned += amount,
            }
            continue;
        }

        let same_as_last = pots
            .last()
            .map_or(false, |last| last.eligible_seats == eligible);
        if same_as_last {
            if let Some(last) = pots.last_mut() {
                last.amount += amount;
            }
        } else {
            pots.push(SidePot {
                amount: amount + orphaned,
                eligible_seats: eligible,
            });
            orphaned = Chips::ZERO;
        }
    }

    if !orphaned.is_zero() {
        // Претендентов нет вообще: все внёсшие сфолдили. Фишки не теряем.
        pots.push(SidePot {
            amount: orphaned,
            eligible_seats: Vec::new(),
        });
    }

    pots
}

/// Раздать банки по силе рук.
///
/// `ranks` — ранги не сфолдивших игроков на шоудауне.
/// `payout_order` — места по часовой стрелке, начиная со следующего после дилера:
/// в этом порядке при сплите раздаются лишние фишки (по одной).
pub fn award_pots(
    pots: &[SidePot],
    ranks: &HashMap<SeatIndex, HandRank>,
    payout_order: &[SeatIndex],
) -> Vec<PotAward> {
    let mut awards = Vec::new();

    for (pot_index, pot) in pots.iter().enumerate() {
        if pot.amount.is_zero() {
            continue;
        }

        let best = pot
            .eligible_seats
            .iter()
            .filter_map(|seat| ranks.get(seat))
            .max()
            .copied();
        let Some(best) = best else {
            log::warn!("pot #{pot_index} ({}) has no claimant at showdown", pot.amount);
            continue;
        };

        let winners: Vec<SeatIndex> = payout_order
            .iter()
            .copied()
            .filter(|seat| pot.eligible_seats.contains(seat) && ranks.get(seat) == Some(&best))
            .collect();

        let (share, remainder) = pot.amount.split(winners.len());
        for (i, &seat) in winners.iter().enumerate() {
            let extra = if (i as u64) < remainder.0 { Chips(1) } else { Chips::ZERO };
            awards.push(PotAward {
                pot_index,
                seat,
                amount: share + extra,
            });
        }
    }

    awards
}
