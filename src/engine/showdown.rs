use std::collections::HashMap;

use log::info;

use crate::domain::{HandOutcome, HandRank, Player, RankingResult, SeatIndex, ShowdownEntry};
use crate::engine::game_loop::RoundState;
use crate::engine::hand_history::HandEventKind;
use crate::engine::positions::seats_after;
use crate::engine::side_pots::award_pots;
use crate::eval::{describe_hand, evaluate_best_hand, EvaluatedHand};

/// Вскрытие: оценить руки оставшихся игроков, разыграть банки по порядку
/// (основной, затем сайд-поты) и записать иерархию рук в `outcome`.
pub(crate) fn resolve_showdown(state: &mut RoundState) {
    let evaluated: Vec<(SeatIndex, EvaluatedHand)> = state
        .players
        .iter()
        .filter(|p| p.is_in_hand())
        .filter_map(|p| {
            evaluate_best_hand(&p.hole_cards, &state.community_cards).map(|hand| (p.seat, hand))
        })
        .collect();

    for (seat, hand) in &evaluated {
        let hole_cards = state.players[*seat as usize].hole_cards.clone();
        state.history.push(HandEventKind::ShowdownReveal {
            seat: *seat,
            hole_cards,
            rank: hand.rank,
            description: describe_hand(hand.rank),
        });
    }

    let ranks: HashMap<SeatIndex, HandRank> =
        evaluated.iter().map(|(seat, hand)| (*seat, hand.rank)).collect();
    // Лишние фишки при делёжке уходят первым по часовой от дилера.
    let payout_order = seats_after(&state.players, state.dealer_index, |_| true);
    let awards = award_pots(&state.pots.pots, &ranks, &payout_order);

    for award in &awards {
        state.players[award.seat as usize].stack += award.amount;
        state.history.push(HandEventKind::PotAwarded {
            seat: award.seat,
            pot_index: award.pot_index,
            amount: award.amount,
        });
        info!(
            "hand #{}: seat {} wins {} from pot #{}",
            state.hand_number, award.seat, award.amount, award.pot_index
        );
    }
    state.pots.reset();

    let hierarchy = rank_hierarchy(&state.players, evaluated);
    state.outcome = Some(HandOutcome::Showdown { hierarchy, awards });
}

/// Иерархия рук от сильнейшей к слабейшей; равные руки объединяются в `Tie`.
fn rank_hierarchy(players: &[Player], mut evaluated: Vec<(SeatIndex, EvaluatedHand)>) -> Vec<RankingResult> {
    evaluated.sort_by(|a, b| b.1.rank.cmp(&a.1.rank).then(a.0.cmp(&b.0)));

    let mut groups: Vec<Vec<ShowdownEntry>> = Vec::new();
    for (seat, hand) in evaluated {
        let player = &players[seat as usize];
        let entry = ShowdownEntry {
            seat,
            name: player.name.clone(),
            description: describe_hand(hand.rank),
            rank: hand.rank,
            best_hand: hand.best_five,
            chip_delta: player.chip_delta(),
        };
        match groups.last_mut() {
            Some(group) if group[0].rank == entry.rank => group.push(entry),
            _ => groups.push(vec![entry]),
        }
    }

    groups
        .into_iter()
        .map(|mut group| {
            if group.len() == 1 {
                RankingResult::Single(group.remove(0))
            } else {
                RankingResult::Tie(group)
            }
        })
        .collect()
}
