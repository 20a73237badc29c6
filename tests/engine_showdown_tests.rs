//! Шоудаун и досрочный конец раздачи: сплит с лишней фишкой, рояль на
//! борде, иерархия рук, фолд до одного игрока.

use holdem_round_engine::domain::{
    parse_cards, Card, Chips, Deck, HandOutcome, Phase, RankingResult, SeatSpec, TableConfig,
};
use holdem_round_engine::engine::{
    deal_private_cards, handle_fold, new_table, post_blinds, submit_bet, HandEventKind,
    RandomSource, RoundState,
};

struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}

    fn pick_index(&mut self, _upper: usize) -> usize {
        0
    }

    fn roll_unit(&mut self) -> f64 {
        0.0
    }
}

fn stacked_deck(deal_order: &str) -> Deck {
    let dealt = parse_cards(deal_order).unwrap();
    let mut cards: Vec<Card> = Deck::standard_52()
        .cards
        .into_iter()
        .filter(|c| !dealt.contains(c))
        .collect();
    cards.extend(dealt.iter().rev());
    Deck::from_cards(cards)
}

fn table(stacks: &[u64], min_bet: u64, deal_order: Option<&str>) -> RoundState {
    let config = TableConfig {
        max_seats: stacks.len() as u8,
        min_bet: Chips(min_bet),
        ..TableConfig::default()
    };
    let seats: Vec<SeatSpec> = stacks
        .iter()
        .enumerate()
        .map(|(i, &s)| SeatSpec::human(format!("P{i}"), Chips(s)))
        .collect();
    let mut state = new_table(config, &seats, &mut DummyRng).unwrap();
    if let Some(order) = deal_order {
        state.deck = stacked_deck(order);
    }
    let state = post_blinds(&state).unwrap();
    deal_private_cards(&state).unwrap()
}

fn check_down(mut state: RoundState, order: &[u8]) -> RoundState {
    while state.phase.is_betting() {
        for &seat in order {
            if state.active_player_index == Some(seat) {
                state = submit_bet(&state, seat, Chips::ZERO).unwrap();
            }
        }
    }
    state
}

//
// ====================== SPLIT POT ======================
//

/// Рояль на борде: обе оставшиеся руки играют борд, банк 75 делится
/// 38 / 37, лишняя фишка – первому по часовой от дилера.
#[test]
fn royal_board_splits_with_odd_chip_clockwise_from_dealer() {
    // Раздача: 1, 2, 0, 1, 2, 0; потом флоп, тёрн, ривер.
    let state = table(
        &[1000, 1000, 1000],
        30,
        Some("4c 2d 2c 5d 3c 3d As Ks Qs Js Ts"),
    );
    assert_eq!(state.active_player_index, Some(0));

    let state = submit_bet(&state, 0, Chips(30)).unwrap();
    let state = handle_fold(&state, 1).unwrap();
    let state = submit_bet(&state, 2, Chips(30)).unwrap();
    assert_eq!(state.pots.total(), Chips(75));
    assert_eq!(state.pots.main(), Chips(75));
    assert_eq!(state.pots.pots[0].eligible_seats, vec![0, 2]);

    let state = check_down(state, &[2, 0]);
    assert_eq!(state.phase, Phase::Showdown);

    assert_eq!(state.players[2].stack, Chips(1008));
    assert_eq!(state.players[0].stack, Chips(1007));
    assert_eq!(state.players[1].stack, Chips(985));
    assert_eq!(state.chips_in_play(), Chips(3000));

    let Some(HandOutcome::Showdown { hierarchy, .. }) = &state.outcome else {
        panic!("ожидали шоудаун");
    };
    assert_eq!(hierarchy.len(), 1);
    let RankingResult::Tie(entries) = &hierarchy[0] else {
        panic!("ожидали ничью: {:?}", hierarchy[0]);
    };
    let seats: Vec<u8> = entries.iter().map(|e| e.seat).collect();
    assert_eq!(seats, vec![0, 2]);
    assert!(entries.iter().all(|e| e.rank.is_royal_flush()));
    assert!(entries.iter().all(|e| e.description == "Royal flush"));
    assert_eq!(entries[0].chip_delta, 7);
    assert_eq!(entries[1].chip_delta, 8);
}

#[test]
fn showdown_hierarchy_is_strongest_first() {
    // Место 0: сет, место 1: пара, место 2: старшая карта.
    let state = table(
        &[1000, 1000, 1000],
        20,
        Some("Kc 4d 9c Kd 6h 9d 9s 2h Jc 3s 8d"),
    );
    let state = submit_bet(&state, 0, Chips(20)).unwrap();
    let state = submit_bet(&state, 1, Chips(20)).unwrap();
    let state = submit_bet(&state, 2, Chips(20)).unwrap();
    let state = check_down(state, &[1, 2, 0]);

    let Some(HandOutcome::Showdown { hierarchy, awards }) = &state.outcome else {
        panic!("ожидали шоудаун");
    };
    let order: Vec<u8> = hierarchy.iter().map(|r| r.entries()[0].seat).collect();
    assert_eq!(order, vec![0, 1, 2]);
    assert!(hierarchy.windows(2).all(|w| w[0].rank() > w[1].rank()));
    assert_eq!(hierarchy[0].entries()[0].description, "Three of a kind");
    assert_eq!(hierarchy[0].entries()[0].best_hand.len(), 5);
    assert_eq!(awards.len(), 1);
    assert_eq!(awards[0].amount, Chips(60));
    assert_eq!(state.players[0].stack, Chips(1040));

    let reveals = state
        .history
        .events
        .iter()
        .filter(|e| matches!(e.kind, HandEventKind::ShowdownReveal { .. }))
        .count();
    assert_eq!(reveals, 3);
}

//
// ====================== FOLD TO ONE ======================
//

#[test]
fn fold_to_one_awards_pot_without_dealing_more_streets() {
    let state = table(&[1000, 1000, 1000], 20, None);
    let deck_before = state.deck.len();

    let state = handle_fold(&state, 0).unwrap();
    assert_eq!(state.active_player_index, Some(1));
    let state = handle_fold(&state, 1).unwrap();

    assert_eq!(state.phase, Phase::Showdown);
    assert!(state.community_cards.is_empty(), "улицы не открываются");
    assert_eq!(state.deck.len(), deck_before);
    assert_eq!(
        state.outcome,
        Some(HandOutcome::Uncontested {
            seat: 2,
            amount: Chips(30)
        })
    );
    assert_eq!(state.players[2].stack, Chips(1010));
    assert_eq!(state.players[1].stack, Chips(990));
    assert!(state.pots.total().is_zero());
    assert_eq!(state.active_player_index, None);
    assert_eq!(state.chips_in_play(), Chips(3000));

    let messages = state.history.messages();
    assert!(messages.iter().any(|m| m == "seat 2 wins 30 from pot #0"), "{messages:?}");
}

#[test]
fn fold_after_flop_bet_ends_hand() {
    let state = table(&[1000, 1000], 20, None);
    let state = submit_bet(&state, 0, Chips(20)).unwrap();
    let state = submit_bet(&state, 1, Chips(20)).unwrap();
    assert_eq!(state.community_cards.len(), 3);

    let state = submit_bet(&state, 1, Chips(100)).unwrap();
    let state = handle_fold(&state, 0).unwrap();

    assert_eq!(state.phase, Phase::Showdown);
    assert_eq!(state.community_cards.len(), 3);
    assert_eq!(
        state.outcome,
        Some(HandOutcome::Uncontested {
            seat: 1,
            amount: Chips(140)
        })
    );
    assert_eq!(state.players[1].stack, Chips(1020));
    assert_eq!(state.players[0].stack, Chips(980));
}
