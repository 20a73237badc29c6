//! Side pot / award tests.
//!
//! Здесь мы проверяем:
//! - формирование side pots по contributions (2, 3, 4 all-in);
//! - состав eligible_seats и вложенность множеств претендентов;
//! - фишки сфолдивших остаются в банке;
//! - раздачу банков по силе рук и остаток при сплите;
//! - трёхсторонний олл-ин через настоящий game_loop.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use holdem_round_engine::domain::{
    parse_cards, Card, Chips, Deck, HandOutcome, HandRank, Phase, SeatIndex, SeatSpec, TableConfig,
};
use holdem_round_engine::engine::{
    award_pots, compute_side_pots, deal_private_cards, new_table, post_blinds, submit_bet,
    RandomSource, RoundState, SidePot,
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

/// Утилита: собрать contributions из (seat, amount).
fn make_contributions(pairs: &[(SeatIndex, u64)]) -> BTreeMap<SeatIndex, Chips> {
    pairs.iter().map(|&(seat, amount)| (seat, Chips(amount))).collect()
}

fn folded(seats: &[SeatIndex]) -> BTreeSet<SeatIndex> {
    seats.iter().copied().collect()
}

/// Утилита: достать (amount, eligible_seats) из SidePot.
fn pot_info(p: &SidePot) -> (u64, Vec<SeatIndex>) {
    (p.amount.0, p.eligible_seats.clone())
}

fn total(pots: &[SidePot]) -> u64 {
    pots.iter().map(|p| p.amount.0).sum()
}

//
// ====================== SIDE POTS: 2, 3, 4 ALL-IN ======================
//

/// 2 игрока, оба внесли по 100 фишек: один общий пот.
#[test]
fn side_pots_two_players_equal_all_in() {
    let pots = compute_side_pots(&make_contributions(&[(0, 100), (1, 100)]), &folded(&[]));
    assert_eq!(pots.len(), 1, "Должен быть один общий пот");
    assert_eq!(pot_info(&pots[0]), (200, vec![0, 1]));
}

/// 3 игрока all-in: 100, 200, 300.
#[test]
fn side_pots_three_players_all_in_100_200_300() {
    let pots = compute_side_pots(
        &make_contributions(&[(0, 100), (1, 200), (2, 300)]),
        &folded(&[]),
    );
    assert_eq!(pots.len(), 3, "Ожидаем 3 слоя side pots");
    assert_eq!(pot_info(&pots[0]), (300, vec![0, 1, 2]));
    assert_eq!(pot_info(&pots[1]), (200, vec![1, 2]));
    assert_eq!(pot_info(&pots[2]), (100, vec![2]));
}

/// 4 игрока all-in: 100, 100, 300, 300 – одинаковые уровни схлопываются.
#[test]
fn side_pots_four_players_all_in_100_100_300_300() {
    let pots = compute_side_pots(
        &make_contributions(&[(0, 100), (1, 100), (2, 300), (3, 300)]),
        &folded(&[]),
    );
    assert_eq!(pots.len(), 2, "Ожидаем 2 слоя side pots");
    assert_eq!(pot_info(&pots[0]), (400, vec![0, 1, 2, 3]));
    assert_eq!(pot_info(&pots[1]), (400, vec![2, 3]));
}

#[test]
fn eligibility_strictly_shrinks_and_sum_is_preserved() {
    let contrib = make_contributions(&[(0, 50), (1, 200), (2, 200), (3, 500), (4, 35)]);
    let pots = compute_side_pots(&contrib, &folded(&[4]));

    let contributed: u64 = contrib.values().map(|c| c.0).sum();
    assert_eq!(total(&pots), contributed, "фишки не теряются");

    for p in &pots {
        assert!(p.amount.0 > 0, "Pot не должен быть нулевым");
        assert!(!p.eligible_seats.contains(&4), "сфолдивший не претендует");
    }
    for pair in pots.windows(2) {
        let outer: BTreeSet<_> = pair[0].eligible_seats.iter().collect();
        let inner: BTreeSet<_> = pair[1].eligible_seats.iter().collect();
        assert!(inner.is_subset(&outer) && inner.len() < outer.len());
    }
}

#[test]
fn folded_chips_stay_in_main_pot() {
    // Место 2 внесло больше всех и сфолдило: его слой без претендентов
    // уходит в последний банк.
    let pots = compute_side_pots(&make_contributions(&[(0, 40), (1, 40), (2, 100)]), &folded(&[2]));
    assert_eq!(pots.len(), 1);
    assert_eq!(pot_info(&pots[0]), (180, vec![0, 1]));
}

//
// ====================== AWARDS ======================
//

#[test]
fn each_pot_goes_to_best_eligible_hand() {
    let pots = vec![
        SidePot {
            amount: Chips(300),
            eligible_seats: vec![0, 1, 2],
        },
        SidePot {
            amount: Chips(200),
            eligible_seats: vec![1, 2],
        },
    ];
    let ranks: HashMap<SeatIndex, HandRank> =
        [(0, HandRank(900)), (1, HandRank(500)), (2, HandRank(100))].into_iter().collect();

    let awards = award_pots(&pots, &ranks, &[1, 2, 0]);
    assert_eq!(awards.len(), 2);
    assert_eq!((awards[0].pot_index, awards[0].seat, awards[0].amount), (0, 0, Chips(300)));
    assert_eq!((awards[1].pot_index, awards[1].seat, awards[1].amount), (1, 1, Chips(200)));
}

#[test]
fn odd_chip_goes_to_first_winner_clockwise_from_dealer() {
    let pots = vec![SidePot {
        amount: Chips(101),
        eligible_seats: vec![0, 1, 2],
    }];
    let ranks: HashMap<SeatIndex, HandRank> =
        [(0, HandRank(7)), (1, HandRank(3)), (2, HandRank(7))].into_iter().collect();

    // Дилер – место 1: порядок выплат 2, 0, 1.
    let awards = award_pots(&pots, &ranks, &[2, 0, 1]);
    let by_seat: HashMap<SeatIndex, Chips> = awards.iter().map(|a| (a.seat, a.amount)).collect();
    assert_eq!(by_seat.get(&2), Some(&Chips(51)));
    assert_eq!(by_seat.get(&0), Some(&Chips(50)));
    assert_eq!(by_seat.get(&1), None);
}

//
// ====================== THROUGH GAME LOOP ======================
//

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

fn table(stacks: &[u64]) -> RoundState {
    let config = TableConfig {
        max_seats: stacks.len() as u8,
        ..TableConfig::default()
    };
    let seats: Vec<SeatSpec> = stacks
        .iter()
        .enumerate()
        .map(|(i, &s)| SeatSpec::human(format!("P{i}"), Chips(s)))
        .collect();
    new_table(config, &seats, &mut DummyRng).unwrap()
}

/// Три олл-ина 100 / 200 / 300: у каждого свой банк, сильнейшая рука у
/// самого короткого стека.
#[test]
fn three_way_all_in_pays_each_layer_separately() {
    let mut state = table(&[100, 200, 300]);
    // Раздача: 1, 2, 0, 1, 2, 0; потом борд.
    state.deck = stacked_deck("Ks Qs As Kh Qh Ah 2c 7d 9h 4s Jc");
    let state = post_blinds(&state).unwrap();
    let state = deal_private_cards(&state).unwrap();
    let before = state.chips_in_play();

    let state = submit_bet(&state, 0, Chips(100)).unwrap();
    let state = submit_bet(&state, 1, Chips(200)).unwrap();
    let state = submit_bet(&state, 2, Chips(300)).unwrap();

    assert_eq!(state.phase, Phase::Showdown);
    assert_eq!(state.community_cards.len(), 5);
    assert_eq!(state.chips_in_play(), before);

    let stacks: Vec<u64> = state.players.iter().map(|p| p.stack.0).collect();
    assert_eq!(stacks, vec![300, 200, 100]);

    let Some(HandOutcome::Showdown { hierarchy, awards }) = &state.outcome else {
        panic!("ожидали шоудаун, получили {:?}", state.outcome);
    };
    assert_eq!(awards.len(), 3);
    let seats: Vec<SeatIndex> = hierarchy.iter().map(|r| r.entries()[0].seat).collect();
    assert_eq!(seats, vec![0, 1, 2]);
    assert_eq!(hierarchy[0].entries()[0].chip_delta, 200);
    assert_eq!(hierarchy[2].entries()[0].chip_delta, -200);
}
