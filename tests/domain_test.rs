//! Тесты доменного слоя: карты, колода, фишки, конфиг стола.

use std::collections::HashSet;
use std::str::FromStr;

use holdem_round_engine::domain::{
    parse_cards, Card, Chips, Deck, Player, PlayerStatus, Rank, SeatSpec, Suit, TableConfig,
};

//
// ====================== CARDS ======================
//

#[test]
fn card_display_and_parse() {
    let card = Card::new(Rank::Ten, Suit::Diamonds);
    assert_eq!(card.to_string(), "Td");
    assert_eq!(Card::from_str("Td"), Ok(card));
    assert_eq!(Card::from_str("ah").map(|c| c.to_string()), Ok("Ah".to_string()));

    assert!(Card::from_str("1c").is_err(), "ранга 1 не бывает");
    assert!(Card::from_str("Ax").is_err(), "масти x не бывает");
    assert!(Card::from_str("Ahh").is_err(), "лишний символ");
}

#[test]
fn parse_cards_splits_on_whitespace() {
    let cards = parse_cards("Ah  Kd\t7c").unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[2], Card::new(Rank::Seven, Suit::Clubs));
    assert!(parse_cards("Ah Zz").is_err());
}

#[test]
fn rank_values_put_ace_high() {
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Ace.value(), 14);
    assert_eq!(Rank::from_value(11), Some(Rank::Jack));
    assert_eq!(Rank::from_value(1), None);
    assert!(Rank::Ace > Rank::King);
}

//
// ====================== DECK ======================
//

#[test]
fn standard_deck_has_52_unique_cards_in_canonical_order() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);
    assert!(!deck.has_duplicates());

    let unique: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), 52);

    assert_eq!(deck.cards[0], Card::new(Rank::Two, Suit::Clubs));
    assert_eq!(deck.cards[12], Card::new(Rank::Ace, Suit::Clubs));
    assert_eq!(deck.cards[13], Card::new(Rank::Two, Suit::Diamonds));
    assert_eq!(deck.cards[51], Card::new(Rank::Ace, Suit::Spades));
}

#[test]
fn deck_deals_from_the_tail() {
    let mut deck = Deck::standard_52();
    assert_eq!(deck.draw_one(), Some(Card::new(Rank::Ace, Suit::Spades)));

    let three = deck.draw_n(3).unwrap();
    assert_eq!(
        three,
        vec![
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
        ]
    );
    assert_eq!(deck.len(), 48);
}

#[test]
fn exhausted_deck_draw_leaves_cards_untouched() {
    let mut deck = Deck::from_cards(parse_cards("2c 3c").unwrap());
    assert_eq!(deck.draw_n(3), None);
    assert_eq!(deck.len(), 2, "неудачный draw_n не должен трогать колоду");
    assert!(deck.draw_one().is_some());
    assert!(deck.draw_one().is_some());
    assert_eq!(deck.draw_one(), None);
    assert!(deck.is_empty());
}

#[test]
fn duplicates_are_detected() {
    let deck = Deck::from_cards(parse_cards("Ah Kd Ah").unwrap());
    assert!(deck.has_duplicates());
}

//
// ====================== CHIPS ======================
//

#[test]
fn chips_checked_sub_and_split() {
    assert_eq!(Chips(50).checked_sub(Chips(20)), Some(Chips(30)));
    assert_eq!(Chips(10).checked_sub(Chips(20)), None);
    assert_eq!(Chips(10).saturating_sub(Chips(20)), Chips::ZERO);

    assert_eq!(Chips(75).split(2), (Chips(37), Chips(1)));
    assert_eq!(Chips(90).split(3), (Chips(30), Chips::ZERO));

    let total: Chips = [Chips(1), Chips(2), Chips(3)].into_iter().sum();
    assert_eq!(total, Chips(6));
}

//
// ====================== PLAYERS / CONFIG ======================
//

#[test]
fn zero_stack_seat_starts_eliminated() {
    let busted = Player::from_spec(3, &SeatSpec::human("Empty", Chips::ZERO));
    assert_eq!(busted.status, PlayerStatus::Eliminated);
    assert!(!busted.is_in_hand());

    let bot = Player::from_spec(1, &SeatSpec::scripted("Bot", Chips(500)));
    assert!(bot.scripted);
    assert!(bot.can_act());
    assert_eq!(bot.round_start_stack, Chips(500));
    assert_eq!(bot.chip_delta(), 0);
}

#[test]
fn default_config_matches_table_defaults() {
    let config = TableConfig::default();
    assert_eq!(config.max_seats, 6);
    assert_eq!(config.min_bet, Chips(20));
    assert_eq!(config.small_blind(), Chips(10));
    assert_eq!(config.big_blind(), Chips(20));
    assert_eq!(config.starting_stack, Chips(1_000));
    assert!(config.validate().is_ok());
}

#[test]
fn config_from_json_fills_missing_fields() {
    let config = TableConfig::from_json(r#"{ "max_seats": 4, "min_bet": 50 }"#).unwrap();
    assert_eq!(config.max_seats, 4);
    assert_eq!(config.min_bet, Chips(50));
    assert_eq!(config.starting_stack, TableConfig::default().starting_stack);

    assert!(TableConfig::from_json(r#"{ "max_seats": 12 }"#).is_err());
    assert!(TableConfig::from_json(r#"{ "min_bet": 1 }"#).is_err());
    assert!(TableConfig::from_json("not json").is_err());
}
