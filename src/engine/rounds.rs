//! Жизненный цикл раздач за одним столом: создание стола, переход к
//! следующей раздаче, условие победы.

use log::info;

use crate::domain::{Chips, Deck, Phase, Player, PlayerStatus, SeatIndex, SeatSpec, TableConfig};
use crate::engine::betting::blind_seats;
use crate::engine::errors::EngineError;
use crate::engine::game_loop::{deal_private_cards, post_blinds, RoundState};
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::next_dealer;
use crate::engine::pot::Pot;
use crate::engine::RandomSource;

/// Собрать места стола из описаний. Индекс места = позиция в `seats`.
pub fn generate_table(config: &TableConfig, seats: &[SeatSpec]) -> Result<Vec<Player>, EngineError> {
    config.validate().map_err(EngineError::InvalidConfig)?;
    if seats.len() > config.max_seats as usize {
        return Err(EngineError::InvalidConfig(format!(
            "мест {} больше, чем max_seats = {}",
            seats.len(),
            config.max_seats
        )));
    }

    let players: Vec<Player> = seats
        .iter()
        .enumerate()
        .map(|(idx, spec)| Player::from_spec(idx as SeatIndex, spec))
        .collect();

    if players.iter().filter(|p| !p.is_eliminated()).count() < 2 {
        return Err(EngineError::NotEnoughPlayers);
    }
    Ok(players)
}

/// Стол по умолчанию: место 0 за человеком, остальные — скриптовые оппоненты,
/// у всех `starting_stack`.
pub fn default_seat_specs(config: &TableConfig, human_name: &str) -> Vec<SeatSpec> {
    (0..config.max_seats)
        .map(|idx| {
            if idx == 0 {
                SeatSpec::human(human_name, config.starting_stack)
            } else {
                SeatSpec::scripted(format!("Bot {idx}"), config.starting_stack)
            }
        })
        .collect()
}

/// Новый стол: случайный дилер, перемешанная колода, фаза Idle.
pub fn new_table<R: RandomSource>(
    config: TableConfig,
    seats: &[SeatSpec],
    rng: &mut R,
) -> Result<RoundState, EngineError> {
    let players = generate_table(&config, seats)?;

    let in_play: Vec<SeatIndex> = players
        .iter()
        .filter(|p| !p.is_eliminated())
        .map(|p| p.seat)
        .collect();
    let dealer = in_play
        .get(rng.pick_index(in_play.len()))
        .copied()
        .ok_or(EngineError::NotEnoughPlayers)?;
    let blinds = blind_seats(&players, dealer)?;

    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);

    let mut history = HandHistory::new();
    history.push(HandEventKind::HandStarted {
        hand_number: 1,
        dealer,
    });
    info!(
        "new table: {} seats, min bet {}, dealer seat {}",
        players.len(),
        config.min_bet,
        dealer
    );

    Ok(RoundState {
        min_raise_increment: config.min_bet,
        config,
        generation: 0,
        hand_number: 1,
        phase: Phase::Idle,
        players,
        deck,
        dealer_index: dealer,
        blinds,
        active_player_index: None,
        community_cards: Vec::new(),
        pots: Pot::new(),
        high_bet: Chips::ZERO,
        history,
        outcome: None,
        winner: None,
    })
}

/// Подготовить следующую раздачу после шоудауна.
///
/// Стеки переносятся, места без фишек выбывают, дилер сдвигается к
/// следующему месту с фишками, колода собирается и перемешивается заново.
/// Если фишки остались у одного места, оно записывается в `winner`,
/// а дилер и блайнды не меняются.
pub fn begin_next_round<R: RandomSource>(state: &RoundState, rng: &mut R) -> Result<RoundState, EngineError> {
    if state.phase != Phase::Showdown {
        return Err(EngineError::InvalidPhase(state.phase));
    }

    let mut next = state.clone();
    for p in next.players.iter_mut() {
        p.current_bet = Chips::ZERO;
        p.committed = Chips::ZERO;
        p.hole_cards.clear();
        p.acted_this_street = false;
        p.round_start_stack = p.stack;
        p.status = if p.stack.is_zero() {
            PlayerStatus::Eliminated
        } else {
            PlayerStatus::Active
        };
    }

    next.phase = Phase::Idle;
    next.active_player_index = None;
    next.community_cards.clear();
    next.pots.reset();
    next.high_bet = Chips::ZERO;
    next.outcome = None;
    next.history = HandHistory::new();
    next.generation += 1;

    if let Some(winner) = winner_seat(&next.players) {
        info!("seat {} wins the table after {} hands", winner, next.hand_number);
        next.winner = Some(winner);
        return Ok(next);
    }

    next.dealer_index = next_dealer(&next.players, next.dealer_index).ok_or(EngineError::NotEnoughPlayers)?;
    next.blinds = blind_seats(&next.players, next.dealer_index)?;

    next.deck = Deck::standard_52();
    rng.shuffle(&mut next.deck.cards);

    next.hand_number += 1;
    next.history.push(HandEventKind::HandStarted {
        hand_number: next.hand_number,
        dealer: next.dealer_index,
    });
    info!(
        "hand #{}: dealer seat {}, blinds {}/{}",
        next.hand_number, next.dealer_index, next.blinds.small, next.blinds.big
    );
    Ok(next)
}

/// Следующая раздача целиком: сброс, проверка победы, блайнды, карманные карты.
///
/// Если победитель определился, возвращается снапшот в фазе Idle с `winner`.
pub fn advance_to_next_round<R: RandomSource>(
    state: &RoundState,
    rng: &mut R,
) -> Result<RoundState, EngineError> {
    let next = begin_next_round(state, rng)?;
    if check_win(&next.players) {
        return Ok(next);
    }
    let next = post_blinds(&next)?;
    deal_private_cards(&next)
}

/// Фишки остались ровно у одного места.
pub fn check_win(players: &[Player]) -> bool {
    winner_seat(players).is_some()
}

pub fn winner_seat(players: &[Player]) -> Option<SeatIndex> {
    let mut with_chips = players.iter().filter(|p| !p.stack.is_zero());
    match (with_chips.next(), with_chips.next()) {
        (Some(only), None) => Some(only.seat),
        _ => None,
    }
}
