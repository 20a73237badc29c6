use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{HandOutcome, Phase};
use crate::domain::player::{Player, PlayerStatus};
use crate::domain::{HandNumber, SeatIndex};
use crate::engine::{RoundState, SeatCounts};

/// DTO игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerViewDto {
    pub seat: SeatIndex,
    pub name: String,
    pub stack: Chips,
    pub current_bet: Chips,
    /// Сколько уже в банке за эту раздачу.
    pub committed: Chips,
    pub status: PlayerStatus,
    pub scripted: bool,
    /// Карманные карты; у ботов скрыты до вскрытия.
    pub hole_cards: Option<Vec<Card>>,
    pub chip_delta: i64,
}

/// DTO стола (то, что рисует фронт).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableViewDto {
    pub hand_number: HandNumber,
    pub generation: u64,
    pub phase: Phase,
    pub dealer_seat: SeatIndex,
    pub small_blind_seat: SeatIndex,
    pub big_blind_seat: SeatIndex,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub active_seat: Option<SeatIndex>,
    pub high_bet: Chips,
    pub board: Vec<Card>,
    pub main_pot: Chips,
    pub side_pots: Vec<Chips>,
    pub total_pot: Chips,
    pub players: Vec<PlayerViewDto>,
    pub counts: SeatCounts,
    /// Лента сообщений текущей раздачи.
    pub messages: Vec<String>,
    pub outcome: Option<HandOutcome>,
    pub winner: Option<SeatIndex>,
}

/// Собрать DTO стола для зрителя `viewer` (None – наблюдатель).
pub fn build_table_view(state: &RoundState, viewer: Option<SeatIndex>) -> TableViewDto {
    let revealed = matches!(state.outcome, Some(HandOutcome::Showdown { .. }));

    let players = state
        .players
        .iter()
        .map(|p| build_player_view(p, viewer, revealed))
        .collect();

    TableViewDto {
        hand_number: state.hand_number,
        generation: state.generation,
        phase: state.phase,
        dealer_seat: state.dealer_index,
        small_blind_seat: state.blinds.small,
        big_blind_seat: state.blinds.big,
        small_blind: state.config.small_blind(),
        big_blind: state.config.big_blind(),
        active_seat: state.active_player_index,
        high_bet: state.high_bet,
        board: state.community_cards.clone(),
        main_pot: state.pots.main(),
        side_pots: state.pots.side_pots().iter().map(|p| p.amount).collect(),
        total_pot: state.pots.total(),
        players,
        counts: state.counts(),
        messages: state.history.messages(),
        outcome: state.outcome.clone(),
        winner: state.winner,
    }
}

fn build_player_view(player: &Player, viewer: Option<SeatIndex>, revealed: bool) -> PlayerViewDto {
    let show_cards =
        !player.scripted || viewer == Some(player.seat) || (revealed && player.is_in_hand());

    PlayerViewDto {
        seat: player.seat,
        name: player.name.clone(),
        stack: player.stack,
        current_bet: player.current_bet,
        committed: player.committed,
        status: player.status,
        scripted: player.scripted,
        hole_cards: show_cards.then(|| player.hole_cards.clone()),
        chip_delta: player.chip_delta(),
    }
}
