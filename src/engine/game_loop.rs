use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::{HandOutcome, Phase, Street};
use crate::domain::player::{Player, PlayerStatus};
use crate::domain::table::TableConfig;
use crate::domain::{HandNumber, SeatIndex};
use crate::engine::actions::{ActionLabel, ActionRecord};
use crate::engine::betting::{
    ante_up_blinds, determine_min_bet, is_round_closed, BetBounds, BlindIndices,
};
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{next_seat_where, seats_after};
use crate::engine::pot::Pot;
use crate::engine::showdown::resolve_showdown;
use crate::engine::validation::{validate_bet_amount, validate_turn};

/// Сколько мест в каком состоянии (для фронта).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatCounts {
    /// В раздаче: не сфолдили и не выбыли (включая олл-ин).
    pub active: usize,
    pub folded: usize,
    pub all_in: usize,
}

/// Что может сделать игрок, чей сейчас ход.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegalActions {
    pub seat: SeatIndex,
    pub bounds: BetBounds,
    /// Подпись для ставки `bounds.call` (Check / Call / All-In).
    pub call_label: ActionLabel,
}

/// Снапшот раздачи.
///
/// Все операции движка принимают `&RoundState` и возвращают новый снапшот;
/// исходный никогда не меняется, поэтому отклонённое действие ничего не портит.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundState {
    pub config: TableConfig,
    /// Растёт на каждой успешной операции. По нему отсекаются устаревшие
    /// отложенные действия ботов.
    pub generation: u64,
    pub hand_number: HandNumber,
    pub phase: Phase,
    pub players: Vec<Player>,
    pub deck: Deck,
    pub dealer_index: SeatIndex,
    pub blinds: BlindIndices,
    /// Чей сейчас ход (None вне раундов ставок).
    pub active_player_index: Option<SeatIndex>,
    pub community_cards: Vec<Card>,
    pub pots: Pot,
    /// Максимальная ставка на текущей улице.
    pub high_bet: Chips,
    /// Минимальный шаг рейза (= min_bet стола).
    pub min_raise_increment: Chips,
    pub history: HandHistory,
    pub outcome: Option<HandOutcome>,
    /// Место-победитель, когда фишки остались только у него.
    pub winner: Option<SeatIndex>,
}

impl RoundState {
    pub fn player(&self, seat: SeatIndex) -> Result<&Player, EngineError> {
        self.players
            .get(seat as usize)
            .ok_or(EngineError::InvalidSeat(seat))
    }

    pub fn active_player(&self) -> Option<&Player> {
        self.active_player_index
            .and_then(|seat| self.players.get(seat as usize))
    }

    pub fn counts(&self) -> SeatCounts {
        SeatCounts {
            active: self.players.iter().filter(|p| p.is_in_hand()).count(),
            folded: self.players.iter().filter(|p| p.is_folded()).count(),
            all_in: self.players.iter().filter(|p| p.is_all_in()).count(),
        }
    }

    /// Все фишки на столе: стеки + ставки текущей улицы + банки.
    /// Не меняется ни одной операцией внутри стола.
    pub fn chips_in_play(&self) -> Chips {
        let stacks: Chips = self.players.iter().map(|p| p.stack).sum();
        let bets: Chips = self.players.iter().map(|p| p.current_bet).sum();
        stacks + bets + self.pots.total()
    }

    pub fn is_hand_over(&self) -> bool {
        self.phase == Phase::Showdown
    }

    /// Границы ставки для места (без проверки очереди хода).
    pub fn bet_bounds(&self, seat: SeatIndex) -> Result<BetBounds, EngineError> {
        let player = self.player(seat)?;
        Ok(BetBounds::for_player(player, self.high_bet, self.min_raise_increment))
    }

    /// Легальные действия для места, если сейчас его ход.
    pub fn legal_actions(&self, seat: SeatIndex) -> Result<LegalActions, EngineError> {
        let player = validate_turn(self, seat)?;
        let bounds = BetBounds::for_player(player, self.high_bet, self.min_raise_increment);
        Ok(LegalActions {
            seat,
            bounds,
            call_label: ActionLabel::for_bet(self.high_bet, bounds.call, player),
        })
    }
}

/// Поставить блайнды: Idle → InitialDeal.
pub fn post_blinds(state: &RoundState) -> Result<RoundState, EngineError> {
    if let Some(winner) = state.winner {
        return Err(EngineError::GameOver(winner));
    }
    if state.phase != Phase::Idle {
        return Err(EngineError::InvalidPhase(state.phase));
    }

    let mut next = state.clone();
    let blinds = next.blinds;
    let (small, big) = ante_up_blinds(&mut next.players, blinds, next.min_raise_increment);
    next.high_bet = next.config.big_blind();
    next.history.push(HandEventKind::BlindsPosted {
        small_blind: (blinds.small, small),
        big_blind: (blinds.big, big),
    });
    debug!(
        "hand #{}: SB seat {} -> {}, BB seat {} -> {}",
        next.hand_number, blinds.small, small, blinds.big, big
    );

    next.phase = Phase::InitialDeal;
    next.generation += 1;
    Ok(next)
}

/// Раздать карманные карты: InitialDeal → Betting(Preflop).
///
/// По одной карте за круг, начиная со следующего после дилера места.
pub fn deal_private_cards(state: &RoundState) -> Result<RoundState, EngineError> {
    if state.phase != Phase::InitialDeal {
        return Err(EngineError::InvalidPhase(state.phase));
    }

    let mut next = state.clone();
    let order = seats_after(&next.players, next.dealer_index, Player::is_in_hand);
    let needed = order.len() * 2;
    let remaining = next.deck.len();
    if remaining < needed {
        return Err(EngineError::DeckExhausted { needed, remaining });
    }

    for _round in 0..2 {
        for &seat in &order {
            let card = next
                .deck
                .draw_one()
                .ok_or(EngineError::DeckExhausted { needed, remaining })?;
            next.players[seat as usize].hole_cards.push(card);
        }
    }
    for &seat in &order {
        let cards = next.players[seat as usize].hole_cards.clone();
        next.history.push(HandEventKind::HoleCardsDealt { seat, cards });
    }

    next.phase = Phase::Betting(Street::Preflop);
    for p in next.players.iter_mut() {
        p.acted_this_street = false;
    }
    next.active_player_index = next_to_act(&next.players, next.blinds.big, next.high_bet);
    settle(&mut next)?;

    next.generation += 1;
    Ok(next)
}

/// Ставка текущего игрока с внешними границами `[min, max]`.
///
/// Сумма — итоговая ставка на улице (raise-to). После ставки ход переходит
/// к следующему, кто ещё должен действовать; если раунд закрылся, ставки
/// сметаются в банк и открывается следующая улица (или шоудаун).
/// `min` не опускается ниже колла (или олл-ина, если на колл не хватает).
pub fn handle_bet(
    state: &RoundState,
    amount: Chips,
    min: Chips,
    max: Chips,
) -> Result<RoundState, EngineError> {
    let seat = state
        .active_player_index
        .ok_or(EngineError::InvalidPhase(state.phase))?;
    let actor = validate_turn(state, seat)?;
    let min = min.max(determine_min_bet(state.high_bet, actor.stack, actor.current_bet));
    if amount < min || amount > max {
        return Err(EngineError::IllegalBetAmount { amount, min, max });
    }

    let illegal = EngineError::IllegalBetAmount { amount, min, max };
    let mut next = state.clone();
    let high_bet = next.high_bet;

    let player = &mut next.players[seat as usize];
    let label = ActionLabel::for_bet(high_bet, amount, player);
    let added = amount.checked_sub(player.current_bet).ok_or(illegal.clone())?;
    player.stack = player.stack.checked_sub(added).ok_or(illegal)?;
    player.current_bet = amount;
    player.acted_this_street = true;
    if player.stack.is_zero() {
        player.status = PlayerStatus::AllIn;
    }
    let record = ActionRecord {
        seat,
        label,
        bet_after: amount,
        stack_after: player.stack,
    };

    if amount > high_bet {
        next.high_bet = amount;
        // Повышение: всем остальным снова нужно ответить.
        for p in next.players.iter_mut().filter(|p| p.seat != seat) {
            p.acted_this_street = false;
        }
    }

    debug!("hand #{}: seat {} {} {}", next.hand_number, seat, label, amount);
    next.history.push(HandEventKind::PlayerActed(record));
    next.active_player_index = next_to_act(&next.players, seat, next.high_bet);
    settle(&mut next)?;

    next.generation += 1;
    Ok(next)
}

/// Ставка от имени места `seat`: очередь хода, состояние места и шаг рейза
/// проверяются здесь, границы считаются по текущему состоянию.
pub fn submit_bet(state: &RoundState, seat: SeatIndex, amount: Chips) -> Result<RoundState, EngineError> {
    validate_turn(state, seat)?;
    let bounds = state.bet_bounds(seat)?;
    validate_bet_amount(&bounds, amount)?;
    handle_bet(state, amount, bounds.call, bounds.max)
}

/// Фолд места `seat`. Если в раздаче остался один игрок, он сразу забирает
/// весь банк, оставшиеся улицы не открываются.
pub fn handle_fold(state: &RoundState, seat: SeatIndex) -> Result<RoundState, EngineError> {
    validate_turn(state, seat)?;

    let mut next = state.clone();
    let player = &mut next.players[seat as usize];
    player.status = PlayerStatus::Folded;
    player.acted_this_street = true;
    let record = ActionRecord {
        seat,
        label: ActionLabel::Fold,
        bet_after: player.current_bet,
        stack_after: player.stack,
    };

    // Сфолдивший теряет право на все банки, его фишки остаются в них.
    next.pots = Pot::from_players(&next.players);
    debug!("hand #{}: seat {} folds", next.hand_number, seat);
    next.history.push(HandEventKind::PlayerActed(record));
    next.active_player_index = next_to_act(&next.players, seat, next.high_bet);
    settle(&mut next)?;

    next.generation += 1;
    Ok(next)
}

/// Следующее по часовой место, которому ещё нужно действовать на этой улице.
fn next_to_act(players: &[Player], after: SeatIndex, high_bet: Chips) -> Option<SeatIndex> {
    next_seat_where(players, after, |p| {
        p.can_act() && (!p.acted_this_street || p.current_bet < high_bet)
    })
}

/// Довести раздачу до точки, где нужен чей-то ход (или до конца раздачи).
fn settle(state: &mut RoundState) -> Result<(), EngineError> {
    loop {
        if state.counts().active <= 1 {
            award_uncontested(state);
            return Ok(());
        }

        let Phase::Betting(street) = state.phase else {
            return Ok(());
        };
        if !is_round_closed(&state.players, state.high_bet) {
            return Ok(());
        }

        sweep_bets(state);
        match street.next() {
            Some(next_street) => {
                deal_community(state, next_street.cards_to_deal(), next_street)?;
                start_street(state, next_street);
            }
            None => {
                resolve_showdown(state);
                finish_hand(state);
                return Ok(());
            }
        }
    }
}

/// Смести ставки улицы в банки и пересчитать сайд-поты.
fn sweep_bets(state: &mut RoundState) {
    for p in state.players.iter_mut() {
        p.committed += p.current_bet;
        p.current_bet = Chips::ZERO;
    }
    state.pots = Pot::from_players(&state.players);
}

/// Открыть `count` общих карт с хвоста колоды.
pub(crate) fn deal_community(
    state: &mut RoundState,
    count: usize,
    street: Street,
) -> Result<(), EngineError> {
    let remaining = state.deck.len();
    let cards = state
        .deck
        .draw_n(count)
        .ok_or(EngineError::DeckExhausted { needed: count, remaining })?;
    state.community_cards.extend(cards.iter().copied());
    debug!("hand #{}: {:?} {:?}", state.hand_number, street, cards);
    state.history.push(HandEventKind::BoardDealt { street, cards });
    Ok(())
}

/// Новая улица: ставки с нуля, первым ходит первый активный после дилера.
fn start_street(state: &mut RoundState, street: Street) {
    state.phase = Phase::Betting(street);
    state.high_bet = Chips::ZERO;
    for p in state.players.iter_mut() {
        p.acted_this_street = false;
    }
    state.active_player_index = next_to_act(&state.players, state.dealer_index, Chips::ZERO);
}

/// Все, кроме одного, сфолдили.
fn award_uncontested(state: &mut RoundState) {
    sweep_bets(state);
    let total = state.pots.total();
    let Some(winner) = state.players.iter_mut().find(|p| p.is_in_hand()) else {
        return;
    };
    winner.stack += total;
    let seat = winner.seat;

    state.pots.reset();
    state.history.push(HandEventKind::PotAwarded {
        seat,
        pot_index: 0,
        amount: total,
    });
    state.outcome = Some(HandOutcome::Uncontested { seat, amount: total });
    info!(
        "hand #{}: seat {} takes {} uncontested",
        state.hand_number, seat, total
    );
    finish_hand(state);
}

fn finish_hand(state: &mut RoundState) {
    state.phase = Phase::Showdown;
    state.active_player_index = None;
    state.high_bet = Chips::ZERO;
    let busted: Vec<SeatIndex> = state
        .players
        .iter()
        .filter(|p| !p.is_eliminated() && p.stack.is_zero())
        .map(|p| p.seat)
        .collect();
    for seat in busted {
        info!("hand #{}: seat {} is out of chips", state.hand_number, seat);
        state.history.push(HandEventKind::SeatEliminated { seat });
    }
    state.history.push(HandEventKind::HandFinished {
        hand_number: state.hand_number,
    });
}
