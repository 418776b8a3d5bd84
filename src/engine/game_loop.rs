use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::{HandPhase, HandSummary, PlayerHandResult};
use crate::domain::player::{Player, PlayerStatus};
use crate::domain::table::{ConfigError, Table, TableConfig};
use crate::domain::{PlayerId, SeatIndex};
use crate::engine::actions::{PlayerAction, PlayerActionKind, ValidActions};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::events::EventSink;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{collect_seats_from, next_actor, next_dealer};
use crate::engine::pot::Pot;
use crate::engine::settlement::{award_uncontested, payouts_by_seat, settle_showdown, PotAward};
use crate::engine::side_pots::{compute_side_pots, Contribution, SidePot};
use crate::engine::validation::{valid_actions, validate_action};
use crate::eval::{evaluate_best_hand, HandRank};
use crate::infra::rng::{GlobalRng, RandomSource};
use crate::state::GameSnapshot;

/// Внутреннее состояние раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandState {
    pub hand_number: u64,
    pub phase: HandPhase,
    pub pot: Pot,
    /// Разбивка банка: main pot + сайд-поты. Сумма всегда равна `pot.total`.
    pub pots: Vec<SidePot>,
    pub betting: BettingState,
    pub dealer_button: SeatIndex,
    pub small_blind_seat: Option<SeatIndex>,
    pub big_blind_seat: Option<SeatIndex>,
    /// Чей сейчас ход. `None` – торговля на улице закрыта.
    pub action_on: Option<SeatIndex>,
    /// Сколько действий сделано на текущей улице.
    pub actions_this_street: u32,
    /// Дро: кто уже менял карты.
    pub drawn: Vec<SeatIndex>,
}

impl HandState {
    pub fn street(&self) -> u8 {
        self.betting.street
    }

    fn is_live(&self) -> bool {
        self.phase != HandPhase::Settled
    }
}

/// Движок одного стола: владеет столом, колодой и текущей раздачей.
///
/// Поток управления:
/// `start_hand` → { `current_player` / `get_valid_actions` / `apply_action` }
/// пока не `is_betting_complete` → `advance_street` … → `settle_showdown`.
pub struct GameEngine {
    table: Table,
    deck: Deck,
    hand: Option<HandState>,
    history: HandHistory,
    hands_played: u64,
    last_summary: Option<HandSummary>,
    sinks: Vec<Box<dyn EventSink>>,
}

impl GameEngine {
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            table: Table::new(config),
            deck: Deck::standard_52(),
            hand: None,
            history: HandHistory::new(),
            hands_played: 0,
            last_summary: None,
            sinks: Vec::new(),
        })
    }

    /// Восстановить движок из снапшота. Слушатели не сохраняются – их нужно добавить заново.
    pub fn restore(snapshot: GameSnapshot) -> Self {
        Self {
            table: snapshot.table,
            deck: snapshot.deck,
            hand: snapshot.hand,
            history: snapshot.history,
            hands_played: snapshot.hands_played,
            last_summary: snapshot.last_summary,
            sinks: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            table: self.table.clone(),
            deck: self.deck.clone(),
            hand: self.hand.clone(),
            history: self.history.clone(),
            hands_played: self.hands_played,
            last_summary: self.last_summary.clone(),
        }
    }

    pub fn add_sink<S: EventSink + 'static>(&mut self, sink: S) {
        self.sinks.push(Box::new(sink));
    }

    // ---------------------------------------------------------------------
    // Чтение состояния
    // ---------------------------------------------------------------------

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn config(&self) -> &TableConfig {
        &self.table.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn hand(&self) -> Option<&HandState> {
        self.hand.as_ref()
    }

    pub fn history(&self) -> &HandHistory {
        &self.history
    }

    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }

    pub fn last_summary(&self) -> Option<&HandSummary> {
        self.last_summary.as_ref()
    }

    pub fn player(&self, seat: SeatIndex) -> Option<&Player> {
        self.table.player(seat)
    }

    pub fn phase(&self) -> HandPhase {
        self.hand
            .as_ref()
            .map(|h| h.phase)
            .unwrap_or(HandPhase::NotStarted)
    }

    /// Чей сейчас ход.
    pub fn current_player(&self) -> Option<SeatIndex> {
        self.hand.as_ref().and_then(|h| h.action_on)
    }

    pub fn pot_total(&self) -> Chips {
        self.hand
            .as_ref()
            .map(|h| h.pot.total)
            .unwrap_or(Chips::ZERO)
    }

    /// Main pot + сайд-поты текущей раздачи.
    pub fn pots(&self) -> &[SidePot] {
        self.hand.as_ref().map(|h| h.pots.as_slice()).unwrap_or(&[])
    }

    /// Фишки в стеках + банк. Не меняется в течение раздачи.
    pub fn total_chips(&self) -> Chips {
        self.table.chips_in_stacks() + self.pot_total()
    }

    pub fn hand_in_progress(&self) -> bool {
        self.hand.as_ref().map_or(false, HandState::is_live)
    }

    /// Раздача дошла до расчёта: остался один претендент или сыграна последняя улица.
    pub fn is_hand_complete(&self) -> bool {
        matches!(
            self.phase(),
            HandPhase::Showdown | HandPhase::EarlyEnd | HandPhase::Settled
        )
    }

    /// Закрыта ли торговля на текущей улице.
    pub fn is_betting_complete(&self) -> bool {
        match self.hand.as_ref() {
            Some(hand) => match hand.phase {
                HandPhase::Betting { .. } => hand.betting.is_round_complete(&self.table),
                HandPhase::Showdown | HandPhase::EarlyEnd => true,
                _ => false,
            },
            None => false,
        }
    }

    // ---------------------------------------------------------------------
    // Места
    // ---------------------------------------------------------------------

    pub fn seat_player(
        &mut self,
        seat: SeatIndex,
        player_id: PlayerId,
        name: impl Into<String>,
        chips: Chips,
    ) -> Result<(), EngineError> {
        let slot = self
            .table
            .seats
            .get_mut(seat as usize)
            .ok_or(EngineError::InvalidSeat(seat))?;
        if slot.is_some() {
            return Err(EngineError::SeatTaken(seat));
        }
        *slot = Some(Player::new(player_id, name, chips));
        log::debug!("player {player_id} seated at {seat} with {chips}");
        Ok(())
    }

    /// Убрать игрока. Участника текущей раздачи убрать нельзя.
    pub fn remove_player(&mut self, seat: SeatIndex) -> Result<Player, EngineError> {
        let in_hand = self.hand_in_progress();
        let slot = self
            .table
            .seats
            .get_mut(seat as usize)
            .ok_or(EngineError::InvalidSeat(seat))?;
        match slot.as_ref() {
            None => return Err(EngineError::EmptySeat(seat)),
            // Фишки сфолдившего тоже лежат в банке.
            Some(p) if in_hand && (p.is_in_hand() || p.status == PlayerStatus::Folded) => {
                return Err(EngineError::HandAlreadyInProgress)
            }
            Some(_) => {}
        }
        slot.take().ok_or(EngineError::EmptySeat(seat))
    }

    /// Пропускать раздачи (применяется на следующем `start_hand`).
    pub fn set_sitting_out(&mut self, seat: SeatIndex, sitting_out: bool) -> Result<(), EngineError> {
        if seat >= self.table.max_seats() {
            return Err(EngineError::InvalidSeat(seat));
        }
        let player = self
            .table
            .player_mut(seat)
            .ok_or(EngineError::EmptySeat(seat))?;
        player.sitting_out = sitting_out;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Старт раздачи
    // ---------------------------------------------------------------------

    /// Старт раздачи с глобальным генератором.
    pub fn start_hand(&mut self) -> Result<(), EngineError> {
        self.start_hand_with(&mut GlobalRng)
    }

    /// Старт новой раздачи:
    /// - двигает кнопку;
    /// - постит анте и блайнды;
    /// - мешает колоду и раздаёт карманные карты;
    /// - передаёт ход первому после BB.
    pub fn start_hand_with<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        if self.hand_in_progress() {
            return Err(EngineError::HandAlreadyInProgress);
        }
        let ready = self
            .table
            .occupied()
            .filter(|(_, p)| p.can_be_dealt_in())
            .count();
        if ready < 2 {
            return Err(EngineError::NotEnoughPlayers);
        }
        let dealer = next_dealer(&self.table).ok_or(EngineError::NotEnoughPlayers)?;

        for player in self.table.seats.iter_mut().flatten() {
            player.reset_for_hand();
        }
        self.table.board.clear();
        self.table.dealer_button = Some(dealer);
        self.hands_played += 1;
        self.history.clear();

        self.deck.init();
        self.deck.shuffle_with(rng);

        let hand_number = self.hands_played;
        let variant = self.table.config.variant;
        let stakes = self.table.config.stakes.clone();

        // Порядок раздачи: слева от кнопки, кнопка последней.
        let left_of_button = ((dealer as usize + 1) % self.table.seats.len()) as SeatIndex;
        let order = collect_seats_from(&self.table, left_of_button, Player::can_act);

        // Хедз-ап: кнопка ставит SB.
        let (sb_seat, bb_seat) = match order.as_slice() {
            [other, _button] => (dealer, *other),
            [sb, bb, ..] => (*sb, *bb),
            _ => return Err(EngineError::NotEnoughPlayers),
        };

        self.emit(HandEventKind::HandStarted {
            hand_number,
            dealer,
            seats: order.clone(),
        });

        let mut pot = Pot::default();

        let mut antes = Vec::new();
        if !stakes.ante.is_zero() {
            for &seat in &order {
                if let Some(p) = self.table.player_mut(seat) {
                    let paid = p.commit_dead(stakes.ante);
                    pot.add(paid);
                    antes.push((seat, paid));
                }
            }
        }

        let sb_paid = self.post_blind(sb_seat, stakes.small_blind);
        let bb_paid = self.post_blind(bb_seat, stakes.big_blind);
        pot.add(sb_paid + bb_paid);

        // Короткий BB: текущая ставка – наибольший из поставленных блайндов.
        let current_bet = sb_paid.max(bb_paid);

        self.hand = Some(HandState {
            hand_number,
            phase: HandPhase::BlindsPosted,
            pot,
            pots: Vec::new(),
            betting: BettingState::new(0, current_bet, stakes.big_blind),
            dealer_button: dealer,
            small_blind_seat: Some(sb_seat),
            big_blind_seat: Some(bb_seat),
            action_on: None,
            actions_this_street: 0,
            drawn: Vec::new(),
        });

        self.emit(HandEventKind::BlindsPosted {
            dealer,
            small_blind: Some((sb_seat, sb_paid)),
            big_blind: Some((bb_seat, bb_paid)),
            ante: antes,
        });
        self.refresh_pots();

        // Карманные карты по одной по кругу.
        for _ in 0..variant.hole_cards() {
            for &seat in &order {
                let card = self.deck.deal_checked()?;
                if let Some(p) = self.table.player_mut(seat) {
                    p.hole_cards.push(card);
                }
            }
        }
        for &seat in &order {
            let cards = self
                .table
                .player(seat)
                .map(|p| p.hole_cards.clone())
                .unwrap_or_default();
            self.emit(HandEventKind::HoleCardsDealt { seat, cards });
        }

        if let Some(hand) = self.hand.as_mut() {
            hand.phase = HandPhase::Betting { street: 0 };
        }
        self.open_action(bb_seat);

        Ok(())
    }

    fn post_blind(&mut self, seat: SeatIndex, amount: Chips) -> Chips {
        self.table
            .player_mut(seat)
            .map(|p| p.commit(amount))
            .unwrap_or(Chips::ZERO)
    }

    // ---------------------------------------------------------------------
    // Действия
    // ---------------------------------------------------------------------

    /// Проверка действия без изменения состояния.
    pub fn check_action(&self, seat: SeatIndex, action: &PlayerActionKind) -> Result<(), EngineError> {
        let hand = self
            .hand
            .as_ref()
            .filter(|h| h.is_live())
            .ok_or(EngineError::NoActiveHand)?;
        if seat >= self.table.max_seats() {
            return Err(EngineError::InvalidSeat(seat));
        }
        let player = self.table.player(seat).ok_or(EngineError::EmptySeat(seat))?;
        if hand.action_on != Some(seat) {
            return Err(EngineError::NotPlayersTurn(seat));
        }
        validate_action(
            seat,
            player,
            action,
            &hand.betting,
            self.table.config.stakes.big_blind,
        )
    }

    pub fn is_action_valid(&self, seat: SeatIndex, action: &PlayerActionKind) -> bool {
        self.check_action(seat, action).is_ok()
    }

    /// Что может сделать игрок. Не его ход – пустой набор.
    pub fn get_valid_actions(&self, seat: SeatIndex) -> ValidActions {
        let hand = match self.hand.as_ref() {
            Some(h) if h.action_on == Some(seat) => h,
            _ => return ValidActions::none(seat),
        };
        match self.table.player(seat) {
            Some(player) => valid_actions(
                seat,
                player,
                &hand.betting,
                self.table.config.stakes.big_blind,
            ),
            None => ValidActions::none(seat),
        }
    }

    /// Применить действие игрока. Нелегальное действие возвращает ошибку и ничего не меняет.
    pub fn apply_action(
        &mut self,
        seat: SeatIndex,
        action: PlayerActionKind,
    ) -> Result<PlayerAction, EngineError> {
        self.check_action(seat, &action)?;

        let hand = self.hand.as_mut().ok_or(EngineError::NoActiveHand)?;
        let player = self
            .table
            .player_mut(seat)
            .ok_or(EngineError::EmptySeat(seat))?;
        let to_call = player.to_call(hand.betting.current_bet);

        let committed = match action {
            PlayerActionKind::Fold => {
                player.status = PlayerStatus::Folded;
                Chips::ZERO
            }
            PlayerActionKind::Check => {
                hand.betting.on_call();
                Chips::ZERO
            }
            PlayerActionKind::Call => {
                let paid = player.commit(to_call);
                // Колл всем стеком ничего не закрывает: игрок больше не ходит.
                if player.can_act() {
                    hand.betting.on_call();
                }
                paid
            }
            PlayerActionKind::Bet(amount) | PlayerActionKind::Raise(amount) => {
                let paid = player.commit(amount);
                hand.betting.on_raise(seat, player.street_bet);
                paid
            }
            PlayerActionKind::AllIn => {
                let paid = player.commit(player.chips);
                if player.street_bet > hand.betting.current_bet {
                    hand.betting.on_raise(seat, player.street_bet);
                }
                paid
            }
        };

        hand.pot.add(committed);
        hand.actions_this_street += 1;

        let record = PlayerAction {
            seat,
            kind: action,
            committed,
        };
        let player_id = player.player_id;
        let new_stack = player.chips;
        let pot_after = hand.pot.total;

        self.emit(HandEventKind::PlayerActed {
            player_id,
            action: record,
            new_stack,
            pot_after,
        });
        if !committed.is_zero() || action == PlayerActionKind::Fold {
            self.refresh_pots();
        }

        self.pass_action(seat);

        Ok(record)
    }

    /// После действия: закрыть улицу или передать ход следующему.
    fn pass_action(&mut self, from: SeatIndex) {
        let live = self.live_count();
        let final_street = self.table.config.variant.final_street();
        let Some(hand) = self.hand.as_mut() else {
            return;
        };
        let street = hand.betting.street;

        if live <= 1 {
            hand.action_on = None;
            hand.phase = HandPhase::EarlyEnd;
            self.emit(HandEventKind::StreetCompleted { street });
        } else if hand.betting.is_round_complete(&self.table) {
            hand.action_on = None;
            if street >= final_street {
                hand.phase = HandPhase::Showdown;
            }
            self.emit(HandEventKind::StreetCompleted { street });
        } else {
            hand.action_on = next_actor(&self.table, from);
        }
    }

    /// Назначить первого ходящего на улице: первый Active после `after`.
    fn open_action(&mut self, after: SeatIndex) {
        let final_street = self.table.config.variant.final_street();
        let Some(hand) = self.hand.as_mut() else {
            return;
        };
        let street = hand.betting.street;

        if hand.betting.is_round_complete(&self.table) {
            hand.action_on = None;
            if street >= final_street {
                hand.phase = HandPhase::Showdown;
            }
            self.emit(HandEventKind::StreetCompleted { street });
        } else {
            hand.action_on = next_actor(&self.table, after);
        }
    }

    // ---------------------------------------------------------------------
    // Улицы
    // ---------------------------------------------------------------------

    /// Перейти на следующую улицу после закрытия торговли.
    pub fn advance_street(&mut self) -> Result<(), EngineError> {
        let variant = self.table.config.variant;
        let big_blind = self.table.config.stakes.big_blind;

        let hand = self
            .hand
            .as_mut()
            .filter(|h| h.is_live())
            .ok_or(EngineError::NoActiveHand)?;
        let street = match hand.phase {
            HandPhase::Betting { street } => street,
            HandPhase::Showdown | HandPhase::EarlyEnd => return Err(EngineError::NoMoreStreets),
            _ => return Err(EngineError::NoActiveHand),
        };
        if !hand.betting.is_round_complete(&self.table) {
            return Err(EngineError::BettingNotComplete);
        }
        if street >= variant.final_street() {
            return Err(EngineError::NoMoreStreets);
        }

        let next = street + 1;
        let board_count = variant.board_cards_for(next);
        if board_count > 0 && self.deck.remaining() < board_count + 1 {
            return Err(EngineError::DeckExhausted);
        }

        let mut dealt = Vec::with_capacity(board_count);
        if board_count > 0 {
            self.deck.burn();
            for _ in 0..board_count {
                dealt.push(self.deck.deal_checked()?);
            }
        }
        self.table.board.extend_from_slice(&dealt);

        for player in self.table.seats.iter_mut().flatten() {
            player.street_bet = Chips::ZERO;
        }

        hand.betting = BettingState::new(next, Chips::ZERO, big_blind);
        hand.phase = HandPhase::Betting { street: next };
        hand.action_on = None;
        hand.actions_this_street = 0;
        let dealer = hand.dealer_button;

        self.emit(HandEventKind::StreetChanged {
            street: next,
            label: variant.street(next),
        });
        if !dealt.is_empty() {
            self.emit(HandEventKind::BoardDealt {
                street: next,
                cards: dealt,
            });
        }

        self.open_action(dealer);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Дро
    // ---------------------------------------------------------------------

    pub fn exchange_cards(&mut self, seat: SeatIndex, discards: &[Card]) -> Result<Vec<Card>, EngineError> {
        self.exchange_cards_with(seat, discards, &mut GlobalRng)
    }

    /// Обмен карт в дро: сбросить `discards`, добрать столько же.
    ///
    /// Только перед первым действием улицы, которой предшествует обмен,
    /// и только один раз на игрока. Пустой сброс – "стою".
    pub fn exchange_cards_with<R: RandomSource>(
        &mut self,
        seat: SeatIndex,
        discards: &[Card],
        rng: &mut R,
    ) -> Result<Vec<Card>, EngineError> {
        let variant = self.table.config.variant;
        let hand = self
            .hand
            .as_mut()
            .filter(|h| h.is_live())
            .ok_or(EngineError::NoActiveHand)?;

        let window_open = matches!(hand.phase, HandPhase::Betting { .. } | HandPhase::Showdown)
            && variant.draws_before(hand.betting.street)
            && hand.actions_this_street == 0;
        if !window_open {
            return Err(EngineError::DrawNotAllowed);
        }
        if hand.drawn.contains(&seat) {
            return Err(EngineError::AlreadyDrew(seat));
        }

        let player = self
            .table
            .player_mut(seat)
            .ok_or(EngineError::EmptySeat(seat))?;
        if !player.is_in_hand() {
            return Err(EngineError::PlayerCannotAct(seat));
        }
        for (i, card) in discards.iter().enumerate() {
            if !player.hole_cards.contains(card) || discards[..i].contains(card) {
                return Err(EngineError::CardNotInHand(card.to_string()));
            }
        }
        if self.deck.remaining() < discards.len() {
            return Err(EngineError::DeckExhausted);
        }

        let mut received = Vec::with_capacity(discards.len());
        for _ in discards {
            received.push(self.deck.deal_checked()?);
        }
        player.hole_cards.retain(|c| !discards.contains(c));
        player.hole_cards.extend_from_slice(&received);
        self.deck.return_cards_with(discards, rng);
        hand.drawn.push(seat);

        self.emit(HandEventKind::CardsExchanged {
            seat,
            discarded: discards.to_vec(),
            received: received.clone(),
        });

        Ok(received)
    }

    // ---------------------------------------------------------------------
    // Оценка и расчёт
    // ---------------------------------------------------------------------

    /// Лучшая рука игрока с текущим бордом (нужно 5–7 карт).
    pub fn evaluate_hand(&self, seat: SeatIndex) -> Result<HandRank, EngineError> {
        let player = self.table.player(seat).ok_or(EngineError::EmptySeat(seat))?;
        evaluate_best_hand(&player.hole_cards, &self.table.board)
    }

    /// Выплатить банк и закрыть раздачу.
    ///
    /// Ранний конец – единственный оставшийся забирает всё без вскрытия.
    /// Иначе – вскрытие, поты по уровням вкладов, сплиты с нечётными фишками слева от кнопки.
    pub fn settle_showdown(&mut self) -> Result<HandSummary, EngineError> {
        let hand = self
            .hand
            .as_ref()
            .filter(|h| h.is_live())
            .ok_or(EngineError::NoActiveHand)?;
        let ended_early = match hand.phase {
            HandPhase::EarlyEnd => true,
            HandPhase::Showdown => false,
            _ => return Err(EngineError::HandNotComplete),
        };
        let button = hand.dealer_button;
        let hand_number = hand.hand_number;
        let street_reached = hand.betting.street;

        let contributions = self.contributions();
        let left_of_button = ((button as usize + 1) % self.table.seats.len()) as SeatIndex;
        let contenders = collect_seats_from(&self.table, left_of_button, Player::is_in_hand);

        let mut ranks: BTreeMap<SeatIndex, HandRank> = BTreeMap::new();
        let awards: Vec<PotAward> = if ended_early {
            let winner = contenders.first().copied().ok_or(EngineError::HandNotComplete)?;
            award_uncontested(&contributions, winner)
        } else {
            for &seat in &contenders {
                ranks.insert(seat, self.evaluate_hand(seat)?);
            }
            settle_showdown(&contributions, &ranks, button, self.table.max_seats())
        };

        for (&seat, rank) in &ranks {
            let (player_id, hole_cards) = self
                .table
                .player(seat)
                .map(|p| (p.player_id, p.hole_cards.clone()))
                .unwrap_or_default();
            self.emit(HandEventKind::ShowdownReveal {
                seat,
                player_id,
                hole_cards,
                rank: rank.clone(),
            });
        }

        for award in &awards {
            let player_id = match self.table.player_mut(award.seat) {
                Some(p) => {
                    p.chips += award.amount;
                    p.player_id
                }
                None => continue,
            };
            self.emit(HandEventKind::PotAwarded {
                pot_index: award.pot_index,
                seat: award.seat,
                player_id,
                amount: award.amount,
            });
        }

        let paid: Chips = awards.iter().map(|a| a.amount).sum();
        let total_pot = match self.hand.as_mut() {
            Some(hand) => {
                let total = hand.pot.take();
                hand.pots.clear();
                hand.action_on = None;
                hand.phase = HandPhase::Settled;
                total
            }
            None => Chips::ZERO,
        };
        if paid != total_pot {
            log::error!("hand #{hand_number}: paid {paid} out of pot {total_pot}");
        }

        let payouts = payouts_by_seat(&awards);
        let results = contributions
            .iter()
            .map(|c| PlayerHandResult {
                seat: c.seat,
                player_id: self.table.player(c.seat).map(|p| p.player_id).unwrap_or_default(),
                rank: ranks.get(&c.seat).cloned(),
                invested: c.amount,
                won: payouts
                    .iter()
                    .filter(|p| p.seat == c.seat)
                    .map(|p| p.amount)
                    .sum(),
            })
            .collect();

        let summary = HandSummary {
            hand_number,
            street_reached,
            board: self.table.board.clone(),
            total_pot,
            ended_early,
            payouts,
            results,
        };

        self.emit(HandEventKind::HandFinished {
            hand_number,
            ended_early,
        });

        self.last_summary = Some(summary.clone());
        Ok(summary)
    }

    // ---------------------------------------------------------------------
    // Внутреннее
    // ---------------------------------------------------------------------

    /// Вклады игроков, сданных в раздачу.
    fn contributions(&self) -> Vec<Contribution> {
        self.table
            .occupied()
            .filter(|(_, p)| {
                matches!(
                    p.status,
                    PlayerStatus::Active | PlayerStatus::AllIn | PlayerStatus::Folded
                )
            })
            .map(|(seat, p)| Contribution::from_player(seat, p))
            .collect()
    }

    fn live_count(&self) -> usize {
        self.table.occupied().filter(|(_, p)| p.is_in_hand()).count()
    }

    /// Пересчитать разбивку банка и сообщить слушателям.
    fn refresh_pots(&mut self) {
        let pots = compute_side_pots(&self.contributions());
        let Some(hand) = self.hand.as_mut() else {
            return;
        };
        hand.pots = pots.clone();
        let total = hand.pot.total;
        self.emit(HandEventKind::PotUpdated { total, pots });
    }

    /// Записать событие в историю и разослать слушателям.
    fn emit(&mut self, kind: HandEventKind) {
        let event = self.history.push(kind);
        for sink in self.sinks.iter_mut() {
            sink.on_event(event);
        }
    }
}
