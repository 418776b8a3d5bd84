use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::SeatIndex;
use crate::engine::actions::{ActionType, PlayerActionKind, ValidActions};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;

/// Проверка, может ли игрок выполнить это действие при текущем состоянии ставок.
///
/// Очередь хода проверяет вызывающий (движок); здесь – только статус, суммы и стек.
/// `min_bet` – минимальный открывающий бет (большой блайнд).
pub fn validate_action(
    seat: SeatIndex,
    player: &Player,
    action: &PlayerActionKind,
    betting: &BettingState,
    min_bet: Chips,
) -> Result<(), EngineError> {
    if !player.can_act() {
        return Err(EngineError::PlayerCannotAct(seat));
    }

    let stack = player.chips;
    let to_call = player.to_call(betting.current_bet);

    match *action {
        PlayerActionKind::Fold => Ok(()),

        PlayerActionKind::Check => {
            if to_call.is_zero() {
                Ok(())
            } else {
                Err(EngineError::CannotCheck { to_call })
            }
        }

        PlayerActionKind::Call => {
            if to_call.is_zero() {
                Err(EngineError::CannotCall)
            } else if stack < to_call {
                // Короткий стек коллирует через AllIn.
                Err(EngineError::NotEnoughChips {
                    needed: to_call,
                    available: stack,
                })
            } else {
                Ok(())
            }
        }

        PlayerActionKind::Bet(amount) => {
            if !betting.current_bet.is_zero() {
                return Err(EngineError::BetNotAllowed {
                    current_bet: betting.current_bet,
                });
            }
            if amount > stack {
                return Err(EngineError::NotEnoughChips {
                    needed: amount,
                    available: stack,
                });
            }
            if amount < min_bet || amount.is_zero() {
                return Err(EngineError::BetTooSmall {
                    amount,
                    minimum: min_bet,
                });
            }
            Ok(())
        }

        PlayerActionKind::Raise(amount) => {
            if betting.current_bet.is_zero() {
                return Err(EngineError::RaiseNotAllowed);
            }
            if amount > stack {
                return Err(EngineError::NotEnoughChips {
                    needed: amount,
                    available: stack,
                });
            }

            let increment = amount.saturating_sub(to_call);
            if increment.is_zero() || increment < betting.min_raise {
                return Err(EngineError::RaiseTooSmall {
                    increment,
                    minimum: betting.min_raise,
                });
            }
            Ok(())
        }

        PlayerActionKind::AllIn => {
            if stack.is_zero() {
                Err(EngineError::PlayerCannotAct(seat))
            } else {
                Ok(())
            }
        }
    }
}

/// Набор легальных действий для игрока (для UI / бота).
pub fn valid_actions(
    seat: SeatIndex,
    player: &Player,
    betting: &BettingState,
    min_bet: Chips,
) -> ValidActions {
    if !player.can_act() {
        return ValidActions::none(seat);
    }

    let stack = player.chips;
    let to_call = player.to_call(betting.current_bet);

    let mut actions = vec![ActionType::Fold];
    let mut min_amount = Chips::ZERO;
    let mut max_amount = Chips::ZERO;

    if to_call.is_zero() {
        actions.push(ActionType::Check);
    } else if stack >= to_call {
        actions.push(ActionType::Call);
    }

    if betting.current_bet.is_zero() {
        let minimum = min_bet.max(Chips(1));
        if stack >= minimum {
            actions.push(ActionType::Bet);
            min_amount = minimum;
            max_amount = stack;
        }
    } else {
        let minimum = to_call + betting.min_raise.max(Chips(1));
        if stack >= minimum {
            actions.push(ActionType::Raise);
            min_amount = minimum;
            max_amount = stack;
        }
    }

    if !stack.is_zero() {
        actions.push(ActionType::AllIn);
    }

    ValidActions {
        seat,
        actions,
        to_call,
        min_amount,
        max_amount,
    }
}
