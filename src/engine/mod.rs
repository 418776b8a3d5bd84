//! Покерный движок: ставки, переход улиц, сайд-поты, шоудаун.
//!
//! Высокоуровневый объект: `GameEngine`
//! Основные операции:
//!   - `start_hand` – запустить новую раздачу
//!   - `apply_action` – применить действие игрока
//!   - `advance_street` – открыть следующую улицу, когда торговля закрыта
//!   - `settle_showdown` – выплатить банк

pub mod actions;
pub mod betting;
pub mod errors;
pub mod events;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod settlement;
pub mod side_pots;
pub mod validation;

pub use actions::{ActionType, PlayerAction, PlayerActionKind, ValidActions};
pub use betting::BettingState;
pub use errors::{EngineError, ErrorKind};
pub use events::{EventSink, LogSink, RecordingSink};
pub use game_loop::{GameEngine, HandState};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use pot::Pot;
pub use settlement::{settle_showdown, PotAward};
pub use side_pots::{compute_side_pots, Contribution, SidePot};

pub use crate::infra::rng::RandomSource;
