use std::cell::RefCell;
use std::rc::Rc;

use crate::engine::hand_history::{HandEvent, HandEventKind};

/// Слушатель событий раздачи (рендерер, логгер, бот).
///
/// Вызывается синхронно, в порядке событий, после того как событие записано в историю.
pub trait EventSink {
    fn on_event(&mut self, event: &HandEvent);
}

/// Пересылает события в `log`: одна запись на событие.
///
/// Сам движок ход раздачи не логирует, только аномалии (`warn!`/`error!`).
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn on_event(&mut self, event: &HandEvent) {
        match &event.kind {
            HandEventKind::HandStarted {
                hand_number,
                dealer,
                seats,
            } => log::info!(
                "hand #{hand_number} started, button at seat {dealer}, {} players",
                seats.len()
            ),
            HandEventKind::BlindsPosted {
                small_blind,
                big_blind,
                ..
            } => log::info!("blinds: sb {small_blind:?}, bb {big_blind:?}"),
            HandEventKind::PlayerActed {
                action, pot_after, ..
            } => log::info!(
                "seat {} {} (pot {pot_after})",
                action.seat,
                action.kind
            ),
            HandEventKind::BoardDealt { street, cards } => {
                let cards: Vec<String> = cards.iter().map(ToString::to_string).collect();
                log::info!("street {street}: board {}", cards.join(" "));
            }
            HandEventKind::PotAwarded { seat, amount, .. } => {
                log::info!("seat {seat} wins {amount}")
            }
            HandEventKind::HandFinished { hand_number, .. } => {
                log::info!("hand #{hand_number} finished")
            }
            other => log::debug!("{other:?}"),
        }
    }
}

/// Копит события в общий буфер: движок владеет одной копией, драйвер – другой.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<HandEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Снимок накопленных событий.
    pub fn events(&self) -> Vec<HandEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventSink for RecordingSink {
    fn on_event(&mut self, event: &HandEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
