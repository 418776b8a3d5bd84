use crate::domain::{Player, SeatIndex, Table};

/// Найти следующее место по кругу, удовлетворяющее `pred` (включая/исключая start).
///
/// Обход ограничен числом мест, так что всегда завершается.
pub fn next_seat_where<F>(
    table: &Table,
    start: SeatIndex,
    include_start: bool,
    pred: F,
) -> Option<SeatIndex>
where
    F: Fn(&Player) -> bool,
{
    let max = table.seats.len();
    if max == 0 {
        return None;
    }

    let mut idx = start as usize % max;
    if !include_start {
        idx = (idx + 1) % max;
    }

    for _ in 0..max {
        if let Some(p) = table.seats[idx].as_ref() {
            if pred(p) {
                return Some(idx as SeatIndex);
            }
        }
        idx = (idx + 1) % max;
    }

    None
}

/// Следующее занятое место по кругу.
pub fn next_occupied_seat(table: &Table, start: SeatIndex, include_start: bool) -> Option<SeatIndex> {
    next_seat_where(table, start, include_start, |_| true)
}

/// Следующее место, где игрок может ходить (Active), строго после `start`.
pub fn next_actor(table: &Table, start: SeatIndex) -> Option<SeatIndex> {
    next_seat_where(table, start, false, Player::can_act)
}

/// Все места, удовлетворяющие `pred`, по кругу начиная со `start` (включительно).
pub fn collect_seats_from<F>(table: &Table, start: SeatIndex, pred: F) -> Vec<SeatIndex>
where
    F: Fn(&Player) -> bool,
{
    let max = table.seats.len();
    let mut seats = Vec::new();

    if max == 0 {
        return seats;
    }

    let mut idx = start as usize % max;
    for _ in 0..max {
        if let Some(p) = table.seats[idx].as_ref() {
            if pred(p) {
                seats.push(idx as SeatIndex);
            }
        }
        idx = (idx + 1) % max;
    }

    seats
}

/// Следующая позиция дилера:
/// - если есть текущая кнопка – следующее место, где игрок будет сдан в раздачу;
/// - если нет – первое такое место с нуля.
pub fn next_dealer(table: &Table) -> Option<SeatIndex> {
    match table.dealer_button {
        Some(button) => next_seat_where(table, button, false, Player::can_be_dealt_in),
        None => next_seat_where(table, 0, true, Player::can_be_dealt_in),
    }
}

/// Расстояние по часовой стрелке от места слева от кнопки (0 = сразу слева от кнопки).
/// Используется для раздачи нечётных фишек.
pub fn clockwise_distance_from_button(button: SeatIndex, seat: SeatIndex, seat_count: u8) -> u8 {
    let n = seat_count.max(1) as u16;
    ((seat as u16 + n - (button as u16 % n) - 1) % n) as u8
}
