use crate::domain::card::Rank;

/// Битовая маска рангов: бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

const ALL_RANKS: usize = 1 << 13;

/// Пять подряд идущих бит.
const FIVE_IN_A_ROW: RankMask = 0b1_1111;

/// A2345: туз играет младшей картой.
const WHEEL: RankMask = 0b1_0000_0000_1111;

/// Старшая карта стрита (значение 5..=14) для каждой из 8192 масок, 0 – стрита нет.
static STRAIGHT_TOP: [u8; ALL_RANKS] = build_straight_table();

const fn build_straight_table() -> [u8; ALL_RANKS] {
    let mut table = [0u8; ALL_RANKS];
    let mut mask = 0;
    while mask < ALL_RANKS {
        let m = mask as RankMask;
        // Окно старшей картой вниз: туз (12) .. шестёрка (4).
        let mut top: i32 = 12;
        while top >= 4 {
            let window = FIVE_IN_A_ROW << (top - 4);
            if m & window == window {
                table[mask] = top as u8 + 2;
                break;
            }
            top -= 1;
        }
        if table[mask] == 0 && m & WHEEL == WHEEL {
            table[mask] = 5;
        }
        mask += 1;
    }
    table
}

pub fn rank_to_bit(rank: Rank) -> RankMask {
    1 << (rank.value() - 2)
}

/// Старшая карта лучшего стрита в маске (для A2345 – пятёрка).
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    let top = STRAIGHT_TOP[(rank_mask as usize) & (ALL_RANKS - 1)];
    Rank::from_value(top)
}

/// Ранги, присутствующие в маске, по убыванию.
pub fn ranks_desc(rank_mask: RankMask) -> impl Iterator<Item = Rank> {
    Rank::ALL
        .into_iter()
        .rev()
        .filter(move |r| rank_mask & rank_to_bit(*r) != 0)
}
