//! The standard Game of Life rule, B3/S23.

pub(crate) const BIRTH: u8 = 3;
pub(crate) const SURVIVE_MIN: u8 = 2;
pub(crate) const SURVIVE_MAX: u8 = 3;

/// Next state of one cell given its current state and live-neighbor count.
pub(crate) fn next_state(alive: bool, neighbors: u8) -> bool {
    if alive {
        // <2 dies of underpopulation, >3 of overpopulation
        (SURVIVE_MIN..=SURVIVE_MAX).contains(&neighbors)
    } else {
        // reproduction
        neighbors == BIRTH
    }
}
