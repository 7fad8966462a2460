//! Repetition factors for typical floors and rooms.
//!
//! A typical floor or room stands for `repeat_count` identical copies. The
//! factor of a node is its `repeat_count` when it is flagged typical and the
//! count is at least 1; anything else, including zero or negative counts left
//! behind by an unfinished edit, counts as a single copy. Products of factors
//! saturate at `u64::MAX` instead of overflowing.

use crate::model::{Floor, Room};

fn factor(is_typical: bool, repeat_count: Option<i64>) -> u64 {
    match repeat_count {
        Some(count) if is_typical => u64::try_from(count).map_or(1, |count| count.max(1)),
        _ => 1,
    }
}

/// Factor contributed by a floor on its own. Used for rack-scoped items.
#[must_use]
pub fn floor_multiplier(floor: &Floor) -> u64 {
    factor(floor.is_typical, floor.repeat_count)
}

#[must_use]
pub fn room_multiplier(room: &Room) -> u64 {
    factor(room.is_typical, room.repeat_count)
}

/// Floor factor times room factor. Never below 1.
#[must_use]
pub fn effective_multiplier(floor: &Floor, room: Option<&Room>) -> u64 {
    let room_factor = room.map_or(1, room_multiplier);
    floor_multiplier(floor).saturating_mul(room_factor)
}
