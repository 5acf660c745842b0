//! Cyclic navigation through a candidate list

/// Direction of an up/down key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Move an index one step through a list of `len` entries, wrapping at both ends
///
/// # Arguments
/// * `len` - Number of entries in the list
/// * `index` - Current position
/// * `direction` - Step direction
///
/// # Returns
/// * `usize` - New position; `index` unchanged when the list has at most one entry
pub fn cycle_index(len: usize, index: usize, direction: Direction) -> usize {
    if len <= 1 {
        return index;
    }

    match direction {
        Direction::Up if index == 0 => len - 1,
        Direction::Up => index - 1,
        Direction::Down if index >= len - 1 => 0,
        Direction::Down => index + 1,
    }
}
