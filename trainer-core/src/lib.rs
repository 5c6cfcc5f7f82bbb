pub mod cards;
pub mod range;
pub mod situation;
pub mod util;

/// Chip amounts are whole chips.
pub type Currency = i32;
/// Open games are keyed by a short random string.
pub type GameId = String;
