use crate::cards::{Board, CardError};
use crate::range::{Range, RangeError};
use crate::Currency;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod fixtures;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Number of community cards on this street.
    pub fn board_len(self) -> usize {
        match self {
            Self::Preflop => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::River => 5,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Preflop => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::River => write!(f, "river"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SituationError {
    TooFewPlayers,
    CurrentPlayerOutOfBounds,
    CurrentPlayerNotPending,
    NegativeAmount,
    NonPositiveBigBlind,
    NonPositiveIncrement,
    BoardRoundMismatch,
    Board(CardError),
    Range(usize, RangeError),
}

impl fmt::Display for SituationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::TooFewPlayers => write!(f, "fewer than two players"),
            Self::CurrentPlayerOutOfBounds => write!(f, "current player index out of bounds"),
            Self::CurrentPlayerNotPending => write!(f, "current player is not left to act"),
            Self::NegativeAmount => write!(f, "negative chip amount"),
            Self::NonPositiveBigBlind => write!(f, "big blind must be positive"),
            Self::NonPositiveIncrement => write!(f, "raise increment must be positive"),
            Self::BoardRoundMismatch => write!(f, "board length does not match the betting round"),
            Self::Board(e) => write!(f, "bad board: {}", e),
            Self::Range(seat, e) => write!(f, "bad range for seat {}: {}", seat, e),
        }
    }
}

impl std::error::Error for SituationError {}

impl From<CardError> for SituationError {
    fn from(e: CardError) -> Self {
        Self::Board(e)
    }
}

/// One seat in a training situation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SituationPlayer {
    pub stack: Currency,
    /// Chips put in so far this betting round.
    pub contributed: Currency,
    pub left_to_act: bool,
    pub range_raw: String,
}

impl SituationPlayer {
    pub fn new(stack: Currency, contributed: Currency, left_to_act: bool, range_raw: &str) -> Self {
        Self {
            stack,
            contributed,
            left_to_act,
            range_raw: range_raw.to_string(),
        }
    }

    pub fn range(&self) -> Result<Range, RangeError> {
        Range::parse(&self.range_raw)
    }
}

/// A canned training scenario, frozen at one decision point.
///
/// Built by the fixture functions in [`fixtures`] and never mutated after
/// construction. `validate` is what makes the freeze safe to rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Situation {
    pub situationid: Option<String>,
    pub description: String,
    /// Seated in the order they act on future rounds.
    pub players: Vec<SituationPlayer>,
    /// Index into players of who acts next this round.
    pub current_player: usize,
    pub is_limit: bool,
    pub big_blind: Currency,
    pub board_raw: String,
    pub current_round: Street,
    /// Pot at the start of this betting round.
    pub pot_pre: Currency,
    /// Minimum raise amount right now.
    pub increment: Currency,
    pub bet_count: u16,
}

impl Situation {
    pub fn board(&self) -> Result<Board, CardError> {
        self.board_raw.parse()
    }

    /// Pot including this round's live contributions.
    pub fn pot(&self) -> Currency {
        self.pot_pre + self.players.iter().map(|p| p.contributed).sum::<Currency>()
    }

    pub fn pending_players(&self) -> usize {
        self.players.iter().filter(|p| p.left_to_act).count()
    }

    pub fn validate(&self) -> Result<(), SituationError> {
        if self.players.len() < 2 {
            return Err(SituationError::TooFewPlayers);
        }
        let current = self
            .players
            .get(self.current_player)
            .ok_or(SituationError::CurrentPlayerOutOfBounds)?;
        if !current.left_to_act {
            return Err(SituationError::CurrentPlayerNotPending);
        }
        if self.pot_pre < 0
            || self
                .players
                .iter()
                .any(|p| p.stack < 0 || p.contributed < 0)
        {
            return Err(SituationError::NegativeAmount);
        }
        if self.big_blind <= 0 {
            return Err(SituationError::NonPositiveBigBlind);
        }
        if self.increment <= 0 {
            return Err(SituationError::NonPositiveIncrement);
        }
        let board = self.board()?;
        if board.len() != self.current_round.board_len() {
            return Err(SituationError::BoardRoundMismatch);
        }
        for (seat, player) in self.players.iter().enumerate() {
            if let Err(e) = player.range() {
                return Err(SituationError::Range(seat, e));
            }
        }
        Ok(())
    }
}
