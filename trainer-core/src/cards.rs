use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const CLUB: char = 'c';
pub const DIAMOND: char = 'd';
pub const HEART: char = 'h';
pub const SPADE: char = 's';

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CardError {
    UnknownRankChar,
    UnknownSuitChar,
    BadCardLength,
    BadBoardLength,
    DuplicateCard,
}

impl std::error::Error for CardError {}

/// Ranks are ordered low to high so deriving Ord gives deuce < trey < ... < ace.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    R2 = 2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    RT,
    RJ,
    RQ,
    RK,
    RA,
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::R2,
    Rank::R3,
    Rank::R4,
    Rank::R5,
    Rank::R6,
    Rank::R7,
    Rank::R8,
    Rank::R9,
    Rank::RT,
    Rank::RJ,
    Rank::RQ,
    Rank::RK,
    Rank::RA,
];

impl Rank {
    /// Ranks from lo to hi inclusive, in ascending order. Empty if lo > hi.
    pub fn span(lo: Rank, hi: Rank) -> impl Iterator<Item = Rank> {
        ALL_RANKS.into_iter().filter(move |r| *r >= lo && *r <= hi)
    }

    pub fn as_char(self) -> char {
        match self {
            Rank::R2 => '2',
            Rank::R3 => '3',
            Rank::R4 => '4',
            Rank::R5 => '5',
            Rank::R6 => '6',
            Rank::R7 => '7',
            Rank::R8 => '8',
            Rank::R9 => '9',
            Rank::RT => 'T',
            Rank::RJ => 'J',
            Rank::RQ => 'Q',
            Rank::RK => 'K',
            Rank::RA => 'A',
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::R2),
            '3' => Ok(Rank::R3),
            '4' => Ok(Rank::R4),
            '5' => Ok(Rank::R5),
            '6' => Ok(Rank::R6),
            '7' => Ok(Rank::R7),
            '8' => Ok(Rank::R8),
            '9' => Ok(Rank::R9),
            'T' => Ok(Rank::RT),
            'J' => Ok(Rank::RJ),
            'Q' => Ok(Rank::RQ),
            'K' => Ok(Rank::RK),
            'A' => Ok(Rank::RA),
            _ => Err(CardError::UnknownRankChar),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    pub fn as_char(self) -> char {
        match self {
            Suit::Club => CLUB,
            Suit::Diamond => DIAMOND,
            Suit::Heart => HEART,
            Suit::Spade => SPADE,
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            CLUB => Ok(Suit::Club),
            DIAMOND => Ok(Suit::Diamond),
            HEART => Ok(Suit::Heart),
            SPADE => Ok(Suit::Spade),
            _ => Err(CardError::UnknownSuitChar),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Ordering is rank-major; suit only breaks ties so sets iterate deterministically.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => Ok(Self::new(rank.try_into()?, suit.try_into()?)),
            _ => Err(CardError::BadCardLength),
        }
    }
}

pub fn all_cards() -> impl Iterator<Item = Card> {
    ALL_RANKS
        .into_iter()
        .cartesian_product(ALL_SUITS)
        .map(|(rank, suit)| Card::new(rank, suit))
}

/// How coordinated the suits of a flop are.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuitTexture {
    Rainbow,
    TwoTone,
    Monotone,
}

impl fmt::Display for SuitTexture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Rainbow => write!(f, "rainbow"),
            Self::TwoTone => write!(f, "two-tone"),
            Self::Monotone => write!(f, "monotone"),
        }
    }
}

/// Community cards. Empty preflop, 3 to 5 cards after that.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Suit texture of the first three cards. None before the flop.
    pub fn flop_texture(&self) -> Option<SuitTexture> {
        let flop = self.0.get(..3)?;
        let suits = flop.iter().map(|c| c.suit).unique().count();
        Some(match suits {
            1 => SuitTexture::Monotone,
            2 => SuitTexture::TwoTone,
            _ => SuitTexture::Rainbow,
        })
    }

    /// True if any two flop cards share a rank. False before the flop.
    pub fn flop_paired(&self) -> bool {
        match self.0.get(..3) {
            Some(flop) => flop.iter().map(|c| c.rank).unique().count() < 3,
            None => false,
        }
    }
}

impl FromStr for Board {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() % 2 != 0 {
            return Err(CardError::BadCardLength);
        }
        let mut cards = Vec::with_capacity(chars.len() / 2);
        for pair in chars.chunks(2) {
            let card = Card::new(pair[0].try_into()?, pair[1].try_into()?);
            if cards.contains(&card) {
                return Err(CardError::DuplicateCard);
            }
            cards.push(card);
        }
        match cards.len() {
            0 | 3 | 4 | 5 => Ok(Self(cards)),
            _ => Err(CardError::BadBoardLength),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for card in &self.0 {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_round_trip() {
        for card in all_cards() {
            let s = card.to_string();
            assert_eq!(s.parse::<Card>(), Ok(card));
        }
    }

    #[test]
    fn card_parse_is_case_insensitive() {
        assert_eq!("kS".parse::<Card>(), Ok(Card::new(Rank::RK, Suit::Spade)));
    }

    #[test]
    fn card_parse_rejects_garbage() {
        assert_eq!("Xs".parse::<Card>(), Err(CardError::UnknownRankChar));
        assert_eq!("Kx".parse::<Card>(), Err(CardError::UnknownSuitChar));
        assert_eq!("K".parse::<Card>(), Err(CardError::BadCardLength));
        assert_eq!("Ks8h".parse::<Card>(), Err(CardError::BadCardLength));
    }

    #[test]
    fn fifty_two_distinct_cards() {
        use std::collections::HashSet;
        let deck: HashSet<Card> = all_cards().collect();
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn rank_order() {
        assert!(Rank::RA > Rank::RK);
        assert!(Rank::R2 < Rank::R3);
        let mid: Vec<Rank> = Rank::span(Rank::R9, Rank::RJ).collect();
        assert_eq!(mid, vec![Rank::R9, Rank::RT, Rank::RJ]);
        assert_eq!(Rank::span(Rank::RJ, Rank::R9).count(), 0);
    }

    #[test]
    fn board_parse_lengths() {
        assert_eq!("".parse::<Board>().unwrap().len(), 0);
        assert_eq!("Ks8h3d".parse::<Board>().unwrap().len(), 3);
        assert_eq!("Ks8h3d2c".parse::<Board>().unwrap().len(), 4);
        assert_eq!("Ks8h3d2c9s".parse::<Board>().unwrap().len(), 5);
        assert_eq!("Ks8h".parse::<Board>(), Err(CardError::BadBoardLength));
        assert_eq!("Ks8h3".parse::<Board>(), Err(CardError::BadCardLength));
        assert_eq!("Ks8h3dKs".parse::<Board>(), Err(CardError::DuplicateCard));
    }

    #[test]
    fn board_display_round_trip() {
        let board: Board = "Ks8h3d".parse().unwrap();
        assert_eq!(board.to_string(), "Ks8h3d");
    }

    #[test]
    fn flop_textures() {
        let rainbow: Board = "Ks8h3d".parse().unwrap();
        assert_eq!(rainbow.flop_texture(), Some(SuitTexture::Rainbow));
        let two_tone: Board = "Th9h8c".parse().unwrap();
        assert_eq!(two_tone.flop_texture(), Some(SuitTexture::TwoTone));
        let monotone: Board = "7h5h2h".parse().unwrap();
        assert_eq!(monotone.flop_texture(), Some(SuitTexture::Monotone));
        let preflop = Board::default();
        assert_eq!(preflop.flop_texture(), None);
    }

    #[test]
    fn paired_flops() {
        let paired: Board = "JsJd4c".parse().unwrap();
        assert!(paired.flop_paired());
        let unpaired: Board = "Ks8h3d".parse().unwrap();
        assert!(!unpaired.flop_paired());
        assert!(!Board::default().flop_paired());
    }

    #[test]
    fn turn_does_not_change_flop_texture() {
        let board: Board = "Ks8h3d3s".parse().unwrap();
        assert_eq!(board.flop_texture(), Some(SuitTexture::Rainbow));
        assert!(!board.flop_paired());
    }
}
