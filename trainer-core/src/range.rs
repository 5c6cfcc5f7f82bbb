//! Parsing for the compact hand range notation used by situation authors.
//!
//! A range spec is a comma separated list of tokens. `QQ` is a pair, `AKs`
//! suited, `AKo` offsuit, and bare `AK` both. A trailing `+` extends a class
//! upward (`A2s+`), a `-` spans two classes of the same shape (`99-22`,
//! `AJs-A6s`), and a four character token names one exact combo (`AhKh`).

use crate::cards::{Card, Rank, ALL_SUITS};
use itertools::Itertools;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Two distinct hole cards, stored with the higher card first.
pub type Combo = (Card, Card);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    Empty,
    Token(String),
    Span(String),
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "range is empty"),
            Self::Token(t) => write!(f, "unrecognized hand class '{}'", t),
            Self::Span(t) => write!(f, "mismatched span '{}'", t),
        }
    }
}

impl std::error::Error for RangeError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Shape {
    Pair,
    Suited,
    Offsuit,
    Any,
}

#[derive(Debug, Copy, Clone)]
struct HandClass {
    shape: Shape,
    high: Rank,
    low: Rank,
}

fn parse_class(tok: &str) -> Option<HandClass> {
    let chars: Vec<char> = tok.chars().collect();
    let (r1, r2, shape_tag) = match chars.as_slice() {
        [a, b] => (*a, *b, None),
        [a, b, tag] => (*a, *b, Some(tag.to_ascii_lowercase())),
        _ => return None,
    };
    let r1: Rank = r1.try_into().ok()?;
    let r2: Rank = r2.try_into().ok()?;
    let (low, high) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };
    let shape = match shape_tag {
        None if low == high => Shape::Pair,
        None => Shape::Any,
        // Pairs have no suitedness.
        Some(_) if low == high => return None,
        Some('s') => Shape::Suited,
        Some('o') => Shape::Offsuit,
        Some(_) => return None,
    };
    Some(HandClass { shape, high, low })
}

fn insert_combo(combos: &mut BTreeSet<Combo>, a: Card, b: Card) {
    if a > b {
        combos.insert((a, b));
    } else {
        combos.insert((b, a));
    }
}

fn expand_class(class: HandClass, combos: &mut BTreeSet<Combo>) {
    match class.shape {
        Shape::Pair => {
            for (s1, s2) in ALL_SUITS.into_iter().tuple_combinations() {
                insert_combo(combos, Card::new(class.high, s1), Card::new(class.high, s2));
            }
        }
        Shape::Suited => {
            for suit in ALL_SUITS {
                insert_combo(combos, Card::new(class.high, suit), Card::new(class.low, suit));
            }
        }
        Shape::Offsuit => {
            for (s1, s2) in ALL_SUITS.into_iter().cartesian_product(ALL_SUITS) {
                if s1 != s2 {
                    insert_combo(combos, Card::new(class.high, s1), Card::new(class.low, s2));
                }
            }
        }
        Shape::Any => {
            expand_class(
                HandClass {
                    shape: Shape::Suited,
                    ..class
                },
                combos,
            );
            expand_class(
                HandClass {
                    shape: Shape::Offsuit,
                    ..class
                },
                combos,
            );
        }
    }
}

fn parse_token(tok: &str, combos: &mut BTreeSet<Combo>) -> Result<(), RangeError> {
    let bad_token = || RangeError::Token(tok.to_string());
    if let Some((a, b)) = tok.split_once('-') {
        let first = parse_class(a).ok_or_else(bad_token)?;
        let second = parse_class(b).ok_or_else(bad_token)?;
        if first.shape != second.shape {
            return Err(RangeError::Span(tok.to_string()));
        }
        if first.shape == Shape::Pair {
            let (lo, hi) = order(first.high, second.high);
            for rank in Rank::span(lo, hi) {
                expand_class(
                    HandClass {
                        shape: Shape::Pair,
                        high: rank,
                        low: rank,
                    },
                    combos,
                );
            }
        } else {
            if first.high != second.high {
                return Err(RangeError::Span(tok.to_string()));
            }
            let (lo, hi) = order(first.low, second.low);
            for rank in Rank::span(lo, hi) {
                expand_class(HandClass { low: rank, ..first }, combos);
            }
        }
    } else if let Some(base) = tok.strip_suffix('+') {
        let class = parse_class(base).ok_or_else(bad_token)?;
        if class.shape == Shape::Pair {
            for rank in Rank::span(class.high, Rank::RA) {
                expand_class(
                    HandClass {
                        shape: Shape::Pair,
                        high: rank,
                        low: rank,
                    },
                    combos,
                );
            }
        } else {
            // A2s+ runs the low card up to just under the high card.
            for rank in Rank::span(class.low, class.high).filter(|r| *r < class.high) {
                expand_class(HandClass { low: rank, ..class }, combos);
            }
        }
    } else if tok.chars().count() == 4 {
        let chars: Vec<char> = tok.chars().collect();
        let a = Card::new(
            chars[0].try_into().map_err(|_| bad_token())?,
            chars[1].try_into().map_err(|_| bad_token())?,
        );
        let b = Card::new(
            chars[2].try_into().map_err(|_| bad_token())?,
            chars[3].try_into().map_err(|_| bad_token())?,
        );
        if a == b {
            return Err(bad_token());
        }
        insert_combo(combos, a, b);
    } else {
        let class = parse_class(tok).ok_or_else(bad_token)?;
        expand_class(class, combos);
    }
    Ok(())
}

fn order(a: Rank, b: Rank) -> (Rank, Rank) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// A set of concrete hole card combos expanded from a range spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    combos: BTreeSet<Combo>,
    classes: usize,
}

impl Range {
    /// Parse a spec. A spec that expands to zero combos is an error.
    pub fn parse(spec: &str) -> Result<Self, RangeError> {
        let mut combos = BTreeSet::new();
        let mut classes = 0;
        for tok in spec.split(',') {
            let tok = tok.trim();
            if tok.is_empty() {
                continue;
            }
            parse_token(tok, &mut combos)?;
            classes += 1;
        }
        if combos.is_empty() {
            return Err(RangeError::Empty);
        }
        Ok(Self { combos, classes })
    }

    pub fn combo_count(&self) -> usize {
        self.combos.len()
    }

    /// Number of tokens in the spec as written. Overlapping tokens still count.
    pub fn class_count(&self) -> usize {
        self.classes
    }

    pub fn combos(&self) -> impl Iterator<Item = Combo> + '_ {
        self.combos.iter().copied()
    }

    pub fn contains(&self, a: Card, b: Card) -> bool {
        let key = if a > b { (a, b) } else { (b, a) };
        self.combos.contains(&key)
    }
}

impl FromStr for Range {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
