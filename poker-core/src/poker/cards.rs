use static_assertions::const_assert_eq;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::poker::error::{Error, Result};

/// The four card symbols. The derived ordering exists only so that suits can
/// key ordered maps; no suit outranks another.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Clubs = 2,
    Tiles = 3,
}

/// Card face value. Aces are high only: there is no rank below `Deuce`.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter)]
#[repr(u8)]
pub enum Rank {
    Deuce = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

pub const RANK_COUNT: usize = 13;
pub const SUIT_COUNT: usize = 4;

const_assert_eq!(Rank::Ace as usize - Rank::Deuce as usize + 1, RANK_COUNT);
const_assert_eq!(Suit::Tiles as usize + 1, SUIT_COUNT);

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
            low => char::from(b'0' + low.value()),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::iter()
            .find(|rank| rank.value() == value)
            .ok_or(Error::InvalidRank(value))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Clubs => 'C',
            Self::Tiles => 'D',
        }
    }
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Parse a two-character shorthand such as `KH` or `7c` into a card, the
    /// inverse of its `Display`. Tiles may also be written `T`. Panics on a
    /// malformed identifier, so it is meant for fixtures only.
    ///
    /// ```
    /// # use poker_core::prelude::{Card, Suit, Rank};
    /// assert_eq!(Card::from_ident("kh"), Card::new(Rank::King, Suit::Hearts));
    /// assert_eq!(Card::from_ident("TD"), Card::from_ident("TT"));
    /// ```
    pub fn from_ident(ident: &str) -> Self {
        let symbols: Vec<char> = ident.chars().map(|c| c.to_ascii_uppercase()).collect();
        let [rank_symbol, suit_symbol] = symbols[..] else {
            panic!("card identifier {ident:?} is not two characters");
        };

        let rank = Rank::iter()
            .find(|rank| rank.symbol() == rank_symbol)
            .unwrap_or_else(|| panic!("no rank is written {rank_symbol:?}"));
        let suit = Suit::iter()
            .find(|suit| suit.symbol() == suit_symbol)
            .or((suit_symbol == 'T').then_some(Suit::Tiles))
            .unwrap_or_else(|| panic!("no suit is written {suit_symbol:?}"));

        Self::new(rank, suit)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

#[macro_export]
macro_rules! card {
    ($ident:literal) => {
        $crate::poker::cards::Card::from_ident($ident)
    };
}

pub trait CardView {
    fn view(&self) -> &[Card];
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardCollection {
    cards: Vec<Card>,
}

impl CardCollection {
    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }
    /// Convert a series of shorthand identifiers into a `CardCollection`.
    /// Panics if the input is incorrect. This exists only for test-writing.
    ///
    /// ```
    /// # use poker_core::prelude::{Suit, Rank, Card, CardCollection};
    /// let cards = CardCollection::from_idents("KH TD JS 2C");
    /// assert_eq!(cards.nth(2), Some(Card {
    ///     rank: Rank::Jack,
    ///     suit: Suit::Spades,
    /// }));
    /// ```
    pub fn from_idents(idents: &str) -> Self {
        let idents = idents.split_ascii_whitespace();
        Self::from(idents.map(Card::from_ident).collect::<Vec<_>>().as_slice())
    }
    pub fn nth(&self, n: usize) -> Option<Card> {
        self.cards.get(n).copied()
    }
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[macro_export]
macro_rules! cards {
    ($ident:literal) => {
        $crate::poker::cards::CardCollection::from_idents($ident)
    };
}

impl From<&[Card]> for CardCollection {
    fn from(value: &[Card]) -> Self {
        Self {
            cards: Vec::from(value),
        }
    }
}

impl From<Vec<Card>> for CardCollection {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl CardView for CardCollection {
    fn view(&self) -> &[Card] {
        &self.cards
    }
}
