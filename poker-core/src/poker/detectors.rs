//! One detector per poker category. Every detector reports *all* the
//! qualifying combinations it finds in a multiset, never only the best one;
//! picking the best is left to [`crate::poker::selector`].

use std::collections::BTreeMap;

use itertools::Itertools;
use lazy_static::lazy_static;
use static_assertions::const_assert_eq;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use super::cards::{Rank, Suit, RANK_COUNT};
use super::multiset::CardMultiset;

pub const STRAIGHT_LEN: usize = 5;
pub const FLUSH_LEN: usize = 5;
pub const STRAIGHT_WINDOW_COUNT: usize = 10;

// The rank list is padded with the ace in front, hence the extra window.
const_assert_eq!(RANK_COUNT + 1 - STRAIGHT_LEN + 1, STRAIGHT_WINDOW_COUNT);

/// Five ranks in the order they appear in the window table.
pub type Window = [Rank; STRAIGHT_LEN];

pub const ROYAL_WINDOW: Window = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

lazy_static! {
    static ref STRAIGHT_WINDOWS: Vec<Window> = std::iter::once(Rank::Ace)
        .chain(Rank::iter())
        .tuple_windows()
        .map(|(a, b, c, d, e)| [a, b, c, d, e])
        .collect();
}

/// All candidate straight windows in table order. The first one is led by the
/// ace, `[A, 2, 3, 4, 5]`, and the last one is [`ROYAL_WINDOW`].
pub fn straight_windows() -> &'static [Window] {
    &STRAIGHT_WINDOWS
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter, Display)]
#[repr(u8)]
pub enum Category {
    #[strum(to_string = "Pair")]
    Pair = 1,
    #[strum(to_string = "Two pairs")]
    TwoPair = 2,
    #[strum(to_string = "Triple")]
    ThreeOfAKind = 3,
    #[strum(to_string = "Straight")]
    Straight = 4,
    #[strum(to_string = "Flush")]
    Flush = 5,
    #[strum(to_string = "Full house")]
    FullHouse = 6,
    #[strum(to_string = "Kare")]
    FourOfAKind = 7,
    #[strum(to_string = "Straight flush")]
    StraightFlush = 8,
    #[strum(to_string = "Royal flush")]
    RoyalFlush = 9,
}

/// Whether the winner resolver consults a category.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    Wired,
    /// Detected, but no policy exists yet for comparing it across contestants.
    Pending,
}

impl Category {
    /// Every category, highest precedence first.
    pub fn by_precedence() -> impl Iterator<Item = Self> {
        Self::iter().rev()
    }

    pub fn stage(self) -> Stage {
        match self {
            Self::RoyalFlush
            | Self::StraightFlush
            | Self::FourOfAKind
            | Self::Flush
            | Self::Straight => Stage::Wired,
            Self::FullHouse | Self::ThreeOfAKind | Self::TwoPair | Self::Pair => Stage::Pending,
        }
    }
}

/// Raw full house components: which ranks are held three times and which
/// twice. Nothing checks that both are present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FullHouseParts {
    pub triples: Vec<Rank>,
    pub pairs: Vec<Rank>,
}

/// One concrete hand fragment realizing a category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Combination {
    /// Ranks of a pair, two pair, triple or kare. May repeat a rank.
    Set(Vec<Rank>),
    Window(Window),
    Flush { suit: Suit, ranks: Window },
    FullHouse(FullHouseParts),
}

impl Combination {
    pub fn ranks(&self) -> Vec<Rank> {
        match self {
            Self::Set(ranks) => ranks.clone(),
            Self::Window(ranks) | Self::Flush { ranks, .. } => ranks.to_vec(),
            Self::FullHouse(parts) => parts.triples.iter().chain(&parts.pairs).copied().collect(),
        }
    }

    /// The highest rank in this combination. Aces are always high.
    pub fn top(&self) -> Option<Rank> {
        self.ranks().into_iter().max()
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ranks().iter().join(" "))?;
        if let Self::Flush { suit, .. } = self {
            write!(f, " of {}", suit.symbol())?;
        }
        Ok(())
    }
}

fn ranks_held_exactly(multiset: &CardMultiset, times: usize) -> Vec<Rank> {
    let counts = multiset.flat_ranks().into_iter().counts();
    Rank::iter()
        .filter(|rank| counts.get(rank) == Some(&times))
        .collect()
}

pub fn pair(multiset: &CardMultiset) -> Vec<Rank> {
    ranks_held_exactly(multiset, 2)
}

/// Every pair rank, provided there are at least two of them. Which two of
/// three or more pairs make the best hand is not decided here.
pub fn two_pair(multiset: &CardMultiset) -> Vec<Rank> {
    let pairs = pair(multiset);
    if pairs.len() >= 2 {
        pairs
    } else {
        Vec::new()
    }
}

pub fn triple(multiset: &CardMultiset) -> Vec<Rank> {
    ranks_held_exactly(multiset, 3)
}

/// Four of a kind. The matching rank is reported once per card held, so a
/// single kare of nines comes back as four nines.
pub fn kare(multiset: &CardMultiset) -> Vec<Rank> {
    let flat = multiset.flat_ranks();
    let counts = flat.iter().counts();
    flat.iter()
        .filter(|rank| counts.get(rank) == Some(&4))
        .copied()
        .collect()
}

pub fn full(multiset: &CardMultiset) -> FullHouseParts {
    FullHouseParts {
        triples: triple(multiset),
        pairs: pair(multiset),
    }
}

/// Every straight window in which each rank is held in at least one suit.
pub fn straights(multiset: &CardMultiset) -> Vec<Window> {
    straight_windows()
        .iter()
        .filter(|window| window.iter().all(|rank| multiset.count(*rank) > 0))
        .copied()
        .collect()
}

/// For every suit holding at least five ranks, the five highest of them in
/// ascending order.
pub fn flush(multiset: &CardMultiset) -> BTreeMap<Suit, Window> {
    multiset
        .by_suit()
        .into_iter()
        .filter(|(_, ranks)| ranks.len() >= FLUSH_LEN)
        .filter_map(|(suit, ranks)| {
            let top = Window::try_from(&ranks[ranks.len() - FLUSH_LEN..]).ok()?;
            Some((suit, top))
        })
        .collect()
}

/// Every straight window fully held in a single suit, once per such suit.
pub fn straight_flush(multiset: &CardMultiset) -> Vec<Window> {
    let straights = straights(multiset);
    Suit::iter()
        .flat_map(|suit| {
            straights
                .iter()
                .filter(move |window| {
                    window
                        .iter()
                        .all(|rank| multiset.suits(*rank).contains(&suit))
                })
                .copied()
        })
        .collect()
}

pub fn royal_flush(multiset: &CardMultiset) -> bool {
    straight_flush(multiset).contains(&ROYAL_WINDOW)
}

fn singles(ranks: Vec<Rank>) -> Vec<Combination> {
    ranks
        .into_iter()
        .map(|rank| Combination::Set(vec![rank]))
        .collect()
}

fn grouped(ranks: Vec<Rank>) -> Vec<Combination> {
    if ranks.is_empty() {
        Vec::new()
    } else {
        vec![Combination::Set(ranks)]
    }
}

/// Run the detector of `category` and wrap its findings as combinations.
pub fn detect(category: Category, multiset: &CardMultiset) -> Vec<Combination> {
    match category {
        Category::Pair => singles(pair(multiset)),
        Category::TwoPair => grouped(two_pair(multiset)),
        Category::ThreeOfAKind => singles(triple(multiset)),
        Category::FourOfAKind => grouped(kare(multiset)),
        Category::FullHouse => {
            let parts = full(multiset);
            if parts.triples.is_empty() && parts.pairs.is_empty() {
                Vec::new()
            } else {
                vec![Combination::FullHouse(parts)]
            }
        }
        Category::Flush => flush(multiset)
            .into_iter()
            .map(|(suit, ranks)| Combination::Flush { suit, ranks })
            .collect(),
        Category::Straight => straights(multiset)
            .into_iter()
            .map(Combination::Window)
            .collect(),
        Category::StraightFlush => straight_flush(multiset)
            .into_iter()
            .map(Combination::Window)
            .collect(),
        Category::RoyalFlush => {
            if royal_flush(multiset) {
                vec![Combination::Window(ROYAL_WINDOW)]
            } else {
                Vec::new()
            }
        }
    }
}
