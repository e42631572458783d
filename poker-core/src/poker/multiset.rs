use std::collections::BTreeMap;

use itertools::Itertools;
use strum::IntoEnumIterator;

use super::cards::{Card, CardView, Rank, Suit, RANK_COUNT};
use crate::poker::error::{Error, Result};

/// The cards one contestant (or the shared table) holds, indexed by rank.
///
/// Every rank of the domain is always present as a key, possibly mapping to
/// no suits. The suits at a rank form a multiset: their order carries no
/// meaning and, for untrusted inputs, the same suit may appear twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardMultiset {
    suits: BTreeMap<Rank, Vec<Suit>>,
}

impl CardMultiset {
    pub fn empty() -> Self {
        Self {
            suits: Rank::iter().map(|rank| (rank, Vec::new())).collect(),
        }
    }

    /// Build a multiset from an explicit rank to suits mapping. Ranks that
    /// are not mentioned stay empty.
    ///
    /// ```
    /// # use poker_core::prelude::{CardMultiset, Rank, Suit};
    /// let cards = CardMultiset::from_cards([
    ///     (Rank::Ace, vec![Suit::Spades, Suit::Hearts]),
    ///     (Rank::Nine, vec![Suit::Clubs]),
    /// ]);
    /// assert_eq!(cards.count(Rank::Ace), 2);
    /// assert_eq!(cards.count(Rank::King), 0);
    /// assert_eq!(cards.len(), 3);
    /// ```
    pub fn from_cards<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Rank, S)>,
        S: IntoIterator<Item = Suit>,
    {
        let mut multiset = Self::empty();
        for (rank, suits) in pairs {
            multiset.slot_mut(rank).extend(suits);
        }
        multiset
    }

    /// Same as [`CardMultiset::from_cards`], for rank keys that come in as
    /// plain integers. Any key outside `2..=14` is rejected.
    pub fn from_raw<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, S)>,
        S: IntoIterator<Item = Suit>,
    {
        let mut multiset = Self::empty();
        for (raw, suits) in pairs {
            let rank = Rank::try_from(raw).map_err(|_| Error::InvalidOperand)?;
            multiset.slot_mut(rank).extend(suits);
        }
        Ok(multiset)
    }

    pub fn is_well_formed(&self) -> bool {
        self.suits.len() == RANK_COUNT && Rank::iter().all(|rank| self.suits.contains_key(&rank))
    }

    /// Union of two multisets. Neither operand is modified; at every rank the
    /// result holds the suits of both.
    pub fn combine(&self, other: &Self) -> Result<Self> {
        if !self.is_well_formed() || !other.is_well_formed() {
            return Err(Error::InvalidOperand);
        }

        let suits = self
            .suits
            .iter()
            .map(|(rank, suits)| {
                let merged = suits.iter().chain(other.suits(*rank)).copied().collect();
                (*rank, merged)
            })
            .collect();

        Ok(Self { suits })
    }

    pub fn suits(&self, rank: Rank) -> &[Suit] {
        self.suits.get(&rank).map_or(&[], Vec::as_slice)
    }

    pub fn count(&self, rank: Rank) -> usize {
        self.suits(rank).len()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.suits(card.rank).contains(&card.suit)
    }

    pub fn len(&self) -> usize {
        self.suits.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.suits.values().all(Vec::is_empty)
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.suits
            .iter()
            .flat_map(|(rank, suits)| suits.iter().map(move |suit| Card::new(*rank, *suit)))
    }

    /// Every suit, mapped to the ascending ranks held in that suit. Suits
    /// with no cards map to an empty list.
    pub fn by_suit(&self) -> BTreeMap<Suit, Vec<Rank>> {
        Suit::iter()
            .map(|suit| {
                let ranks = Rank::iter()
                    .filter(|rank| self.suits(*rank).contains(&suit))
                    .collect();
                (suit, ranks)
            })
            .collect()
    }

    /// Each rank repeated once per suit held at it, ascending.
    pub fn flat_ranks(&self) -> Vec<Rank> {
        self.suits
            .iter()
            .flat_map(|(rank, suits)| std::iter::repeat(*rank).take(suits.len()))
            .collect()
    }

    /// Compare two multisets ignoring the order of suits within each rank.
    pub fn same_cards(&self, other: &Self) -> bool {
        Rank::iter().all(|rank| {
            let ours = self.suits(rank).iter().sorted().collect_vec();
            let theirs = other.suits(rank).iter().sorted().collect_vec();
            ours == theirs
        })
    }

    fn slot_mut(&mut self, rank: Rank) -> &mut Vec<Suit> {
        self.suits.entry(rank).or_default()
    }
}

impl Default for CardMultiset {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: CardView> From<V> for CardMultiset {
    fn from(value: V) -> Self {
        value.view().iter().copied().collect()
    }
}

impl FromIterator<Card> for CardMultiset {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut multiset = Self::empty();
        for card in iter {
            multiset.slot_mut(card.rank).push(card.suit);
        }
        multiset
    }
}

impl std::fmt::Display for CardMultiset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.cards().join(" "))
    }
}
