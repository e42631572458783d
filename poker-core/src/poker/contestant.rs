use super::multiset::CardMultiset;
use crate::poker::error::Result;

/// A participant and the cards it can see. Updates never happen in place:
/// each one hands back a new contestant with the visible cards recomputed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contestant<Id> {
    id: Id,
    private: CardMultiset,
    table: CardMultiset,
    visible: CardMultiset,
}

impl<Id: Clone> Contestant<Id> {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            private: CardMultiset::empty(),
            table: CardMultiset::empty(),
            visible: CardMultiset::empty(),
        }
    }

    /// A contestant whose whole visible set is `cards`, all of them private.
    ///
    /// ```
    /// # use poker_core::prelude::{CardMultiset, Contestant, Rank, Suit};
    /// let cards = CardMultiset::from_cards([(Rank::Ace, [Suit::Spades])]);
    /// let alice = Contestant::holding("alice", cards.clone());
    /// assert_eq!(alice.cards(), &cards);
    /// assert!(alice.table().is_empty());
    /// ```
    pub fn holding(id: Id, cards: CardMultiset) -> Self {
        Self {
            id,
            private: cards.clone(),
            table: CardMultiset::empty(),
            visible: cards,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn private(&self) -> &CardMultiset {
        &self.private
    }

    pub fn table(&self) -> &CardMultiset {
        &self.table
    }

    /// Private and table cards together.
    pub fn cards(&self) -> &CardMultiset {
        &self.visible
    }

    pub fn with_additional_cards(&self, cards: &CardMultiset) -> Result<Self> {
        self.rebuilt(self.private.combine(cards)?, self.table.clone())
    }

    pub fn with_table_cards(&self, cards: &CardMultiset) -> Result<Self> {
        self.rebuilt(self.private.clone(), self.table.combine(cards)?)
    }

    pub fn without_private_cards(&self) -> Result<Self> {
        self.rebuilt(CardMultiset::empty(), self.table.clone())
    }

    pub fn without_table_cards(&self) -> Result<Self> {
        self.rebuilt(self.private.clone(), CardMultiset::empty())
    }

    fn rebuilt(&self, private: CardMultiset, table: CardMultiset) -> Result<Self> {
        let visible = private.combine(&table)?;
        Ok(Self {
            id: self.id.clone(),
            private,
            table,
            visible,
        })
    }
}
