use lazy_static::lazy_static;
use rand::{
    prelude::{Rng, SeedableRng, SliceRandom},
    rngs::SmallRng,
};
use strum::IntoEnumIterator;

use super::cards::{Card, CardView, Rank, Suit};
use super::contestant::Contestant;
use super::multiset::CardMultiset;
use crate::poker::error::{Error, Result};

/// Anything that hands out cards. The evaluation core never draws by itself;
/// it only sees the multisets a dealer produced.
pub trait Dealer {
    /// Take `n` cards. Fails without drawing anything when fewer than `n`
    /// remain.
    fn draw(&mut self, n: usize) -> Result<CardMultiset>;

    fn remaining(&self) -> usize;
}

#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

lazy_static! {
    static ref BASE_DECK_CARDS: Vec<Card> = {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card { rank, suit });
            }
        }
        cards
    };
}

impl Deck {
    pub fn base_deck() -> Self {
        Self {
            cards: BASE_DECK_CARDS.clone(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
    }

    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut deck = Self::base_deck();
        deck.shuffle(rng);
        deck
    }

    /// A shuffled deck whose order depends only on `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::shuffled(&mut SmallRng::seed_from_u64(seed))
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Dealer for Deck {
    fn draw(&mut self, n: usize) -> Result<CardMultiset> {
        let remaining = self.count();
        if n > remaining {
            return Err(Error::DeckExhausted {
                requested: n,
                remaining,
            });
        }

        let drawn = self.cards.split_off(remaining - n);
        tracing::trace!(drawn = n, remaining = self.count(), "drew cards");
        Ok(drawn.into_iter().collect())
    }

    fn remaining(&self) -> usize {
        self.count()
    }
}

impl CardView for Deck {
    fn view(&self) -> &[Card] {
        &self.cards
    }
}

/// Deal one round: the shared table cards first, then `hole` private cards
/// for each id in order. Every contestant sees the same table.
pub fn deal_round<D, Id, I>(
    dealer: &mut D,
    ids: I,
    hole: usize,
    table: usize,
) -> Result<Vec<Contestant<Id>>>
where
    D: Dealer + ?Sized,
    Id: Clone,
    I: IntoIterator<Item = Id>,
{
    let shared = dealer.draw(table)?;
    ids.into_iter()
        .map(|id| {
            let private = dealer.draw(hole)?;
            Contestant::new(id)
                .with_table_cards(&shared)?
                .with_additional_cards(&private)
        })
        .collect()
}
