use thiserror::Error;

use super::detectors::Category;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("operand is not a well-formed card multiset")]
    InvalidOperand,
    #[error("{0} is not a card rank (expected 2..=14)")]
    InvalidRank(u8),
    #[error("cannot draw {requested} cards, only {remaining} left in the deck")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("{0} has no resolver stage yet")]
    PendingCategory(Category),
}

pub type Result<T> = std::result::Result<T, Error>;
