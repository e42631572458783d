pub use crate::poker::cards::{Card, CardCollection, CardView, Rank, Suit};
pub use crate::poker::contestant::Contestant;
pub use crate::poker::dealer::{deal_round, Dealer, Deck};
pub use crate::poker::detectors::{detect, Category, Combination, FullHouseParts, Stage, Window};
pub use crate::poker::error::{Error, Result};
pub use crate::poker::multiset::CardMultiset;
pub use crate::poker::resolver::{best_combination, best_hand, resolve, resolve_category, Outcome};
