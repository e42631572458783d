use std::fmt;

use itertools::Itertools;

use super::contestant::Contestant;
use super::detectors::{detect, Category, Combination, Stage};
use super::multiset::CardMultiset;
use super::selector;
use crate::poker::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<Id> {
    Decided { category: Category, winners: Vec<Id> },
    /// Nobody holds any category the resolver consults.
    Undetermined,
}

impl<Id> Outcome<Id> {
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Decided { category, .. } => Some(*category),
            Self::Undetermined => None,
        }
    }

    pub fn winners(&self) -> &[Id] {
        match self {
            Self::Decided { winners, .. } => winners,
            Self::Undetermined => &[],
        }
    }
}

impl<Id: fmt::Display> fmt::Display for Outcome<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decided { category, winners } => {
                write!(f, "({category}, [{}])", winners.iter().join(", "))
            }
            Self::Undetermined => write!(f, "(no winner determined, [])"),
        }
    }
}

/// The best combination `cards` realize for `category`, if any.
pub fn best_combination(category: Category, cards: &CardMultiset) -> Option<Combination> {
    selector::best(detect(category, cards))
}

/// The highest category the resolver consults that `cards` hold, together
/// with its best combination.
pub fn best_hand(cards: &CardMultiset) -> Option<(Category, Combination)> {
    wired_categories().find_map(|category| {
        best_combination(category, cards).map(|combination| (category, combination))
    })
}

fn wired_categories() -> impl Iterator<Item = Category> {
    Category::by_precedence().filter(|category| category.stage() == Stage::Wired)
}

fn beats_or_ties(category: Category, own: &Combination, maximum: &Combination) -> bool {
    match category {
        Category::Flush => own.top() == maximum.top(),
        _ => selector::covers(own, maximum),
    }
}

fn resolve_stage<Id: Clone>(category: Category, contestants: &[Contestant<Id>]) -> Option<Vec<Id>> {
    let bests = contestants
        .iter()
        .map(|contestant| (contestant.id(), best_combination(category, contestant.cards())))
        .collect_vec();

    let maximum = selector::best(bests.iter().filter_map(|(_, best)| best.clone()))?;

    let winners = bests
        .iter()
        .filter(|(_, best)| {
            best.as_ref()
                .is_some_and(|own| beats_or_ties(category, own, &maximum))
        })
        .map(|(id, _)| (*id).clone())
        .collect();

    Some(winners)
}

/// Resolve a single category. `Ok(None)` means nobody holds it; categories
/// with no resolver stage yet are refused.
pub fn resolve_category<Id: Clone>(
    category: Category,
    contestants: &[Contestant<Id>],
) -> Result<Option<Vec<Id>>> {
    match category.stage() {
        Stage::Wired => Ok(resolve_stage(category, contestants)),
        Stage::Pending => Err(Error::PendingCategory(category)),
    }
}

/// Walk the wired categories from the highest down and stop at the first one
/// anybody holds. Every contestant tied for that category's best wins.
pub fn resolve<Id: Clone + fmt::Debug>(contestants: &[Contestant<Id>]) -> Outcome<Id> {
    for category in wired_categories() {
        match resolve_stage(category, contestants) {
            Some(winners) => {
                tracing::info!(%category, ?winners, "resolved winners");
                return Outcome::Decided { category, winners };
            }
            None => tracing::debug!(%category, "nobody holds category"),
        }
    }

    tracing::info!(contestants = contestants.len(), "no winner determined");
    Outcome::Undetermined
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::poker::cards::{CardCollection, Rank};
    use crate::poker::detectors::ROYAL_WINDOW;

    fn player(id: u32, idents: &str) -> Contestant<u32> {
        Contestant::holding(id, CardMultiset::from(CardCollection::from_idents(idents)))
    }

    fn expect(players: &[Contestant<u32>], category: Category, winners: &[u32]) {
        assert_eq!(
            resolve(players),
            Outcome::Decided {
                category,
                winners: winners.to_vec()
            }
        );
    }

    #[test]
    fn royal_flush_beats_pair_test() {
        let players = [player(1, "TH JH QH KH AH 2C 7D"), player(2, "9S 9D 2S 4C 6H")];
        expect(&players, Category::RoyalFlush, &[1]);
    }

    #[test]
    fn royal_flush_tie_test() {
        let players = [player(1, "TH JH QH KH AH"), player(2, "TS JS QS KS AS")];
        expect(&players, Category::RoyalFlush, &[1, 2]);
    }

    #[test]
    fn higher_straight_flush_wins_test() {
        let players = [player(1, "4C 5C 6C 7C 8C"), player(2, "6D 7D 8D 9D TD")];
        expect(&players, Category::StraightFlush, &[2]);
    }

    #[test]
    fn straight_flush_uses_best_window_test() {
        // player one holds two straight flushes, the higher one ties player two
        let players = [
            player(1, "5S 6S 7S 8S 9S TS"),
            player(2, "6H 7H 8H 9H TH"),
        ];
        expect(&players, Category::StraightFlush, &[1, 2]);
    }

    #[test]
    fn kare_test() {
        let players = [
            player(1, "9S 9D 9C 9H 2S"),
            player(2, "KS KD KC KH"),
            player(3, "AS AD AC QH QS"),
        ];
        expect(&players, Category::FourOfAKind, &[2]);
    }

    #[test]
    fn double_kare_holder_wins_test() {
        // Only an untrusted multiset can hold two kares. Its combination keeps
        // both ranks, so it outranks a lone kare of its higher rank.
        let players = [
            player(1, "9S 9D 9C 9H KS KD KC KH"),
            player(2, "KS KD KC KH"),
        ];
        expect(&players, Category::FourOfAKind, &[1]);
    }

    #[test]
    fn kare_beats_flush_test() {
        let players = [player(1, "2S 2D 2C 2H"), player(2, "3S 6S 9S QS AS")];
        expect(&players, Category::FourOfAKind, &[1]);
    }

    #[test]
    fn flush_compares_top_rank_only_test() {
        let players = [
            player(1, "2S 4S 6S 8S AS"),
            player(2, "3H 5H 7H KH AH"),
            player(3, "3C 5C 7C 9C KC"),
        ];
        expect(&players, Category::Flush, &[1, 2]);
    }

    #[test]
    fn flush_beats_straight_test() {
        let players = [player(1, "2S 4S 6S 8S TS"), player(2, "TH JD QC KS AH")];
        expect(&players, Category::Flush, &[1]);
    }

    #[test]
    fn straight_tie_test() {
        let players = [player(1, "5S 6D 7S 8C 9H"), player(2, "5H 6C 7D 8S 9D 2C")];
        expect(&players, Category::Straight, &[1, 2]);
    }

    #[test]
    fn higher_straight_wins_test() {
        let players = [
            player(1, "5S 6D 7S 8C 9H TH"),
            player(2, "5H 6C 7D 8S 9D"),
            player(3, "2H 3C 4D 5S 6D"),
        ];
        expect(&players, Category::Straight, &[1]);
    }

    #[test]
    fn ace_led_straight_beats_king_high_test() {
        let players = [player(1, "AH 2C 3D 4S 5D"), player(2, "9H TC JD QS KD")];
        expect(&players, Category::Straight, &[1]);
    }

    #[test]
    fn broadway_beats_ace_led_straight_test() {
        let players = [player(1, "AH 2C 3D 4S 5D"), player(2, "TH JC QD KS AD")];
        expect(&players, Category::Straight, &[2]);
    }

    #[test]
    fn only_lower_categories_test() {
        let players = [player(1, "9S 9D 9C KH KS"), player(2, "AS AD 2C 2H")];
        assert_eq!(resolve(&players), Outcome::Undetermined);
    }

    #[test]
    fn empty_contestants_test() {
        let players = [
            Contestant::holding(1, CardMultiset::empty()),
            Contestant::holding(2, CardMultiset::empty()),
        ];
        let outcome = resolve(&players);
        assert_eq!(outcome, Outcome::Undetermined);
        assert_eq!(outcome.category(), None);
        assert!(outcome.winners().is_empty());
        assert_eq!(outcome.to_string(), "(no winner determined, [])");

        assert_eq!(resolve::<u32>(&[]), Outcome::Undetermined);
    }

    #[test]
    fn pending_categories_test() {
        let players = [player(1, "9S 9D 9C KH KS")];
        for category in Category::iter() {
            let resolved = resolve_category(category, &players);
            match category.stage() {
                Stage::Wired => assert_eq!(resolved, Ok(None), "{category}"),
                Stage::Pending => {
                    assert_eq!(resolved, Err(Error::PendingCategory(category)));
                }
            }
        }
    }

    #[test]
    fn resolve_category_test() {
        let players = [player(1, "2S 4S 6S 8S TS"), player(2, "3S 4S 5S 6S 7S")];
        assert_eq!(
            resolve_category(Category::Flush, &players),
            Ok(Some(vec![1]))
        );
        assert_eq!(
            resolve_category(Category::StraightFlush, &players),
            Ok(Some(vec![2]))
        );
    }

    #[test]
    fn best_hand_test() {
        let cards = CardMultiset::from(CardCollection::from_idents("TH JH QH KH AH 9H"));
        assert_eq!(
            best_hand(&cards),
            Some((Category::RoyalFlush, Combination::Window(ROYAL_WINDOW)))
        );

        let cards = CardMultiset::from(CardCollection::from_idents("2S 4S 6S 8S TS AS"));
        assert_eq!(
            best_hand(&cards),
            Some((
                Category::Flush,
                Combination::Flush {
                    suit: crate::poker::cards::Suit::Spades,
                    ranks: [Rank::Four, Rank::Six, Rank::Eight, Rank::Ten, Rank::Ace],
                }
            ))
        );

        assert_eq!(best_hand(&CardMultiset::empty()), None);
    }

    #[test]
    fn outcome_display_test() {
        let players = [player(7, "4C 5C 6C 7C 8C"), player(9, "4D 5D 6D 7D 8D")];
        assert_eq!(resolve(&players).to_string(), "(Straight flush, [7, 9])");
    }
}
