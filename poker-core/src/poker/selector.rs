use std::cmp::Ordering;
use std::collections::BTreeSet;

use itertools::Itertools;

use super::cards::Rank;
use super::detectors::Combination;

/// Order rank sequences by their highest rank, then the next highest, and so
/// on. A sequence that runs out first is the lower one.
pub fn compare_by_top(a: &[Rank], b: &[Rank]) -> Ordering {
    a.iter()
        .sorted_by(|x, y| y.cmp(x))
        .cmp(b.iter().sorted_by(|x, y| y.cmp(x)))
}

/// The ordering combinations of one category are ranked by. Aces count high
/// everywhere, including in the ace-led straight window.
pub fn compare(a: &Combination, b: &Combination) -> Ordering {
    compare_by_top(&a.ranks(), &b.ranks())
}

/// The best of `candidates`, or `None` when there are none.
pub fn best<I>(candidates: I) -> Option<Combination>
where
    I: IntoIterator<Item = Combination>,
{
    candidates.into_iter().max_by(compare)
}

/// Whether `candidate` holds every rank of `maximum`.
pub fn covers(candidate: &Combination, maximum: &Combination) -> bool {
    let held: BTreeSet<Rank> = candidate.ranks().into_iter().collect();
    maximum.ranks().iter().all(|rank| held.contains(rank))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poker::cards::Rank::{
        Ace, Deuce, Five, Four, Jack, King, Nine, Queen, Six, Ten, Three,
    };
    use crate::poker::cards::Suit;
    use crate::poker::detectors::{straight_windows, ROYAL_WINDOW};

    #[test]
    fn compare_by_top_test() {
        assert_eq!(compare_by_top(&[Nine], &[Ace]), Ordering::Less);
        assert_eq!(compare_by_top(&[Ace, Deuce], &[King, Nine]), Ordering::Greater);
        assert_eq!(compare_by_top(&[Deuce, Ace], &[Ace, Deuce]), Ordering::Equal);
        assert_eq!(compare_by_top(&[Ace, Nine], &[Ace, King]), Ordering::Less);
        assert_eq!(compare_by_top(&[Ace], &[Ace, Deuce]), Ordering::Less);
    }

    #[test]
    fn best_test() {
        assert_eq!(best(Vec::new()), None);

        let pairs = vec![
            Combination::Set(vec![Nine]),
            Combination::Set(vec![Ace]),
            Combination::Set(vec![Three]),
        ];
        assert_eq!(best(pairs), Some(Combination::Set(vec![Ace])));

        let windows = straight_windows().iter().copied().map(Combination::Window);
        assert_eq!(best(windows), Some(Combination::Window(ROYAL_WINDOW)));
    }

    #[test]
    fn ace_led_window_keeps_ace_high_test() {
        let ace_led = Combination::Window([Ace, Deuce, Three, Four, Five]);
        let six_high = Combination::Window([Deuce, Three, Four, Five, Six]);
        let king_high = Combination::Window([Nine, Ten, Jack, Queen, King]);
        let broadway = Combination::Window(ROYAL_WINDOW);

        assert_eq!(compare(&ace_led, &six_high), Ordering::Greater);
        assert_eq!(compare(&ace_led, &king_high), Ordering::Greater);
        assert_eq!(compare(&ace_led, &broadway), Ordering::Less);
        assert_eq!(
            best(vec![six_high, ace_led.clone(), king_high]),
            Some(ace_led)
        );
    }

    #[test]
    fn flush_best_test() {
        let low = Combination::Flush {
            suit: Suit::Spades,
            ranks: [Deuce, Three, Four, Five, King],
        };
        let high = Combination::Flush {
            suit: Suit::Hearts,
            ranks: [Deuce, Three, Four, Six, King],
        };
        assert_eq!(best(vec![high.clone(), low]), Some(high));
    }

    #[test]
    fn covers_test() {
        let royal = Combination::Window(ROYAL_WINDOW);
        assert!(covers(&royal, &royal));
        assert!(covers(
            &Combination::Set(vec![Nine, Nine, Nine, Nine]),
            &Combination::Set(vec![Nine])
        ));
        assert!(!covers(
            &Combination::Set(vec![Nine]),
            &Combination::Set(vec![Ace])
        ));
    }
}
