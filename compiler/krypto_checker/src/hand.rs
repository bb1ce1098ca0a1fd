//! The standard Krypto deck and the hands that can be dealt from it.

use itertools::{repeat_n, Itertools};

/// Cards are numbered `1..=MAX_CARD_NUMBER`.
pub const MAX_CARD_NUMBER: i64 = 10;
/// Copies of each number in the deck.
pub const CARD_DUPLICATES: usize = 3;
/// Cards dealt to the player.
pub const NUM_HAND_CARDS: usize = 5;

/// Every card in the deck, sorted ascending.
pub fn standard_deck() -> Vec<i64> {
    repeat_n(1..=MAX_CARD_NUMBER, CARD_DUPLICATES)
        .flatten()
        .sorted()
        .collect()
}

/// Every distinct sorted hand of `size` cards drawn from the standard deck.
///
/// Hands are multisets: two hands holding the same numbers are the same hand,
/// no matter which copies were drawn.
pub fn distinct_hands(size: usize) -> Vec<Vec<i64>> {
    standard_deck()
        .into_iter()
        .combinations(size)
        .unique()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_has_three_of_each() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 30);
        assert_eq!(&deck[..4], &[1, 1, 1, 2]);
        assert!(deck.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn hands_are_sorted_and_respect_copies() {
        let hands = distinct_hands(NUM_HAND_CARDS);
        assert!(hands.contains(&vec![1, 1, 1, 2, 2]));
        assert!(!hands.contains(&vec![1, 1, 1, 1, 2]));
        for hand in &hands {
            assert!(hand.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn small_hand_count() {
        // pairs from 10 numbers: 45 mixed + 10 doubles
        assert_eq!(distinct_hands(2).len(), 55);
    }

    #[test]
    fn full_survey_hand_count() {
        assert_eq!(distinct_hands(NUM_HAND_CARDS).len(), 1902);
    }
}
