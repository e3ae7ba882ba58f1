//! Poker hand classification and scoring.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use core::fmt;

use crate::card::{Card, Rank};

/// Poker hand categories, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// No matches.
    HighCard,
    /// One rank appears twice.
    OnePair,
    /// Two different ranks appear twice.
    TwoPair,
    /// One rank appears three times.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Every card shares one suit.
    Flush,
    /// Three of one rank and a pair of another.
    FullHouse,
    /// One rank appears four times.
    FourOfAKind,
    /// Five consecutive ranks, all of one suit.
    StraightFlush,
    /// Ten-to-ace straight, all of one suit.
    RoyalFlush,
}

impl HandCategory {
    /// Classifies a hand of five to seven cards.
    ///
    /// The caller must pass the hand sorted ascending by rank; this is not
    /// enforced. The ace plays high only, so ace-to-five is not a straight.
    #[must_use]
    pub fn classify(cards: &[Card]) -> Self {
        let is_flush = match cards.first() {
            Some(first) => cards.iter().all(|card| card.suit == first.suit),
            None => false,
        };

        let mut counts: HashMap<Rank, u8> = HashMap::new();
        let mut rank_bits: u16 = 0;

        for card in cards {
            *counts.entry(card.rank).or_insert(0) += 1;
            rank_bits |= 1 << card.rank as usize;
        }

        // Five consecutive bits anywhere in the rank set.
        let is_straight = rank_bits
            & (rank_bits << 1)
            & (rank_bits << 2)
            & (rank_bits << 3)
            & (rank_bits << 4)
            != 0;

        let has = |n: u8| counts.values().any(|&count| count == n);

        if is_flush && is_straight && cards.first().is_some_and(|c| c.rank == Rank::Ten) {
            Self::RoyalFlush
        } else if is_flush && is_straight {
            Self::StraightFlush
        } else if has(4) {
            Self::FourOfAKind
        } else if has(3) && has(2) {
            Self::FullHouse
        } else if is_flush {
            Self::Flush
        } else if is_straight {
            Self::Straight
        } else if has(3) {
            Self::ThreeOfAKind
        } else if has(2) && counts.len() == 3 {
            Self::TwoPair
        } else if has(2) {
            Self::OnePair
        } else {
            Self::HighCard
        }
    }

    /// Returns the integer score for this category.
    ///
    /// Scores are not contiguous: a royal flush scores 52, every other
    /// category scores its strength from 0 (high card) to 8 (straight
    /// flush).
    #[must_use]
    pub const fn score(self) -> u32 {
        match self {
            Self::HighCard => 0,
            Self::OnePair => 1,
            Self::TwoPair => 2,
            Self::ThreeOfAKind => 3,
            Self::Straight => 4,
            Self::Flush => 5,
            Self::FullHouse => 6,
            Self::FourOfAKind => 7,
            Self::StraightFlush => 8,
            Self::RoyalFlush => 52,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::HighCard => "high card",
            Self::OnePair => "one pair",
            Self::TwoPair => "two pair",
            Self::ThreeOfAKind => "three of a kind",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full house",
            Self::FourOfAKind => "four of a kind",
            Self::StraightFlush => "straight flush",
            Self::RoyalFlush => "royal flush",
        };

        write!(f, "{label}")
    }
}

/// Scores a hand of five to seven cards sorted ascending by rank.
///
/// Shorthand for `HandCategory::classify(cards).score()`.
#[must_use]
pub fn score_poker_hand(cards: &[Card]) -> u32 {
    HandCategory::classify(cards).score()
}
