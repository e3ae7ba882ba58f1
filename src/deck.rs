//! The 52-card deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards.
///
/// A fresh deck holds exactly one card per (rank, suit) pair in canonical
/// order: suit-major in [`Suit::suits`] order, rank-ascending within each
/// suit. Construction is reproducible; call [`Deck::shuffle`] to randomize.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a fresh deck.
    pub const SIZE: usize = 52;

    /// Creates a deck in canonical order.
    #[must_use]
    pub fn new() -> Self {
        let cards = Suit::suits()
            .flat_map(|suit| Rank::ranks().map(move |rank| Card::new(rank, suit)))
            .collect();

        Self { cards }
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }

        Ok(self.cards.remove(0))
    }

    /// Randomly permutes the remaining cards in place.
    ///
    /// Already-dealt cards are unaffected; nothing is replenished.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns the remaining cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a deck from an explicit card sequence; the first element is dealt
/// first.
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
