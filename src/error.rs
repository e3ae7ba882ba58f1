//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Hands have already been dealt.
    #[error("hands have already been dealt")]
    AlreadyDealt,
    /// Not enough cards in the deck for every player's hand.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RedrawError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// A requested card is not in the player's hand.
    #[error("card not found in the player's hand")]
    CardNotFound,
    /// Not enough cards in the deck to replace every requested card.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when scoring a player's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
}
