//! A Chicago-style draw poker game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns a 52-card [`Deck`] and a
//! fixed roster of [`Player`]s, and coordinates the initial deal, selective
//! redraws, and poker hand scoring.
//!
//! # Example
//!
//! ```
//! use chicago_poker::{Game, GameOptions};
//!
//! let options = GameOptions::default().with_players(4);
//! let mut game = Game::new(options, 42);
//! game.shuffle();
//! game.initial_deal().expect("a fresh deck covers four players");
//! assert_eq!(game.cards_remaining(), 24);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod score;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, DeckError, RedrawError, ScoreError};
pub use game::Game;
pub use hand::Hand;
pub use options::GameOptions;
pub use player::Player;
pub use score::{HandCategory, score_poker_hand};
