//! Game engine and round orchestration.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, RedrawError, ScoreError};
use crate::options::GameOptions;
use crate::player::Player;
use crate::score::HandCategory;

/// A draw-poker game engine that manages the deck, the roster, and hand
/// scoring.
///
/// The game owns one deck and a fixed roster of players created at
/// construction. The deck starts in canonical order; call [`Game::shuffle`]
/// before dealing for a random game. Cards dealt to players are never
/// returned to the deck.
#[derive(Debug)]
pub struct Game {
    /// Cards remaining to be dealt.
    pub deck: Deck,
    /// Players seated at the table, in id order.
    pub players: Vec<Player>,
    /// Game options.
    pub options: GameOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use chicago_poker::{Game, GameOptions};
    ///
    /// let options = GameOptions::default().with_players(4);
    /// let game = Game::new(options, 42);
    /// assert_eq!(game.player_count(), 4);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let players = (0..options.players).map(Player::new).collect();

        Self {
            deck: Deck::new(),
            players,
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffles the remaining deck.
    pub fn shuffle(&mut self) {
        self.deck.shuffle(&mut self.rng);
    }

    /// Deals every player a full hand.
    ///
    /// Cards go out one per player per round in ascending id order, for
    /// [`GameOptions::hand_size`] rounds. On success the first player
    /// receives the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if any player already holds cards, or if the deck
    /// cannot cover a full hand for every player.
    pub fn initial_deal(&mut self) -> Result<(), DealError> {
        if self.players.iter().any(|player| !player.hand.is_empty()) {
            return Err(DealError::AlreadyDealt);
        }

        let needed = self.options.hand_size * self.players.len();
        if self.deck.len() < needed {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..self.options.hand_size {
            for player in &mut self.players {
                let card = self.deck.deal().map_err(|_| DealError::NotEnoughCards)?;
                player.hand.push(card);
            }
        }

        if let Some(first) = self.players.first_mut() {
            first.is_player_turn = true;
        }

        Ok(())
    }

    /// Replaces the given cards in a player's hand with freshly dealt ones.
    ///
    /// Each requested card is matched to a distinct hand position by value
    /// equality, and every request is validated before any card is dealt: a
    /// failed redraw leaves the hand untouched. Returns the replacement
    /// cards in request order.
    ///
    /// # Errors
    ///
    /// Returns an error if the player id is outside the roster, a requested
    /// card is not in the player's hand (or is requested more often than the
    /// hand holds it), or the deck cannot cover every replacement.
    pub fn redraw(&mut self, player_id: usize, cards: &[Card]) -> Result<Vec<Card>, RedrawError> {
        let player = self
            .players
            .get_mut(player_id)
            .ok_or(RedrawError::PlayerNotFound)?;

        let mut positions: Vec<usize> = Vec::with_capacity(cards.len());
        for card in cards {
            let matched = player
                .hand
                .cards()
                .iter()
                .enumerate()
                .find_map(|(index, held)| {
                    (held == card && !positions.contains(&index)).then_some(index)
                })
                .ok_or(RedrawError::CardNotFound)?;
            positions.push(matched);
        }

        if self.deck.len() < positions.len() {
            return Err(RedrawError::NotEnoughCards);
        }

        let mut dealt = Vec::with_capacity(positions.len());
        for position in positions {
            let card = self.deck.deal().map_err(|_| RedrawError::NotEnoughCards)?;
            player.hand.replace(position, card);
            dealt.push(card);
        }

        Ok(dealt)
    }

    /// Scores a player's hand and records the result.
    ///
    /// The hand is classified on a rank-sorted copy, so the player's card
    /// order is preserved. The category score is written to
    /// [`Player::score`] and returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the player id is outside the roster.
    pub fn score_hand(&mut self, player_id: usize) -> Result<u32, ScoreError> {
        let player = self
            .players
            .get_mut(player_id)
            .ok_or(ScoreError::PlayerNotFound)?;

        let sorted = player.hand.sorted_by_rank();
        let score = HandCategory::classify(&sorted).score();
        player.score = score;

        Ok(score)
    }

    /// Returns the id of the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<usize> {
        self.players.iter().position(|player| player.is_player_turn)
    }

    /// Passes the turn to the next player in id order, wrapping around.
    ///
    /// If no player holds the turn the first player receives it. Returns
    /// the id of the player now on turn, or `None` for an empty roster.
    pub fn advance_turn(&mut self) -> Option<usize> {
        if self.players.is_empty() {
            return None;
        }

        let next = match self.current_player() {
            Some(current) => {
                self.players[current].is_player_turn = false;
                (current + 1) % self.players.len()
            }
            None => 0,
        };
        self.players[next].is_player_turn = true;

        Some(next)
    }

    /// Returns the player with the given id.
    #[must_use]
    pub fn player(&self, player_id: usize) -> Option<&Player> {
        self.players.get(player_id)
    }

    /// Returns the number of players seated at the table.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
