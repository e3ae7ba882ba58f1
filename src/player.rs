//! Player state.

use crate::hand::Hand;

/// A player seated at the table.
///
/// Players are created once at game start with an empty hand and live for
/// the whole session.
#[derive(Debug, Clone)]
pub struct Player {
    /// Unique id, assigned in seating order at construction.
    id: usize,
    /// Cards held by the player, in deal order.
    pub hand: Hand,
    /// Score of the last scored hand. Written by [`crate::Game::score_hand`].
    pub score: u32,
    /// Whether it is this player's turn.
    pub is_player_turn: bool,
}

impl Player {
    /// Creates a new player with an empty hand.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self {
            id,
            hand: Hand::new(),
            score: 0,
            is_player_turn: false,
        }
    }

    /// Returns this player's id.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }
}
