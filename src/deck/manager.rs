//! Deck manager - owns the reference deck and the draw pool.
//!
//! The reference deck is built once and its composition never changes; the
//! draw pool is a copy of it that shrinks on draw and is replaced wholesale
//! on shuffle or reset. The pool is treated as a stack: a draw pops the
//! last card, like taking the top card of a face-down pile.

use serde::{Deserialize, Serialize};

use super::card::{standard_deck, Card};
use super::rng::DeckRng;

/// Policy knobs for deck randomization.
///
/// Defaults: ordered pool at startup, `reset` restores reference order
/// without re-randomizing. Both behaviors vary across dashboard
/// deployments, so they are flags rather than hardcoded choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckPolicy {
    /// Randomize the deck order once at construction time.
    pub shuffle_on_build: bool,

    /// `reset` re-randomizes the restored pool instead of restoring
    /// reference order.
    pub reset_reshuffles: bool,
}

/// Snapshot of pool and deck sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStatus {
    /// Cards still available to draw.
    pub cards_remaining: usize,
    /// Size of the full reference deck.
    pub total_cards: usize,
}

/// Owns the reference deck and the mutable draw pool.
///
/// Not internally synchronized. Callers serving concurrent requests must
/// wrap the manager in a mutex: `draw` pops from shared state, and racing
/// it against `shuffle`/`reset` would lose or duplicate draws.
///
/// ## Example
///
/// ```
/// use tarot_deck::deck::{DeckManager, DeckPolicy, DeckRng};
///
/// let mut deck = DeckManager::new(DeckPolicy::default(), DeckRng::new(42));
/// assert_eq!(deck.shuffle(), 78);
///
/// let card = deck.draw().unwrap();
/// assert_eq!(deck.status().cards_remaining, 77);
///
/// assert_eq!(deck.reset(), 78);
/// ```
#[derive(Clone, Debug)]
pub struct DeckManager {
    deck: Vec<Card>,
    pool: Vec<Card>,
    rng: DeckRng,
    policy: DeckPolicy,
}

impl DeckManager {
    /// Build the standard 78-card deck with the given policy and RNG.
    #[must_use]
    pub fn new(policy: DeckPolicy, mut rng: DeckRng) -> Self {
        let mut deck = standard_deck();
        if policy.shuffle_on_build {
            rng.shuffle(&mut deck);
        }
        let pool = deck.clone();
        Self { deck, pool, rng, policy }
    }

    /// Default policy, entropy-seeded RNG.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(DeckPolicy::default(), DeckRng::from_entropy())
    }

    /// Replace the pool with a freshly permuted copy of the full deck.
    ///
    /// Shuffle implies reset-to-full: previously drawn cards are forgotten.
    /// Returns the new pool size (always the full deck size).
    pub fn shuffle(&mut self) -> usize {
        self.pool = self.deck.clone();
        self.rng.shuffle(&mut self.pool);
        self.pool.len()
    }

    /// Remove and return the top card of the pool.
    ///
    /// Returns `None` when the pool is empty. The same card cannot come up
    /// again until a shuffle or reset replenishes the pool.
    pub fn draw(&mut self) -> Option<Card> {
        self.pool.pop()
    }

    /// Restore the pool to the full deck.
    ///
    /// Re-randomizes the restored pool when the policy asks for it.
    /// Returns the new pool size.
    pub fn reset(&mut self) -> usize {
        self.pool = self.deck.clone();
        if self.policy.reset_reshuffles {
            self.rng.shuffle(&mut self.pool);
        }
        self.pool.len()
    }

    /// Current pool size and total deck size.
    #[must_use]
    pub fn status(&self) -> DeckStatus {
        DeckStatus {
            cards_remaining: self.pool.len(),
            total_cards: self.deck.len(),
        }
    }

    /// The full reference deck.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Cards still available to draw, bottom to top.
    #[must_use]
    pub fn pool(&self) -> &[Card] {
        &self.pool
    }
}
