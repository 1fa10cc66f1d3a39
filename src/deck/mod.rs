//! Deck construction and draw-pool management.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card data (identity = canonical name)
//! - `Arcana`, `Suit`, `Rank`: Deck structure enums
//! - `DeckManager`: Reference deck + mutable draw pool (shuffle/draw/reset)
//! - `DeckPolicy`: Randomization policy flags
//! - `DeckRng`: Deterministic, seedable shuffle RNG

pub mod card;
pub mod manager;
pub mod rng;

pub use card::{standard_deck, Arcana, Card, Rank, Suit, DECK_SIZE, MAJOR_NAMES};
pub use manager::{DeckManager, DeckPolicy, DeckStatus};
pub use rng::DeckRng;
