//! # tarot-deck
//!
//! A virtual tarot deck behind a small REST API: shuffle, draw, reset,
//! and contextual meaning lookup sourced from per-card documents.
//!
//! ## Design Principles
//!
//! 1. **Fixed composition, random order**: The 78-card deck is built once
//!    and never changes; only the draw pool's ordering is randomized, via
//!    an unbiased seedable shuffle.
//!
//! 2. **Degrade, don't fail**: Meaning documents are hand-maintained and
//!    often missing or messy. Every resolution failure becomes a
//!    human-readable string, never an error the caller has to handle.
//!
//! 3. **Narrow seams**: The resolver reads documents through a
//!    "path -> rows of cell text" trait, so the document format is a
//!    swappable detail.
//!
//! ## Modules
//!
//! - `deck`: Cards, deck construction, shuffle/draw/reset, RNG
//! - `meaning`: Document table reading and contextual meaning lookup
//! - `server`: axum HTTP façade and static file serving
//! - `config`: Runtime configuration

pub mod config;
pub mod deck;
pub mod meaning;
pub mod server;

// Re-export commonly used types
pub use crate::config::ServerConfig;

pub use crate::deck::{
    standard_deck, Arcana, Card, DeckManager, DeckPolicy, DeckRng, DeckStatus, Rank, Suit,
    DECK_SIZE, MAJOR_NAMES,
};

pub use crate::meaning::{DocxTableReader, MeaningResolver, MeaningTable, TableError, TableReader};

pub use crate::server::router;
