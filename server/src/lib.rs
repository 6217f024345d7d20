//! Move-decision service for a turn-based grid battle game.
//!
//! The game host posts the full board every turn to `/check`; [`game::turn`]
//! answers with one greedy batch of moves and attacks for the friendly side.

pub mod config;
pub mod error;
pub mod game;
pub mod http;
pub mod metrics;
pub mod protocol;
