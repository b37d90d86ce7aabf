//! A two-player cribbage engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that drives the full hand flow:
//! dealing, crib discards, the cut, the play (pegging) phase with its running
//! count and go handling, and the show, where hands and crib are counted.
//! Scoring lives in [`score`] as pure functions, so it can be used without a
//! game at all.
//!
//! # Example
//!
//! ```no_run
//! use cribbage::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let over = game.run().unwrap();
//! println!("{over}");
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
pub mod result;
pub mod round;
pub mod score;
pub mod select;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{DealError, GameError, HandError, ParseCardError, PlayerError, SelectionError};
pub use game::{Game, GameState, Progress, Seat};
pub use hand::Hand;
pub use options::GameOptions;
pub use player::{DEFAULT_WIN_THRESHOLD, Player};
pub use result::{GameOver, HandSummary, WinningScore};
pub use round::PlayRound;
pub use score::{HandScore, PlayScore, score_hand, score_play};
pub use select::{
    CardSelector, FirstSelector, InteractiveSelector, RandomSelector, SelectionContext,
    SelectionPurpose,
};
