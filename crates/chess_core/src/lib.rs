//! Chess rules core.
//!
//! Positions are plain values: legality probes and engines clone them and
//! mutate the copy, so nothing here needs shared ownership or locking.
//!
//! The pieces fit together as:
//! - [`Position::generate_moves`] produces a piece's moves, optionally
//!   filtered to those that keep its own king safe.
//! - [`Position::apply`] / [`Position::undo`] play a move and take it back
//!   using the list of squares it changed.
//! - [`Position::moves_left`] and [`Position::king_checked`] classify
//!   checkmate and stalemate.
//! - [`Game`] wraps a position with turn order, a move log and promotion.

pub mod attacks;
pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod terminal;
pub mod types;

pub use attacks::*;
pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use terminal::*;
pub use types::*;
