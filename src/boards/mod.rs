//! Contains implementations of the `Board` trait.

/// A `Board` implementation for the game of Tic-Tac-Toe.
pub mod tic_tac_toe;
