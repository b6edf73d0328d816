//! Tic-tac-toe against a computer opponent that never loses.
//!
//! The crate holds the game core: the 3×3 board with its win/tie detection and an exhaustive
//! minimax engine that plays every line out to the end before choosing a move. Rendering and
//! input handling are left to the caller, which talks to the core through the [`game`] module.
//!
//! # Example
//!
//! ```rust
//! use minimax_ttt::game::{apply_computer_move, apply_human_move, new_game, outcome};
//! use minimax_ttt::boards::tic_tac_toe::Outcome;
//!
//! // Start a new game, the human plays X in the center
//! let mut board = new_game();
//! assert_eq!(apply_human_move(&mut board, 1, 1), Ok(Outcome::InProgress));
//!
//! // The computer answers with O
//! let (row, col, status) = apply_computer_move(&mut board).unwrap();
//! println!("The computer played ({row}, {col})");
//!
//! assert_eq!(status, outcome(&board));
//! ```
//!
//! The engine works with any game implementing [`board::Board`]:
//!
//! ```rust
//! use minimax_ttt::boards::tic_tac_toe::{Mark, TicTacToeBoard};
//! use minimax_ttt::minimax::{Minimax, TieBreak};
//! use minimax_ttt::random::CustomNumberGenerator;
//!
//! let board = TicTacToeBoard::new();
//! let mut engine = Minimax::<TicTacToeBoard, CustomNumberGenerator>::builder(Mark::X)
//!     .with_tie_break(TieBreak::Random)
//!     .with_random_generator(CustomNumberGenerator::default())
//!     .build();
//!
//! let report = engine.analyze(&board).unwrap();
//! assert_eq!(report.best_score, 0);
//! ```

/// Contains the `Board` trait and the `GameOutcome` enum that define the interface for a game.
pub mod board;
/// Contains implementations of the `Board` trait.
pub mod boards;
/// Error types for rejected moves and misuse of the engine.
pub mod error;
/// The in-process API a front end calls.
pub mod game;
/// The exhaustive minimax engine.
pub mod minimax;
/// Contains traits and implementations for random number generation.
pub mod random;
/// Results of a single search.
pub mod search_report;

pub use error::{Error, IllegalMove, NoLegalMove};
