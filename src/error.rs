use crate::boards::tic_tac_toe::Mark;
use derive_more::{Display, From};

/// A move the board refuses. Always recoverable: the board is left untouched and the caller
/// should simply ask for another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, derive_more::Error)]
pub enum IllegalMove {
    #[display("cell ({row}, {col}) is outside the board")]
    OutOfRange { row: usize, col: usize },

    #[display("cell ({row}, {col}) is already taken")]
    Occupied { row: usize, col: usize },

    #[display("the game is already over")]
    GameOver,

    #[display("it is {expected}'s turn, not {got}'s")]
    OutOfTurn { expected: Mark, got: Mark },
}

/// The engine was asked to move in a position where it cannot.
///
/// Correct callers only invoke the engine while the game is in progress and it is the
/// engine's turn, so this signals a broken calling protocol rather than a game situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, derive_more::Error)]
pub enum NoLegalMove {
    #[display("the game is already over")]
    GameOver,

    #[display("no empty cell is left")]
    NoAvailableMoves,

    #[display("it is not the engine's turn")]
    NotEngineTurn,
}

/// Either of the two failure kinds, for callers that want a single error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, derive_more::Error, From)]
pub enum Error {
    #[display("illegal move: {_0}")]
    IllegalMove(IllegalMove),

    #[display("engine cannot move: {_0}")]
    NoLegalMove(NoLegalMove),
}
