use std::fmt::{self, Debug, Display};

/// The central trait of the library, defining the interface for a game state.
///
/// The minimax engine only ever talks to a game through this trait. It needs to know whose turn
/// it is, whether the position is terminal, which moves are legal and how to play one of them.
pub trait Board: Clone {
    /// The type representing a move in the game. For tic-tac-toe this is a `(row, col)` pair.
    type Move: Copy + Debug + PartialEq;

    /// The type identifying a side (player) of the game.
    type Side: Copy + Debug + PartialEq;

    /// Returns the side whose turn it is to make a move.
    fn get_current_player(&self) -> Self::Side;

    /// Returns the current outcome of the game.
    ///
    /// This must be a pure function of the position; calling it twice without an intervening
    /// move yields the same value.
    fn get_outcome(&self) -> GameOutcome<Self::Side>;

    /// Returns a list of all legal moves available from the current state, in a stable order.
    ///
    /// A terminal position has no available moves.
    fn get_available_moves(&self) -> Vec<Self::Move>;

    /// Applies a given move for the current player and passes the turn.
    ///
    /// The move must be one returned by [`Board::get_available_moves`] for this very state.
    fn perform_move(&mut self, b_move: &Self::Move);
}

/// Represents the possible outcomes of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum GameOutcome<S> {
    /// The game is still ongoing.
    InProgress,
    /// The game has been won by the given side.
    Won(S),
    /// The board filled up without a winner.
    Tie,
}

impl<S> GameOutcome<S> {
    /// Returns `true` once the game is over. A front end disables its board at this point.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winning side, if any.
    pub fn winner(&self) -> Option<&S> {
        match self {
            GameOutcome::Won(side) => Some(side),
            _ => None,
        }
    }
}

impl<S: Display> Display for GameOutcome<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Won(side) => write!(f, "Player {side} wins!"),
            GameOutcome::Tie => write!(f, "It's a Tie!"),
        }
    }
}
