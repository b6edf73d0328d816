//! The call contract a front end uses to run a human-versus-computer game.
//!
//! The human always plays `X` and moves first; the computer plays `O` and answers with the
//! minimax engine. A front end forwards cell clicks to [`apply_human_move`] (or [`play_turn`],
//! which also lets the computer answer) and renders [`outcome`].

use crate::boards::tic_tac_toe::{Mark, Outcome, Position, TicTacToeBoard};
use crate::error::{IllegalMove, NoLegalMove};
use crate::minimax::Minimax;
use crate::random::StandardRandomGenerator;
use tracing::{debug, instrument, warn};

/// Mark played by the human.
pub const HUMAN: Mark = Mark::X;
/// Mark played by the computer.
pub const COMPUTER: Mark = Mark::O;

/// What happened during one [`play_turn`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Outcome right after the human move.
    pub human_outcome: Outcome,
    /// The cell the computer answered with, if the game was still going.
    pub computer_move: Option<Position>,
    /// Outcome once the turn is over.
    pub outcome: Outcome,
}

/// Starts a fresh game: empty board, `X` to move.
pub fn new_game() -> TicTacToeBoard {
    TicTacToeBoard::new()
}

/// Plays the human's `X` at `(row, col)` and returns the resulting outcome.
#[instrument(skip(board))]
pub fn apply_human_move(
    board: &mut TicTacToeBoard,
    row: usize,
    col: usize,
) -> Result<Outcome, IllegalMove> {
    if let Err(err) = board.place(row, col, HUMAN) {
        warn!(%err, "human move rejected");
        return Err(err);
    }
    Ok(board.outcome())
}

/// Lets the engine play `O` and returns the chosen cell with the resulting outcome.
///
/// Only valid while the game is in progress and it is `O`'s turn.
#[instrument(skip(board))]
pub fn apply_computer_move(
    board: &mut TicTacToeBoard,
) -> Result<(usize, usize, Outcome), NoLegalMove> {
    let mut engine: Minimax<TicTacToeBoard, StandardRandomGenerator> = Minimax::for_side(COMPUTER);
    let report = engine.choose_move(board)?;
    let (row, col) = report.best_move;
    let outcome = board.outcome();
    debug!(row, col, score = report.best_score, %outcome, "computer moved");
    Ok((row, col, outcome))
}

/// Current status of the game, for rendering.
pub fn outcome(board: &TicTacToeBoard) -> Outcome {
    board.outcome()
}

/// Handles one click: the human move, then the computer's answer if the game goes on.
pub fn play_turn(
    board: &mut TicTacToeBoard,
    row: usize,
    col: usize,
) -> Result<TurnReport, IllegalMove> {
    let human_outcome = apply_human_move(board, row, col)?;
    if human_outcome.is_terminal() {
        return Ok(TurnReport {
            human_outcome,
            computer_move: None,
            outcome: human_outcome,
        });
    }

    // The human just moved and the game is not over, so the computer always has a move.
    match apply_computer_move(board) {
        Ok((computer_row, computer_col, outcome)) => Ok(TurnReport {
            human_outcome,
            computer_move: Some((computer_row, computer_col)),
            outcome,
        }),
        Err(err) => {
            warn!(%err, "computer could not answer");
            Ok(TurnReport {
                human_outcome,
                computer_move: None,
                outcome: board.outcome(),
            })
        }
    }
}
