use crate::board::{Board, GameOutcome};
use crate::error::IllegalMove;
use std::fmt::{self, Display};

/// Number of rows and columns of the board.
pub const SIZE: usize = 3;

/// The eight winning lines, checked in this order: rows, columns, then the two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The symbol a player puts on the board. `X` always moves first.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the mark of the other player.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A single square of the grid.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

/// Outcome of a tic-tac-toe position.
pub type Outcome = GameOutcome<Mark>;

/// A move is the `(row, col)` of the cell to mark.
pub type Position = (usize, usize);

/// An implementation of the `Board` trait for the game of Tic-Tac-Toe.
///
/// The grid is addressed by `(row, col)` with both coordinates in `0..3`. The board tracks whose
/// turn it is and refuses any mutation once the game has a winner or the grid is full.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct TicTacToeBoard {
    cells: [[Cell; SIZE]; SIZE],
    turn: Mark,
}

impl TicTacToeBoard {
    /// Creates an empty board with `X` to move.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
            turn: Mark::X,
        }
    }

    /// Marks the cell at `(row, col)` with `mark` and passes the turn.
    ///
    /// Fails without touching the board if the coordinates are out of range, the game is
    /// already over, the cell is taken or it is not `mark`'s turn.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), IllegalMove> {
        if row >= SIZE || col >= SIZE {
            return Err(IllegalMove::OutOfRange { row, col });
        }
        if self.outcome().is_terminal() {
            return Err(IllegalMove::GameOver);
        }
        if self.cells[row][col] != Cell::Empty {
            return Err(IllegalMove::Occupied { row, col });
        }
        if mark != self.turn {
            return Err(IllegalMove::OutOfTurn {
                expected: self.turn,
                got: mark,
            });
        }

        self.put(row, col);
        Ok(())
    }

    fn put(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Marked(self.turn);
        self.turn = self.turn.opponent();
    }

    /// Classifies the position: the first uniform line wins, a full grid without one is a tie.
    pub fn outcome(&self) -> Outcome {
        for line in LINES {
            let [a, b, c] = line.map(|(row, col)| self.cells[row][col]);
            if let Cell::Marked(mark) = a {
                if a == b && b == c {
                    return GameOutcome::Won(mark);
                }
            }
        }

        if self.is_full() {
            GameOutcome::Tie
        } else {
            GameOutcome::InProgress
        }
    }

    /// Returns `true` when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| *cell != Cell::Empty)
    }

    /// Returns the coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cells[row][col] == Cell::Empty)
            .collect()
    }

    /// Returns the cell at `(row, col)`, or `None` if the coordinates are out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Returns the mark whose turn it is.
    pub fn turn(&self) -> Mark {
        self.turn
    }
}

impl Default for TicTacToeBoard {
    /// Creates a new Tic-Tac-Toe board with player 'X' starting.
    fn default() -> Self {
        TicTacToeBoard::new()
    }
}

impl Display for TicTacToeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Marked(mark) => write!(f, "{mark}")?,
                }
            }
        }
        Ok(())
    }
}

impl Board for TicTacToeBoard {
    type Move = Position;
    type Side = Mark;

    fn get_current_player(&self) -> Mark {
        self.turn
    }

    fn get_outcome(&self) -> Outcome {
        self.outcome()
    }

    fn get_available_moves(&self) -> Vec<Position> {
        if self.outcome().is_terminal() {
            return Vec::new();
        }

        self.empty_cells()
    }

    fn perform_move(&mut self, b_move: &Position) {
        let (row, col) = *b_move;
        debug_assert_eq!(self.cells[row][col], Cell::Empty);
        self.put(row, col);
    }
}
