use crate::board::{Board, GameOutcome};
use crate::error::NoLegalMove;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use crate::search_report::{Candidate, LOSS_SCORE, SearchReport, SearchStats, TIE_SCORE, WIN_SCORE};
use tracing::{debug, trace};

/// How to choose among root moves that share the best value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Take the first best move in the board's move order (row-major for tic-tac-toe).
    #[default]
    FirstInScanOrder,
    /// Take a uniformly random best move.
    Random,
}

/// Exhaustive minimax search.
///
/// Every line is played out to a terminal position. Leaves score `+1` when the engine's side
/// won, `-1` when the opponent won and `0` for a tie; there is no pruning, no heuristic
/// evaluation of unfinished positions and no transposition cache. Each explored child is a
/// fresh copy of its parent, so the board passed in is never touched by the search itself.
pub struct Minimax<T: Board, K: RandomGenerator> {
    engine_side: T::Side,
    tie_break: TieBreak,
    random: K,
}

/// A builder for creating instances of `Minimax`.
pub struct MinimaxBuilder<T: Board, K: RandomGenerator> {
    engine_side: T::Side,
    tie_break: TieBreak,
    random_generator: K,
}

impl<T: Board, K: RandomGenerator> MinimaxBuilder<T, K> {
    /// Creates a new builder for an engine playing `engine_side`.
    pub fn new(engine_side: T::Side) -> Self {
        Self {
            engine_side,
            tie_break: TieBreak::default(),
            random_generator: K::default(),
        }
    }

    /// Sets the side the engine plays and maximizes for.
    pub fn with_engine_side(mut self, engine_side: T::Side) -> Self {
        self.engine_side = engine_side;
        self
    }

    /// Sets how equally good root moves are told apart.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the random number generator used by [`TieBreak::Random`].
    pub fn with_random_generator(mut self, rg: K) -> Self {
        self.random_generator = rg;
        self
    }

    pub fn build(self) -> Minimax<T, K> {
        Minimax::new(self.engine_side, self.random_generator, self.tie_break)
    }
}

impl<T: Board, K: RandomGenerator> Minimax<T, K> {
    /// Returns a new builder for `Minimax`.
    pub fn builder(engine_side: T::Side) -> MinimaxBuilder<T, K> {
        MinimaxBuilder::new(engine_side)
    }

    /// Creates a new engine.
    ///
    /// It is recommended to use the builder pattern via `Minimax::builder()` instead.
    pub fn new(engine_side: T::Side, rg: K, tie_break: TieBreak) -> Self {
        Self {
            engine_side,
            tie_break,
            random: rg,
        }
    }

    pub fn engine_side(&self) -> T::Side {
        self.engine_side
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Searches `board` to the end and reports the value of every root move and the one picked.
    ///
    /// The board is only read. Fails if the game is over, if it is not the engine's turn or if
    /// there is nothing to play.
    pub fn analyze(&mut self, board: &T) -> Result<SearchReport<T>, NoLegalMove> {
        if board.get_outcome().is_terminal() {
            return Err(NoLegalMove::GameOver);
        }
        if board.get_current_player() != self.engine_side {
            return Err(NoLegalMove::NotEngineTurn);
        }
        let available_moves = board.get_available_moves();
        if available_moves.is_empty() {
            return Err(NoLegalMove::NoAvailableMoves);
        }

        let mut stats = SearchStats::default();
        let mut candidates = Vec::with_capacity(available_moves.len());
        for b_move in available_moves {
            let mut child = board.clone();
            child.perform_move(&b_move);
            let score = self.evaluate(&child, 0, false, &mut stats);
            trace!(?b_move, score, "root candidate");
            candidates.push(Candidate { b_move, score });
        }

        let best_score = candidates
            .iter()
            .map(|candidate| candidate.score)
            .max()
            .ok_or(NoLegalMove::NoAvailableMoves)?;
        let best_move = self
            .pick_best(&candidates, best_score)
            .ok_or(NoLegalMove::NoAvailableMoves)?;

        debug!(
            ?best_move,
            best_score,
            nodes_visited = stats.nodes_visited,
            max_depth = stats.max_depth,
            "search finished"
        );

        Ok(SearchReport {
            candidates,
            best_move,
            best_score,
            nodes_visited: stats.nodes_visited,
            max_depth: stats.max_depth,
        })
    }

    /// Runs [`Minimax::analyze`] and plays the chosen move on `board`.
    pub fn choose_move(&mut self, board: &mut T) -> Result<SearchReport<T>, NoLegalMove> {
        let report = self.analyze(board)?;
        board.perform_move(&report.best_move);
        Ok(report)
    }

    fn pick_best(&mut self, candidates: &[Candidate<T::Move>], best_score: i32) -> Option<T::Move> {
        match self.tie_break {
            TieBreak::FirstInScanOrder => candidates
                .iter()
                .find(|candidate| candidate.score == best_score)
                .map(|candidate| candidate.b_move),
            TieBreak::Random => {
                let tied: Vec<T::Move> = candidates
                    .iter()
                    .filter(|candidate| candidate.score == best_score)
                    .map(|candidate| candidate.b_move)
                    .collect();
                self.random.get_random_from_slice(&tied).copied()
            }
        }
    }

    /// Minimax value of `board` for the engine. `maximizing` is `true` when the engine is to move.
    ///
    /// `depth` only feeds the statistics; it never changes a score, so a quick win and a slow
    /// win are worth the same.
    fn evaluate(&self, board: &T, depth: usize, maximizing: bool, stats: &mut SearchStats) -> i32 {
        stats.visit(depth);

        if let Some(score) = self.terminal_score(&board.get_outcome()) {
            return score;
        }

        let moves = board.get_available_moves();
        if moves.is_empty() {
            return TIE_SCORE;
        }

        let scores = moves.iter().map(|b_move| {
            let mut child = board.clone();
            child.perform_move(b_move);
            self.evaluate(&child, depth + 1, !maximizing, stats)
        });

        if maximizing {
            scores.fold(LOSS_SCORE, i32::max)
        } else {
            scores.fold(WIN_SCORE, i32::min)
        }
    }

    fn terminal_score(&self, outcome: &GameOutcome<T::Side>) -> Option<i32> {
        match outcome {
            GameOutcome::InProgress => None,
            GameOutcome::Tie => Some(TIE_SCORE),
            GameOutcome::Won(side) if *side == self.engine_side => Some(WIN_SCORE),
            GameOutcome::Won(_) => Some(LOSS_SCORE),
        }
    }
}

impl<T: Board> Minimax<T, StandardRandomGenerator> {
    /// Engine for `engine_side` with the default scan-order tie break.
    pub fn for_side(engine_side: T::Side) -> Self {
        MinimaxBuilder::new(engine_side).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::tic_tac_toe::tests::board_from;
    use crate::boards::tic_tac_toe::{Cell, Mark, Outcome, TicTacToeBoard};
    use crate::random::CustomNumberGenerator;

    fn engine(side: Mark) -> Minimax<TicTacToeBoard, StandardRandomGenerator> {
        Minimax::for_side(side)
    }

    /// Plays every possible human line against the engine and returns the terminal outcomes.
    fn all_games(
        board: TicTacToeBoard,
        engine: &mut Minimax<TicTacToeBoard, StandardRandomGenerator>,
        outcomes: &mut Vec<Outcome>,
    ) {
        let outcome = board.outcome();
        if outcome.is_terminal() {
            outcomes.push(outcome);
            return;
        }
        if board.turn() == engine.engine_side() {
            let mut next = board;
            let before = board.empty_cells();
            let report = engine.choose_move(&mut next).unwrap();
            assert!(before.contains(&report.best_move));
            all_games(next, engine, outcomes);
        } else {
            for (row, col) in board.empty_cells() {
                let mut next = board;
                next.place(row, col, board.turn()).unwrap();
                all_games(next, engine, outcomes);
            }
        }
    }

    #[test]
    fn answers_center_with_a_corner() {
        // arrange
        let board = board_from(["...", ".X.", "..."]);
        let mut minimax = engine(Mark::O);

        // act
        let report = minimax.analyze(&board).unwrap();

        // assert
        assert_eq!(report.best_move, (0, 0));
        assert_eq!(report.best_score, TIE_SCORE);
        for edge in [(0, 1), (1, 0), (1, 2), (2, 1)] {
            assert_eq!(report.score_of(&edge), Some(LOSS_SCORE));
        }
        for corner in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            assert_eq!(report.score_of(&corner), Some(TIE_SCORE));
        }
    }

    #[test]
    fn answers_corner_with_center() {
        let board = board_from(["X..", "...", "..."]);
        let report = engine(Mark::O).analyze(&board).unwrap();
        assert_eq!(report.best_move, (1, 1));
        assert_eq!(report.best_candidates().count(), 1);
    }

    #[test]
    fn blocks_an_open_line() {
        let board = board_from(["XX.", ".O.", "..."]);
        let report = engine(Mark::O).analyze(&board).unwrap();
        assert_eq!(report.best_move, (0, 2));
        assert_eq!(report.best_score, TIE_SCORE);
    }

    #[test]
    fn takes_a_winning_move_over_a_block() {
        let board = board_from(["XX.", "OO.", "X.."]);
        let report = engine(Mark::O).analyze(&board).unwrap();
        assert_eq!(report.best_move, (1, 2));
        assert_eq!(report.best_score, WIN_SCORE);
    }

    #[test]
    fn slow_and_fast_wins_score_the_same() {
        // (0, 2) wins on the spot, (0, 0) wins a move later; scan order decides.
        let board = board_from(["...", "X.O", "XXO"]);
        let report = engine(Mark::O).analyze(&board).unwrap();
        assert_eq!(report.score_of(&(0, 2)), Some(WIN_SCORE));
        assert_eq!(report.score_of(&(0, 0)), Some(WIN_SCORE));
        assert_eq!(report.best_move, (0, 0));
    }

    #[test]
    fn analyze_leaves_board_untouched() {
        let board = board_from(["X..", ".O.", "..X"]);
        let before = board;
        engine(Mark::O).analyze(&board).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn choose_move_changes_exactly_one_cell() {
        // arrange
        let mut board = board_from(["X..", ".O.", "..X"]);
        let before = board;

        // act
        let report = engine(Mark::O).choose_move(&mut board).unwrap();

        // assert
        let (row, col) = report.best_move;
        assert_eq!(before.cell(row, col), Some(Cell::Empty));
        assert_eq!(board.cell(row, col), Some(Cell::Marked(Mark::O)));
        let changed = (0..3)
            .flat_map(|r| (0..3).map(move |c| (r, c)))
            .filter(|&(r, c)| board.cell(r, c) != before.cell(r, c))
            .count();
        assert_eq!(changed, 1);
        assert_eq!(board.turn(), Mark::X);
    }

    #[test]
    fn refuses_finished_games() {
        let mut board = board_from(["XXX", "OO.", "..."]);
        let before = board;
        assert_eq!(engine(Mark::O).choose_move(&mut board).unwrap_err(), NoLegalMove::GameOver);
        assert_eq!(board, before);

        let tie = board_from(["XOX", "XOO", "OXX"]);
        assert_eq!(engine(Mark::O).analyze(&tie).unwrap_err(), NoLegalMove::GameOver);
    }

    #[test]
    fn refuses_to_move_out_of_turn() {
        let board = TicTacToeBoard::new();
        assert_eq!(engine(Mark::O).analyze(&board).unwrap_err(), NoLegalMove::NotEngineTurn);
    }

    #[test]
    fn counts_nodes_on_last_empty_cell() {
        let board = board_from(["XOX", "XOO", "OX."]);
        let report = engine(Mark::X).analyze(&board).unwrap();
        assert_eq!(report.best_move, (2, 2));
        assert_eq!(report.nodes_visited, 1);
        assert_eq!(report.max_depth, 0);
    }

    #[test]
    fn never_loses_against_any_human_line() {
        // arrange
        let mut minimax = engine(Mark::O);
        let mut outcomes = Vec::new();

        // act
        all_games(TicTacToeBoard::new(), &mut minimax, &mut outcomes);

        // assert
        assert!(!outcomes.is_empty());
        assert!(outcomes.iter().all(|outcome| *outcome != Outcome::Won(Mark::X)));
    }

    #[test]
    fn self_play_ends_in_a_tie() {
        // arrange
        let mut x_engine = engine(Mark::X);
        let mut o_engine = engine(Mark::O);
        let mut board = TicTacToeBoard::new();

        // act
        while !board.outcome().is_terminal() {
            let mover = if board.turn() == Mark::X { &mut x_engine } else { &mut o_engine };
            mover.choose_move(&mut board).unwrap();
        }

        // assert
        assert_eq!(board.outcome(), Outcome::Tie);
    }

    #[test]
    fn random_tie_break_picks_a_best_move() {
        // arrange
        let board = board_from(["...", ".X.", "..."]);
        let mut minimax = Minimax::<TicTacToeBoard, CustomNumberGenerator>::builder(Mark::O)
            .with_tie_break(TieBreak::Random)
            .with_random_generator(CustomNumberGenerator::new(42))
            .build();
        let mut twin = Minimax::<TicTacToeBoard, CustomNumberGenerator>::builder(Mark::O)
            .with_tie_break(TieBreak::Random)
            .with_random_generator(CustomNumberGenerator::new(42))
            .build();

        for _ in 0..10 {
            // act
            let report = minimax.analyze(&board).unwrap();

            // assert
            assert_eq!(report.score_of(&report.best_move), Some(report.best_score));
            assert!([(0, 0), (0, 2), (2, 0), (2, 2)].contains(&report.best_move));
            assert_eq!(twin.analyze(&board).unwrap().best_move, report.best_move);
        }
    }

    #[test]
    fn builder_overrides_defaults() {
        let minimax = Minimax::<TicTacToeBoard, StandardRandomGenerator>::builder(Mark::O)
            .with_engine_side(Mark::X)
            .build();
        assert_eq!(minimax.engine_side(), Mark::X);
        assert_eq!(minimax.tie_break(), TieBreak::FirstInScanOrder);
    }
}
