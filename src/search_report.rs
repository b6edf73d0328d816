use crate::board::Board;

/// Leaf value of a position won by the engine's side.
pub const WIN_SCORE: i32 = 1;
/// Leaf value of a drawn position.
pub const TIE_SCORE: i32 = 0;
/// Leaf value of a position won by the opponent.
pub const LOSS_SCORE: i32 = -1;

/// A root move together with the value the engine can guarantee after playing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<M> {
    /// The move considered at the root.
    pub b_move: M,
    /// Minimax value of the position after the move, from the engine's point of view.
    pub score: i32,
}

/// Everything a single search found out about a position.
#[derive(Debug, Clone)]
pub struct SearchReport<T: Board> {
    /// Every root move in the board's move order, each with its minimax value.
    pub candidates: Vec<Candidate<T::Move>>,
    /// The move the engine picked.
    pub best_move: T::Move,
    /// Value of `best_move`.
    pub best_score: i32,
    /// Number of positions evaluated, root children included.
    pub nodes_visited: u64,
    /// Deepest ply reached below the root children.
    pub max_depth: usize,
}

impl<T: Board> SearchReport<T> {
    /// Returns the root moves that share the best value.
    pub fn best_candidates(&self) -> impl Iterator<Item = &Candidate<T::Move>> {
        self.candidates
            .iter()
            .filter(move |candidate| candidate.score == self.best_score)
    }

    /// Returns the value of `b_move` if it was a root candidate.
    pub fn score_of(&self, b_move: &T::Move) -> Option<i32> {
        self.candidates
            .iter()
            .find(|candidate| candidate.b_move == *b_move)
            .map(|candidate| candidate.score)
    }
}

/// Running counters threaded through one search.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SearchStats {
    pub nodes_visited: u64,
    pub max_depth: usize,
}

impl SearchStats {
    pub fn visit(&mut self, depth: usize) {
        self.nodes_visited += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}
