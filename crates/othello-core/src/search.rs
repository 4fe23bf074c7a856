//! Depth-bounded minimax search with alpha-beta pruning.
//!
//! Two mutually recursive procedures, `max_value` and `min_value`, walk the
//! game tree to a fixed depth budget.
//! Finished games are scored by [`eval::utility`], cut-off and forced-pass
//! positions by [`eval::evaluate`]; both score from the player to move at
//! the root, so every value in one decision lives on the same scale.
//!
//! Candidate moves are visited in the fixed board enumeration order and the
//! best score is only replaced on a strict improvement, so ties resolve to
//! the first candidate and repeated searches of one position choose the same
//! move.

pub mod search_result;

use std::time::Instant;

use crate::constants::SCORE_INF;
use crate::disc::Disc;
use crate::eval;
use crate::game_state::GameState;
use crate::search::search_result::{SearchOutcome, SearchResult, SearchStats};
use crate::square::Square;
use crate::types::{Depth, Score};

/// Minimax decision engine with a fixed depth budget.
pub struct Search {
    max_depth: Depth,
    n_nodes: u64,
    stats: SearchStats,
}

impl Search {
    /// Creates a search with the given depth budget in plies.
    ///
    /// A budget of 0 is clamped to 1, which degenerates to a greedy
    /// one-ply choice by immediate heuristic.
    pub fn new(max_depth: Depth) -> Search {
        Search {
            max_depth: max_depth.max(1),
            n_nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Returns the depth budget.
    pub fn max_depth(&self) -> Depth {
        self.max_depth
    }

    /// Returns cumulative telemetry over the decisions made so far.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Picks the best move for the player in turn.
    ///
    /// Precondition: `state` has at least one legal move. If it has none
    /// (finished game or forced pass), there is nothing to decide and
    /// `Square::None` is returned; callers must check before asking.
    pub fn decide_move(&mut self, state: &GameState) -> Square {
        self.run(state).best_move.unwrap_or(Square::None)
    }

    /// Runs a full decision and reports the move together with its score,
    /// node count and elapsed time.
    pub fn run(&mut self, state: &GameState) -> SearchResult {
        let start = Instant::now();
        self.n_nodes = 0;

        let perspective = state.side_to_move();
        let outcome = self.max_value(state, perspective, -SCORE_INF, SCORE_INF, self.max_depth);

        let elapsed = start.elapsed();
        self.stats.record(elapsed, self.n_nodes);

        SearchResult {
            score: outcome.score,
            best_move: outcome.best_move,
            n_nodes: self.n_nodes,
            depth: self.max_depth,
            elapsed,
        }
    }

    /// Maximizing half of the recursion: picks the child that maximizes the
    /// score for `perspective`, pruning once the running best reaches
    /// `beta`.
    fn max_value(
        &mut self,
        state: &GameState,
        perspective: Disc,
        mut alpha: Score,
        beta: Score,
        depth: Depth,
    ) -> SearchOutcome {
        if state.is_finished() {
            return SearchOutcome::leaf(eval::utility(state, perspective));
        }
        if depth == 0 {
            return SearchOutcome::leaf(eval::evaluate(state, perspective));
        }

        let moves = state.legal_moves();
        let Some(first) = moves.first() else {
            // Forced pass: the mover is stuck but the game is not over.
            return SearchOutcome::leaf(eval::evaluate(state, perspective));
        };

        let mut best_score = -SCORE_INF;
        let mut best_move = first.sq;

        for m in &moves {
            let mut next = *state;
            if next.apply(m.sq).is_err() {
                // Cannot happen for moves drawn from the state's own legal
                // set; skip the candidate rather than abort the search.
                debug_assert!(false, "legal move rejected: {}", m.sq);
                continue;
            }
            self.n_nodes += 1;

            let child = self.min_value(&next, perspective, alpha, beta, depth - 1);
            if child.score > best_score {
                best_score = child.score;
                best_move = m.sq;
                alpha = alpha.max(best_score);
            }
            if best_score >= beta {
                // Beta cutoff
                return SearchOutcome::new(best_score, best_move);
            }
        }

        SearchOutcome::new(best_score, best_move)
    }

    /// Minimizing half of the recursion: the opponent's reply, pruning once
    /// the running best drops to `alpha`.
    fn min_value(
        &mut self,
        state: &GameState,
        perspective: Disc,
        alpha: Score,
        mut beta: Score,
        depth: Depth,
    ) -> SearchOutcome {
        if state.is_finished() {
            return SearchOutcome::leaf(eval::utility(state, perspective));
        }
        if depth == 0 {
            return SearchOutcome::leaf(eval::evaluate(state, perspective));
        }

        let moves = state.legal_moves();
        let Some(first) = moves.first() else {
            return SearchOutcome::leaf(eval::evaluate(state, perspective));
        };

        let mut best_score = SCORE_INF;
        let mut best_move = first.sq;

        for m in &moves {
            let mut next = *state;
            if next.apply(m.sq).is_err() {
                debug_assert!(false, "legal move rejected: {}", m.sq);
                continue;
            }
            self.n_nodes += 1;

            let child = self.max_value(&next, perspective, alpha, beta, depth - 1);
            if child.score < best_score {
                best_score = child.score;
                best_move = m.sq;
                beta = beta.min(best_score);
            }
            if best_score <= alpha {
                return SearchOutcome::new(best_score, best_move);
            }
        }

        SearchOutcome::new(best_score, best_move)
    }
}
