//! Classical position evaluation: disc material plus corner control.
//!
//! Both functions score from a fixed `perspective` player, whatever the turn
//! of the state being scored. The search passes the player to move at its
//! root, so scores from every node of one decision are on a single
//! comparable scale.

use crate::constants::{CORNER_WEIGHT, INITIAL_DISCS, SCORE_WIN, WIN_DISC_PENALTY};
use crate::disc::Disc;
use crate::game_state::GameState;
use crate::types::Score;

/// Disc counts of `state` seen from `perspective`: (own, opponent).
#[inline]
fn disc_counts(state: &GameState, perspective: Disc) -> (u32, u32) {
    let board = state.board();
    if state.side_to_move() == perspective {
        (board.get_player_count(), board.get_opponent_count())
    } else {
        (board.get_opponent_count(), board.get_player_count())
    }
}

/// Corner counts of `state` seen from `perspective`: (own, opponent).
#[inline]
fn corner_counts(state: &GameState, perspective: Disc) -> (u32, u32) {
    let board = state.board();
    if state.side_to_move() == perspective {
        (
            board.get_player_corner_count(),
            board.get_opponent_corner_count(),
        )
    } else {
        (
            board.get_opponent_corner_count(),
            board.get_player_corner_count(),
        )
    }
}

/// Heuristic evaluation of a (possibly unfinished) position.
///
/// The base term is the disc difference; each corner adds or subtracts
/// [`CORNER_WEIGHT`], so corner control dominates raw material between
/// otherwise close positions. Closed-form and cheap: it runs at every leaf
/// of the search tree.
///
/// # Arguments
///
/// * `state` - The position to score.
/// * `perspective` - The player the score is for; positive favors them.
pub fn evaluate(state: &GameState, perspective: Disc) -> Score {
    let (own, opp) = disc_counts(state, perspective);
    let (own_corners, opp_corners) = corner_counts(state, perspective);

    let material = own as Score - opp as Score;
    let corners = own_corners as Score - opp_corners as Score;
    material + CORNER_WEIGHT * corners
}

/// Exact utility of a finished game.
///
/// A win returns a large positive sentinel, a loss its negative, a draw
/// zero. The sentinel shrinks by [`WIN_DISC_PENALTY`] per disc placed since
/// the start of the game, so quicker wins (and longer survivals) score
/// better, while every reachable sentinel still dominates every heuristic
/// value.
///
/// Only meaningful when [`GameState::is_finished`] holds; for unfinished
/// positions the result is just the sign of the current disc lead.
///
/// # Arguments
///
/// * `state` - The finished position.
/// * `perspective` - The player the utility is for.
pub fn utility(state: &GameState, perspective: Disc) -> Score {
    let (own, opp) = disc_counts(state, perspective);
    let round = (own + opp) as Score - INITIAL_DISCS;

    if own > opp {
        SCORE_WIN - round * WIN_DISC_PENALTY
    } else if own < opp {
        -SCORE_WIN + round * WIN_DISC_PENALTY
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::Bitboard;
    use crate::board::Board;
    use crate::constants::HEURISTIC_MAX;
    use crate::square::Square;

    fn state_from(player: Bitboard, opponent: Bitboard, side_to_move: Disc) -> GameState {
        GameState::from_board(Board::from_bitboards(player, opponent), side_to_move)
    }

    #[test]
    fn test_evaluate_material_only() {
        // Three black discs vs one white, no corners.
        let state = state_from(
            Bitboard::default()
                .set(Square::D3)
                .set(Square::D4)
                .set(Square::D5),
            Bitboard::default().set(Square::E4),
            Disc::Black,
        );
        assert_eq!(evaluate(&state, Disc::Black), 2);
        assert_eq!(evaluate(&state, Disc::White), -2);
    }

    #[test]
    fn test_evaluate_corner_monotonicity() {
        // Same material, one disc moved from a mid square to the A1 corner:
        // the score must rise by exactly the corner weight.
        let without_corner = state_from(
            Bitboard::default().set(Square::B2).set(Square::C2),
            Bitboard::default().set(Square::E4),
            Disc::Black,
        );
        let with_corner = state_from(
            Bitboard::default().set(Square::A1).set(Square::C2),
            Bitboard::default().set(Square::E4),
            Disc::Black,
        );

        assert_eq!(
            evaluate(&with_corner, Disc::Black),
            evaluate(&without_corner, Disc::Black) + CORNER_WEIGHT
        );
        assert_eq!(
            evaluate(&with_corner, Disc::White),
            evaluate(&without_corner, Disc::White) - CORNER_WEIGHT
        );
    }

    #[test]
    fn test_evaluate_opponent_corner_penalty() {
        let neutral = state_from(
            Bitboard::default().set(Square::D4),
            Bitboard::default().set(Square::E5),
            Disc::Black,
        );
        let opponent_corner = state_from(
            Bitboard::default().set(Square::D4),
            Bitboard::default().set(Square::H8),
            Disc::Black,
        );
        assert_eq!(
            evaluate(&opponent_corner, Disc::Black),
            evaluate(&neutral, Disc::Black) - CORNER_WEIGHT
        );
    }

    #[test]
    fn test_evaluate_perspective_antisymmetry() {
        let mut game = GameState::new();
        game.apply(Square::D3).unwrap();
        assert_eq!(evaluate(&game, Disc::Black), -evaluate(&game, Disc::White));
    }

    #[test]
    fn test_utility_signs() {
        // Full board, 40 black vs 24 white.
        let black_mask = (1u64 << 40) - 1;
        let won = state_from(
            Bitboard::new(black_mask),
            Bitboard::new(!black_mask),
            Disc::Black,
        );
        assert!(utility(&won, Disc::Black) > 0);
        assert!(utility(&won, Disc::White) < 0);

        // Even split is a draw.
        let half = (1u64 << 32) - 1;
        let drawn = state_from(Bitboard::new(half), Bitboard::new(!half), Disc::Black);
        assert_eq!(utility(&drawn, Disc::Black), 0);
        assert_eq!(utility(&drawn, Disc::White), 0);
    }

    #[test]
    fn test_utility_prefers_quicker_wins() {
        // A wipeout after 5 discs placed beats a narrow full-board win.
        let quick = state_from(
            Bitboard::new(0x1FF),
            Bitboard::new(0),
            Disc::Black,
        );
        let late_mask = (1u64 << 33) - 1;
        let late = state_from(
            Bitboard::new(late_mask),
            Bitboard::new(!late_mask),
            Disc::Black,
        );
        assert!(utility(&quick, Disc::Black) > utility(&late, Disc::Black));
        assert!(utility(&quick, Disc::Black) > 0);
        assert!(utility(&late, Disc::Black) > 0);
    }

    #[test]
    fn test_sentinel_dominates_heuristic() {
        // The weakest possible win sentinel still beats the strongest
        // heuristic score.
        let weakest_win = SCORE_WIN - 60 * WIN_DISC_PENALTY;
        assert!(weakest_win > HEURISTIC_MAX);
    }
}
