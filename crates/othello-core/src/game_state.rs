//! Game state management for Reversi.
//!
//! This module provides the [`GameState`] struct: a value-like snapshot of a
//! position together with the side to move. It is `Copy`, so callers that
//! explore variations (the search in particular) work on isolated copies and
//! can never corrupt the position they branched from.

use crate::board::Board;
use crate::disc::Disc;
use crate::move_list::MoveList;
use crate::square::Square;

/// A snapshot of a Reversi game: the board plus whose turn it is.
///
/// Applying a move always hands the turn to the other player, even when that
/// player then has no legal reply. Such a forced-pass position is a valid
/// state; callers advance past it with [`GameState::make_pass`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// Which player's turn it is to move.
    side_to_move: Disc,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position.
    ///
    /// The initial position has 4 discs in the center (2 black, 2 white)
    /// with Black to move first, following standard Reversi rules.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            side_to_move: Disc::Black,
        }
    }

    /// Creates a game state from an existing board position.
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from
    /// * `side_to_move` - Which player moves next
    pub fn from_board(board: Board, side_to_move: Disc) -> Self {
        Self {
            board,
            side_to_move,
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Disc {
        self.side_to_move
    }

    /// Returns the disc at a square by absolute color, regardless of whose
    /// turn it is.
    pub fn get_disc_at(&self, sq: Square) -> Disc {
        self.board.get_disc_at(sq, self.side_to_move)
    }

    /// Returns the legal moves for the player in turn, in board enumeration
    /// order (possibly empty).
    pub fn legal_moves(&self) -> MoveList {
        MoveList::new(&self.board)
    }

    /// Checks if the game has ended: neither player has a legal move.
    pub fn is_finished(&self) -> bool {
        self.board.is_game_over()
    }

    /// Returns the disc count for both players.
    ///
    /// # Returns
    ///
    /// A tuple `(black_count, white_count)` representing the number of
    /// discs each player has on the board.
    pub fn get_score(&self) -> (u32, u32) {
        if self.side_to_move == Disc::Black {
            (
                self.board.get_player_count(),
                self.board.get_opponent_count(),
            )
        } else {
            (
                self.board.get_opponent_count(),
                self.board.get_player_count(),
            )
        }
    }

    /// Executes a move and hands the turn to the opponent.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to place a disc on
    ///
    /// # Returns
    ///
    /// `Ok(())` if the move was applied. On error the state is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error string if the move is not legal on the current board.
    pub fn apply(&mut self, sq: Square) -> Result<(), String> {
        match self.board.try_make_move(sq) {
            Some(next) => {
                self.board = next;
                self.side_to_move = self.side_to_move.opposite();
                Ok(())
            }
            None => Err(format!("Illegal move: {sq}")),
        }
    }

    /// Executes a pass move (switching players without placing a disc).
    ///
    /// # Returns
    ///
    /// `Ok(())` if the pass was executed.
    ///
    /// # Errors
    ///
    /// Returns an error string if attempting to pass when legal moves are
    /// available.
    pub fn make_pass(&mut self) -> Result<(), String> {
        if self.board.has_legal_moves() {
            return Err("Cannot pass when legal moves are available".to_string());
        }

        self.board = self.board.switch_players();
        self.side_to_move = self.side_to_move.opposite();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::Bitboard;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.side_to_move(), Disc::Black);
        assert!(!game.is_finished());
        assert_eq!(game.get_score(), (2, 2));
        assert_eq!(game.legal_moves().count(), 4);
    }

    #[test]
    fn test_apply() {
        let mut game = GameState::new();
        assert!(game.apply(Square::D3).is_ok());
        assert_eq!(game.side_to_move(), Disc::White);
        assert_eq!(game.get_score(), (4, 1));
    }

    #[test]
    fn test_apply_illegal_leaves_state_unchanged() {
        let mut game = GameState::new();
        let before = game;
        assert!(game.apply(Square::A1).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_side_to_move_alternates() {
        let mut game = GameState::new();
        assert_eq!(game.side_to_move(), Disc::Black);

        game.apply(Square::D3).unwrap();
        assert_eq!(game.side_to_move(), Disc::White);

        game.apply(Square::C3).unwrap();
        assert_eq!(game.side_to_move(), Disc::Black);
    }

    #[test]
    fn test_get_disc_at() {
        let mut game = GameState::new();
        assert_eq!(game.get_disc_at(Square::D5), Disc::Black);
        assert_eq!(game.get_disc_at(Square::D4), Disc::White);

        // Absolute colors must be stable across a turn change.
        game.apply(Square::D3).unwrap();
        assert_eq!(game.get_disc_at(Square::D3), Disc::Black);
        assert_eq!(game.get_disc_at(Square::D4), Disc::Black);
        assert_eq!(game.get_disc_at(Square::E5), Disc::White);
    }

    #[test]
    fn test_pass_requires_no_moves() {
        let mut game = GameState::new();
        assert!(game.make_pass().is_err());
    }

    #[test]
    fn test_forced_pass_state() {
        // Black to move with no legal move, White still has one: a
        // forced-pass position that is not finished.
        //
        //   O X - (rest empty): Black cannot flip anything, White can
        //   bracket b1 by playing c1.
        let board = Board::from_bitboards(
            Bitboard::default().set(Square::B1),
            Bitboard::default().set(Square::A1),
        );
        let mut game = GameState::from_board(board, Disc::Black);

        assert!(game.legal_moves().is_empty());
        assert!(!game.is_finished());
        assert!(game.make_pass().is_ok());
        assert_eq!(game.side_to_move(), Disc::White);
        assert!(game.legal_moves().contains(Square::C1));
    }

    #[test]
    fn test_play_to_completion() {
        let mut game = GameState::new();

        // First-legal-move playout must terminate and keep the score
        // consistent.
        let mut plies = 0;
        while !game.is_finished() {
            let moves = game.legal_moves();
            match moves.first() {
                Some(m) => game.apply(m.sq).unwrap(),
                None => game.make_pass().unwrap(),
            }
            plies += 1;
            assert!(plies <= 128, "game did not terminate");
        }

        let (black, white) = game.get_score();
        assert!(black + white <= 64);
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn test_score_perspective_independent() {
        let mut game = GameState::new();
        game.apply(Square::D3).unwrap();

        // (4, 1) whichever side is to move.
        assert_eq!(game.get_score(), (4, 1));
        let mirrored = GameState::from_board(game.board().switch_players(), Disc::Black);
        assert_eq!(mirrored.get_score(), (4, 1));
    }
}
