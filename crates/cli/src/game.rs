//! Game state management for the CLI front end.
//!
//! This module provides a `GameState` wrapper around the core game state
//! that adds what an interactive session needs: move history with undo,
//! last-move highlighting, and colored terminal display.

use colored::Colorize;
use othello_core::disc::Disc;
use othello_core::game_state;
use othello_core::square::Square;

/// Represents the state of a Reversi/Othello game with CLI-specific
/// features.
pub struct GameState {
    /// Core game state snapshot.
    core: game_state::GameState,
    /// Snapshots before each move or pass, for undo.
    history: Vec<(game_state::GameState, Square)>,
    /// The last move played (for highlighting in display).
    last_move: Square,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position, Black to move.
    pub fn new() -> Self {
        Self {
            core: game_state::GameState::new(),
            history: Vec::new(),
            last_move: Square::None,
        }
    }

    /// Returns the core snapshot, e.g. to hand to the search.
    pub fn core(&self) -> &game_state::GameState {
        &self.core
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Disc {
        self.core.side_to_move()
    }

    /// Checks whether the player in turn has any legal move.
    pub fn has_legal_moves(&self) -> bool {
        !self.core.legal_moves().is_empty()
    }

    /// Checks whether `sq` is legal for the player in turn.
    pub fn is_legal_move(&self, sq: Square) -> bool {
        self.core.legal_moves().contains(sq)
    }

    /// Checks if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.core.is_finished()
    }

    /// Returns the disc count as `(black_count, white_count)`.
    pub fn get_score(&self) -> (u32, u32) {
        self.core.get_score()
    }

    /// Executes a move and records it for undo.
    ///
    /// # Errors
    ///
    /// Returns an error string if the move is not legal; the state is
    /// unchanged.
    pub fn make_move(&mut self, sq: Square) -> Result<(), String> {
        let snapshot = (self.core, self.last_move);
        self.core.apply(sq)?;
        self.history.push(snapshot);
        self.last_move = sq;
        Ok(())
    }

    /// Executes a pass for a player with no legal moves, recorded for undo.
    ///
    /// # Errors
    ///
    /// Returns an error string if legal moves are available.
    pub fn make_pass(&mut self) -> Result<(), String> {
        let snapshot = (self.core, self.last_move);
        self.core.make_pass()?;
        self.history.push(snapshot);
        self.last_move = Square::None;
        Ok(())
    }

    /// Undoes the last move or pass if possible.
    ///
    /// # Returns
    ///
    /// `true` if something was undone, `false` if at the initial position.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some((core, last_move)) => {
                self.core = core;
                self.last_move = last_move;
                true
            }
            None => false,
        }
    }

    /// Prints a colored representation of the board to the terminal.
    ///
    /// Legal moves are marked with a dot, the last move is highlighted.
    pub fn print(&self) {
        println!("      a   b   c   d   e   f   g   h");
        println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

        for y in 0..8u8 {
            print!("  {} │", y + 1);

            for x in 0..8u8 {
                let sq = Square::from_file_rank(x, y);
                let disc = self.core.get_disc_at(sq);
                let is_legal = self.is_legal_move(sq);
                let is_last_move = sq == self.last_move;

                let symbol = match disc {
                    Disc::Black if is_last_move => " X ".on_bright_black().bright_green(),
                    Disc::White if is_last_move => " O ".on_bright_black().bright_yellow(),
                    Disc::Black => " X ".bright_green(),
                    Disc::White => " O ".bright_yellow(),
                    Disc::Empty if is_legal => " · ".bright_cyan(),
                    Disc::Empty => "   ".black(),
                };
                print!("{symbol}│");
            }

            let (black_count, white_count) = self.get_score();
            match y {
                2 => {
                    let player_info = match self.side_to_move() {
                        Disc::Black => "Black's turn (X)".bright_green(),
                        Disc::White => "White's turn (O)".bright_yellow(),
                        Disc::Empty => unreachable!(),
                    };
                    println!("   {player_info}");
                }
                3 => println!("   Black: {}", format!("{black_count:2}").bright_green()),
                4 => println!("   White: {}", format!("{white_count:2}").bright_yellow()),
                6 => {
                    if self.is_game_over() {
                        match black_count.cmp(&white_count) {
                            std::cmp::Ordering::Greater => {
                                println!("   {}", "Black wins!".bright_green())
                            }
                            std::cmp::Ordering::Less => {
                                println!("   {}", "White wins!".bright_yellow())
                            }
                            std::cmp::Ordering::Equal => println!("   {}", "Draw".bright_cyan()),
                        }
                    } else {
                        println!();
                    }
                }
                _ => println!(),
            }

            if y < 7 {
                println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
            }
        }

        println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
    }
}
