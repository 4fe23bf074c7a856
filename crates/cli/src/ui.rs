//! Interactive terminal interface.
//!
//! A line-oriented loop: the human enters moves in algebraic notation, the
//! engine answers according to the current game mode. Passes are announced
//! and executed automatically for whoever has no legal reply.

use colored::Colorize;
use othello_core::disc::Disc;
use othello_core::search::Search;
use othello_core::square::Square;
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::game::GameState;

/// Who plays which color.
///
/// Mirrors the numeric modes accepted by the `mode` command:
/// 0: Black-Human, White-AI / 1: Black-AI, White-Human /
/// 2: Black-AI, White-AI / 3: Black-Human, White-Human.
#[derive(Clone, Copy, PartialEq, Eq)]
struct GameMode(usize);

impl GameMode {
    fn engine_plays(self, side: Disc) -> bool {
        matches!(
            (self.0, side),
            (0, Disc::White) | (1, Disc::Black) | (2, _)
        )
    }
}

/// Main interactive loop.
///
/// # Arguments
/// * `depth` - Search depth in plies for the engine.
pub fn ui_loop(depth: u32) -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;
    let mut game = GameState::new();
    let mut search = Search::new(depth);
    let mut mode = GameMode(0);

    loop {
        game.print();
        println!();

        if !game.is_game_over() {
            // Forced pass: announce and hand the turn over, for human and
            // engine alike.
            if !game.has_legal_moves() {
                println!("{} has no legal moves and passes.\n", game.side_to_move());
                game.make_pass()?;
                continue;
            }

            if mode.engine_plays(game.side_to_move()) {
                let result = search.run(game.core());
                if let Some(sq) = result.best_move {
                    game.make_move(sq)?;
                    println!(
                        "Computer plays {} (score {}, {} nodes, {:.0?})\n",
                        sq.to_string().bold(),
                        result.score,
                        result.n_nodes,
                        result.elapsed,
                    );
                    continue;
                }
            }
        }

        let readline = rl.readline("> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                let mut parts = line.split_whitespace();
                let Some(cmd) = parts.next() else { continue };
                println!();

                match cmd {
                    "new" | "n" => {
                        game = GameState::new();
                        search = Search::new(depth);
                    }
                    "undo" | "u" => {
                        if !game.undo() {
                            println!("Cannot undo.");
                        }
                    }
                    "mode" | "m" => match parts.next().map(str::parse::<usize>) {
                        Some(Ok(m)) if m <= 3 => {
                            mode = GameMode(m);
                            println!("Mode changed to: {m}");
                        }
                        Some(_) => {
                            println!("Invalid mode number. Please specify a value between 0-3.");
                        }
                        None => {
                            println!("Current mode: {}", mode.0);
                            println!("0: Black-Human, White-AI");
                            println!("1: Black-AI, White-Human");
                            println!("2: Black-AI, White-AI");
                            println!("3: Black-Human, White-Human");
                        }
                    },
                    "hint" | "h" => {
                        if game.is_game_over() || !game.has_legal_moves() {
                            println!("Nothing to suggest.");
                        } else {
                            let result = search.run(game.core());
                            if let Some(sq) = result.best_move {
                                println!(
                                    "Hint: {} (score {}, {} nodes)",
                                    sq.to_string().bold(),
                                    result.score,
                                    result.n_nodes,
                                );
                            }
                        }
                    }
                    "go" | "g" => {
                        if game.is_game_over() || !game.has_legal_moves() {
                            println!("Nothing to play.");
                        } else {
                            let result = search.run(game.core());
                            if let Some(sq) = result.best_move {
                                game.make_move(sq)?;
                                println!("Computer plays {}\n", sq.to_string().bold());
                            }
                        }
                    }
                    "stats" => {
                        let stats = search.stats();
                        println!(
                            "{} decisions, {} nodes, average {:.0?} per decision",
                            stats.decisions(),
                            stats.total_nodes(),
                            stats.average_elapsed(),
                        );
                    }
                    "quit" | "q" => break,
                    _ => match cmd.parse::<Square>() {
                        Ok(sq) => {
                            if game.is_legal_move(sq) {
                                game.make_move(sq)?;
                            } else {
                                println!("Illegal move: {cmd}\n");
                            }
                        }
                        Err(_) => {
                            println!("Unknown command: {cmd}\n");
                        }
                    },
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                return Err(format!("Input error: {err}"));
            }
        }
    }

    Ok(())
}
