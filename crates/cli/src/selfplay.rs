//! Engine-vs-engine games.

use colored::Colorize;
use othello_core::disc::Disc;
use othello_core::game_state::GameState;
use othello_core::search::Search;

/// Plays one game between two engines and prints the record, final score
/// and per-side search telemetry.
///
/// # Arguments
/// * `black_depth` - Search depth in plies for Black.
/// * `white_depth` - Search depth in plies for White.
pub fn run(black_depth: u32, white_depth: u32) {
    let mut game = GameState::new();
    let mut black = Search::new(black_depth);
    let mut white = Search::new(white_depth);
    let mut record = String::new();

    while !game.is_finished() {
        if game.legal_moves().is_empty() {
            game.make_pass()
                .expect("pass rejected with no legal moves available");
            continue;
        }

        let engine = if game.side_to_move() == Disc::Black {
            &mut black
        } else {
            &mut white
        };

        let result = engine.run(&game);
        let Some(sq) = result.best_move else {
            unreachable!("no move for a position with legal moves");
        };
        game.apply(sq).expect("engine chose an illegal move");
        record.push_str(&sq.to_string());
    }

    println!("{}", game.board().to_string_as_board(game.side_to_move()));
    println!();
    println!("Game record: {record}");

    let (black_count, white_count) = game.get_score();
    println!("Final score: Black {black_count} - {white_count} White");
    match black_count.cmp(&white_count) {
        std::cmp::Ordering::Greater => println!("{}", "Black wins!".bright_green()),
        std::cmp::Ordering::Less => println!("{}", "White wins!".bright_yellow()),
        std::cmp::Ordering::Equal => println!("{}", "Draw".bright_cyan()),
    }

    println!();
    for (name, search) in [("Black", &black), ("White", &white)] {
        let stats = search.stats();
        println!(
            "{name} (depth {}): {} decisions, {} nodes, average {:.0?} per decision",
            search.max_depth(),
            stats.decisions(),
            stats.total_nodes(),
            stats.average_elapsed(),
        );
    }
}
