//! Global constants

use crate::types::Score;

/// Number of discs on the board when a game starts.
pub const INITIAL_DISCS: Score = 4;

/// Infinity bound for alpha-beta search windows. Strictly larger than any
/// utility or heuristic value.
pub const SCORE_INF: Score = 100_000;

/// Base utility of a won game.
pub const SCORE_WIN: Score = 10_000;

/// Per-placed-disc reduction of the terminal sentinel. Wins reached with
/// fewer discs on the board score higher; losses reached later score higher
/// (closer to zero).
pub const WIN_DISC_PENALTY: Score = 100;

/// Heuristic weight of owning a corner square.
pub const CORNER_WEIGHT: Score = 500;

/// Largest magnitude the heuristic can reach: a full board of one color plus
/// all four corners.
pub const HEURISTIC_MAX: Score = 64 + 4 * CORNER_WEIGHT;

// Invariant: the smallest reachable win sentinel,
// SCORE_WIN - 60 * WIN_DISC_PENALTY, must stay above HEURISTIC_MAX so that a
// proven win or loss always outranks any heuristic comparison during bound
// propagation. Checked by a test in `eval`.
