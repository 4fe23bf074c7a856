//! Common type aliases used throughout the engine.

/// Search depth in plies.
pub type Depth = u32;

/// Position score: heuristic points for cut-off positions, or a terminal
/// utility sentinel for finished games.
pub type Score = i32;
