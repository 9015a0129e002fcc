pub mod config;
pub mod error;
pub mod heuristic;
pub mod prompt;
pub mod puzzle;
pub mod search;
pub mod trace;

pub use error::PuzzleError;
pub use heuristic::Method;
pub use puzzle::{Board, Move, GOAL};
pub use search::{Outcome, SearchNode, SearchReport, Solver};
pub use trace::{ConsoleTrace, NullTrace, TraceSink};
