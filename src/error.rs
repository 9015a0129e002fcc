use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("a board has 9 cells (8 rim letters and the center), got {0}")]
    InvalidLength(usize),
    #[error("board {0:?} has no empty space '_'")]
    MissingEmpty(String),
    #[error("board {0:?} must use each of F, L, A, N, D, E, R, S and '_' exactly once")]
    SymbolMismatch(String),
    #[error("unknown algorithm {0:?}, choose 1 (uniform cost), 2 (misplaced tile) or 3 (manhattan distance)")]
    InvalidMethod(String),
    #[error("unknown difficulty {0:?}, choose a difficulty from 1 to 4")]
    InvalidPreset(String),
    #[error("expected a number, got {0:?}")]
    InvalidNumber(String),
    #[error("input ended before the puzzle was fully described")]
    UnexpectedEof,
    #[error(transparent)]
    Io(#[from] io::Error),
}
