use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;
use crate::puzzle::{goal_index, Board, EMPTY, GOAL, HUB, RIM};

/// Cost function used to order the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    UniformCost = 1,
    MisplacedTile = 2,
    ManhattanDistance = 3,
}

impl Method {
    pub const ALL: [Method; 3] = [
        Method::UniformCost,
        Method::MisplacedTile,
        Method::ManhattanDistance,
    ];

    pub fn evaluate(self, board: &Board) -> usize {
        match self {
            Method::UniformCost => 0,
            Method::MisplacedTile => misplaced_tiles(board),
            Method::ManhattanDistance => manhattan_distance(board),
        }
    }
}

impl TryFrom<u32> for Method {
    type Error = PuzzleError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Method::UniformCost),
            2 => Ok(Method::MisplacedTile),
            3 => Ok(Method::ManhattanDistance),
            _ => Err(PuzzleError::InvalidMethod(value.to_string())),
        }
    }
}

impl FromStr for Method {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "uniform" => Ok(Method::UniformCost),
            "2" | "misplaced" => Ok(Method::MisplacedTile),
            "3" | "manhattan" => Ok(Method::ManhattanDistance),
            _ => Err(PuzzleError::InvalidMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Method::UniformCost => "Uniform Cost Search",
            Method::MisplacedTile => "Misplaced Tile Heuristic",
            Method::ManhattanDistance => "Manhattan Distance Heuristic",
        };
        write!(f, "{}", s)
    }
}

/// Letters off their goal position. The empty space never counts.
fn misplaced_tiles(board: &Board) -> usize {
    board
        .cells()
        .iter()
        .zip(GOAL.cells())
        .filter(|&(&cell, &goal)| cell != goal && cell != EMPTY)
        .count()
}

/// Moves each symbol (the empty space included) would need on its own, taking
/// the cheaper of walking the rim and cutting through the center.
fn manhattan_distance(board: &Board) -> usize {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(i, &cell)| cell != GOAL.symbol(i))
        .filter_map(|(i, &cell)| goal_index(cell).map(|j| wheel_distance(i, j)))
        .sum()
}

fn wheel_distance(from: usize, to: usize) -> usize {
    let around = if from == HUB {
        1 + (to + 1) % 2
    } else {
        let d = from.abs_diff(to);
        d.min(RIM - d)
    };
    // in through one spoke and out through another; even positions step to a spoke first
    let through = 2 + (to + 1) % 2 + (from + 1) % 2;

    around.min(through)
}
