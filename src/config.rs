use std::fmt;
use std::str::FromStr;

use clap::Parser;

use crate::error::PuzzleError;
use crate::heuristic::Method;
use crate::puzzle::Board;

/// Built-in start boards, easiest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::One, Preset::Two, Preset::Three, Preset::Four];

    pub fn layout(self) -> &'static str {
        match self {
            Preset::One => "FLAN_DRSE",
            Preset::Two => "FLAENDRS_",
            Preset::Three => "FLAENRSD_",
            Preset::Four => "DFLANERS_",
        }
    }

    pub fn board(self) -> Result<Board, PuzzleError> {
        self.layout().parse()
    }
}

impl TryFrom<u32> for Preset {
    type Error = PuzzleError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Preset::One),
            2 => Ok(Preset::Two),
            3 => Ok(Preset::Three),
            4 => Ok(Preset::Four),
            _ => Err(PuzzleError::InvalidPreset(value.to_string())),
        }
    }
}

impl FromStr for Preset {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| PuzzleError::InvalidPreset(s.to_string()))?;
        Preset::try_from(value)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u32)
    }
}

/// Solve the FLANDERS wheel puzzle with a best-first search.
///
/// Anything not given on the command line is asked for interactively.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Built-in puzzle, 1 (easiest) to 4
    #[arg(short, long, conflicts_with_all = ["board", "random"])]
    pub difficulty: Option<Preset>,

    /// Rim letters clockwise followed by the center letter, '_' is the empty space (e.g. FLAN_DRSE)
    #[arg(short, long, conflicts_with = "random")]
    pub board: Option<Board>,

    /// Start from a random solvable board
    #[arg(short, long)]
    pub random: bool,

    /// Seed for --random
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// 1 (uniform), 2 (misplaced) or 3 (manhattan)
    #[arg(short, long)]
    pub algorithm: Option<Method>,

    /// Print only the summary, not every expansion
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
