use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;

/// Number of positions around the rim.
pub const RIM: usize = 8;
/// Index of the center of the wheel.
pub const HUB: usize = 8;
pub const CELLS: usize = RIM + 1;
pub const EMPTY: u8 = b'_';

/// FLANDERS spelt clockwise around the rim, the center empty.
pub const GOAL: Board = Board {
    cells: *b"FLANDERS_",
};

/// Spokes connect the center to the odd rim positions only.
pub const SPOKES: [usize; 4] = [1, 3, 5, 7];

/// Direction the empty space travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Counterclockwise,
    Clockwise,
    ToHub,
    FromHub(usize),
}

impl Move {
    /// Index the empty space lands on when leaving `blank`, if the wheel allows it.
    pub fn target(&self, blank: usize) -> Option<usize> {
        match *self {
            Move::Counterclockwise if blank < RIM => Some((blank + RIM - 1) % RIM),
            Move::Clockwise if blank < RIM => Some((blank + 1) % RIM),
            Move::ToHub if is_spoke(blank) => Some(HUB),
            Move::FromHub(spoke) if blank == HUB && is_spoke(spoke) => Some(spoke),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Counterclockwise => write!(f, "Counterclockwise"),
            Move::Clockwise => write!(f, "Clockwise"),
            Move::ToHub => write!(f, "To center"),
            Move::FromHub(spoke) => write!(f, "From center to {}", spoke),
        }
    }
}

fn is_spoke(index: usize) -> bool {
    index < RIM && index % 2 == 1
}

/// Index at which `symbol` sits in the goal board.
pub fn goal_index(symbol: u8) -> Option<usize> {
    GOAL.cells.iter().position(|&c| c == symbol)
}

/// One configuration of the wheel: rim positions 0..8 clockwise, then the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; CELLS],
}

impl Board {
    pub fn new(symbols: &[u8]) -> Result<Self, PuzzleError> {
        if symbols.len() != CELLS {
            return Err(PuzzleError::InvalidLength(symbols.len()));
        }
        let text = String::from_utf8_lossy(symbols).into_owned();
        if !symbols.contains(&EMPTY) {
            return Err(PuzzleError::MissingEmpty(text));
        }

        let mut sorted = symbols.to_vec();
        sorted.sort_unstable();
        let mut expected = GOAL.cells;
        expected.sort_unstable();
        if sorted != expected {
            return Err(PuzzleError::SymbolMismatch(text));
        }

        let mut cells = [EMPTY; CELLS];
        cells.copy_from_slice(symbols);
        Ok(Self { cells })
    }

    /// Shuffles all nine symbols, retrying until the wheel can be solved.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cells = GOAL.cells;
        loop {
            cells.shuffle(rng);
            let board = Self { cells };
            if board.is_solvable() {
                return board;
            }
        }
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    pub fn symbol(&self, index: usize) -> u8 {
        self.cells[index]
    }

    pub fn hub(&self) -> u8 {
        self.cells[HUB]
    }

    /// Index of the empty space.
    pub fn blank(&self) -> usize {
        self.cells
            .iter()
            .position(|&c| c == EMPTY)
            .unwrap_or(HUB)
    }

    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Every swap of the empty space with a neighbour is a transposition, and the
    /// wheel graph is bipartite with the center on the even side, so a board is
    /// reachable from the goal exactly when the permutation parity matches the
    /// colour of the empty space.
    pub fn is_solvable(&self) -> bool {
        let targets: Vec<usize> = self
            .cells
            .iter()
            .filter_map(|&c| goal_index(c))
            .collect();
        let blank = self.blank();
        let blank_on_spoke = usize::from(is_spoke(blank));

        (count_inversions(&targets) + blank_on_spoke) % 2 == 0
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        let blank = self.blank();
        if blank == HUB {
            return SPOKES.iter().map(|&spoke| Move::FromHub(spoke)).collect();
        }

        let mut moves = vec![Move::Counterclockwise, Move::Clockwise];
        if is_spoke(blank) {
            moves.push(Move::ToHub);
        }
        moves
    }

    pub fn try_move(&self, movement: Move) -> Option<Self> {
        let blank = self.blank();
        let target = movement.target(blank)?;

        let mut cells = self.cells;
        cells.swap(blank, target);
        Some(Self { cells })
    }

    /// Boards one move away, in `legal_moves` order.
    pub fn successors(&self) -> Vec<Self> {
        self.legal_moves()
            .into_iter()
            .filter_map(|movement| self.try_move(movement))
            .collect()
    }
}

fn count_inversions(values: &[usize]) -> usize {
    values
        .iter()
        .enumerate()
        .map(|(i, &val)| values[i + 1..].iter().filter(|&&next| next < val).count())
        .sum()
}

impl FromStr for Board {
    type Err = PuzzleError;

    /// Rim letters clockwise from position 0 followed by the center, e.g. `FLAN_DRSE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim().as_bytes())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rim: Vec<String> = self.cells[..RIM]
            .iter()
            .map(|&c| char::from(c).to_string())
            .collect();
        writeln!(f, "{}", rim.join(" "))?;

        writeln!(f, "  {}", ["|"; SPOKES.len()].join("   "))?;

        write!(f, "center: {}", char::from(self.hub()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn parses_rim_then_center() {
        let b = board("FLAN_DRSE");
        assert_eq!(b.symbol(0), b'F');
        assert_eq!(b.blank(), 4);
        assert_eq!(b.hub(), b'E');
        assert!(board("FLANDERS_").is_goal());
    }

    #[test]
    fn rejects_malformed_boards() {
        assert!(matches!(
            "FLANDERS".parse::<Board>(),
            Err(PuzzleError::InvalidLength(8))
        ));
        assert!(matches!(
            "FLANDERSX".parse::<Board>(),
            Err(PuzzleError::MissingEmpty(_))
        ));
        assert!(matches!(
            "FFANDERS_".parse::<Board>(),
            Err(PuzzleError::SymbolMismatch(_))
        ));
        assert!(matches!(
            "FLANDER__".parse::<Board>(),
            Err(PuzzleError::SymbolMismatch(_))
        ));
    }

    #[test]
    fn successor_counts_follow_the_spokes() {
        assert_eq!(GOAL.successors().len(), 4);
        assert_eq!(board("F_ANDERSL").successors().len(), 3);
        assert_eq!(board("FLAN_DRSE").successors().len(), 2);
        for spoke in SPOKES {
            let mut cells = GOAL.cells;
            cells.swap(spoke, HUB);
            assert_eq!(Board { cells }.successors().len(), 3);
        }
    }

    #[test]
    fn center_moves_out_along_odd_spokes() {
        let next = GOAL.successors();
        assert_eq!(next[0], board("F_ANDERSL"));
        assert_eq!(next[1], board("FLA_DERSN"));
        assert_eq!(next[2], board("FLAND_RSE"));
        assert_eq!(next[3], board("FLANDER_S"));
    }

    #[test]
    fn rim_moves_wrap_around() {
        let b = board("_LANDERSF");
        assert_eq!(b.try_move(Move::Counterclockwise), Some(board("SLANDER_F")));
        assert_eq!(b.try_move(Move::Clockwise), Some(board("L_ANDERSF")));
        assert_eq!(b.try_move(Move::ToHub), None);
        assert_eq!(b.try_move(Move::FromHub(1)), None);

        let b = board("FLANDER_S");
        assert_eq!(b.try_move(Move::Clockwise), Some(board("_LANDERFS")));
        assert_eq!(b.try_move(Move::ToHub), Some(GOAL));
    }

    #[test]
    fn moves_are_reversible() {
        let mut frontier = vec![GOAL];
        for _ in 0..4 {
            let mut next = Vec::new();
            for b in &frontier {
                for s in b.successors() {
                    assert!(s.successors().contains(b), "{} does not lead back", s);
                    next.push(s);
                }
            }
            frontier = next;
        }
    }

    #[test]
    fn moves_keep_the_symbol_set() {
        let start = board("DFLANERS_");
        for s in start.successors() {
            assert!(Board::new(s.cells()).is_ok());
            assert_eq!(s.cells().iter().filter(|&&c| c == EMPTY).count(), 1);
        }
        assert_eq!(start, board("DFLANERS_"));
    }

    #[test]
    fn parity_decides_solvability() {
        for s in ["FLANDERS_", "FLAN_DRSE", "FLAENDRS_", "FLAENRSD_", "DFLANERS_", "F_ANDERSL"] {
            assert!(board(s).is_solvable(), "{}", s);
        }
        assert!(!board("LFANDERS_").is_solvable());
        assert!(!board("FLAN_DRES").is_solvable());
    }

    #[test]
    fn shuffled_boards_are_solvable() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(Board::shuffled(&mut rng).is_solvable());
        }
    }

    #[test]
    fn renders_rim_spokes_and_center() {
        assert_eq!(
            board("FLAN_DRSE").to_string(),
            "F L A N _ D R S\n  |   |   |   |\ncenter: E"
        );
    }
}
