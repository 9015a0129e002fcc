use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use log::{debug, info, trace};

use crate::heuristic::Method;
use crate::puzzle::Board;
use crate::trace::TraceSink;

/// A board on the frontier with its path cost `depth` (g) and estimate `heuristic` (h).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub board: Board,
    pub depth: usize,
    pub heuristic: usize,
    order: u64,
}

impl SearchNode {
    pub fn new(board: Board, depth: usize, heuristic: usize) -> Self {
        Self {
            board,
            depth,
            heuristic,
            order: 0,
        }
    }

    /// f = g + h
    pub fn cost(&self) -> usize {
        self.depth + self.heuristic
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reversed for `BinaryHeap`: lowest cost first, then first pushed.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost()
            .cmp(&self.cost())
            .then_with(|| other.order.cmp(&self.order))
    }
}

#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<SearchNode>,
    pushed: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut node: SearchNode) {
        node.order = self.pushed;
        self.pushed += 1;
        self.heap.push(node);
    }

    pub fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved { depth: usize },
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: Outcome,
    pub expansions: usize,
    pub max_frontier: usize,
    /// Distinct boards ever put on the frontier.
    pub visited: usize,
}

impl SearchReport {
    pub fn depth(&self) -> Option<usize> {
        match self.outcome {
            Outcome::Solved { depth } => Some(depth),
            Outcome::Exhausted => None,
        }
    }
}

/// Best-first search over wheel boards. A board is closed as soon as it is
/// enqueued; later paths to it are dropped.
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    method: Method,
}

impl Solver {
    pub fn new(method: Method) -> Self {
        Self { method }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn solve<T: TraceSink + ?Sized>(&self, start: Board, sink: &mut T) -> SearchReport {
        debug!("solving {:?} with {}", start, self.method);

        let mut frontier = Frontier::new();
        let mut visited = HashSet::new();
        frontier.push(SearchNode::new(start, 0, self.method.evaluate(&start)));
        visited.insert(start);

        let mut expansions = 0;
        let mut max_frontier = 1;

        while let Some(curr) = frontier.pop() {
            trace!(
                "expanding g={} h={} frontier={}",
                curr.depth,
                curr.heuristic,
                frontier.len()
            );
            sink.expanding(&curr);

            if curr.board.is_goal() {
                let report = SearchReport {
                    outcome: Outcome::Solved { depth: curr.depth },
                    expansions,
                    max_frontier,
                    visited: visited.len(),
                };
                info!(
                    "goal reached at depth {} after {} expansions",
                    curr.depth, expansions
                );
                sink.finished(&report);
                return report;
            }

            for next in curr.board.successors() {
                if !visited.insert(next) {
                    continue;
                }
                let child = SearchNode::new(next, curr.depth + 1, self.method.evaluate(&next));
                sink.enqueued(&curr, &child);
                frontier.push(child);
            }

            max_frontier = max_frontier.max(frontier.len());
            expansions += 1;
        }

        let report = SearchReport {
            outcome: Outcome::Exhausted,
            expansions,
            max_frontier,
            visited: visited.len(),
        };
        info!("frontier exhausted after {} expansions", expansions);
        sink.finished(&report);
        report
    }
}
