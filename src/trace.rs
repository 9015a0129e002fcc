use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::search::{Outcome, SearchNode, SearchReport};

/// Receives the progress of a search as it happens.
pub trait TraceSink {
    /// A node was popped from the frontier.
    fn expanding(&mut self, node: &SearchNode);

    /// `child` was generated from `parent` and put on the frontier.
    fn enqueued(&mut self, _parent: &SearchNode, _child: &SearchNode) {}

    fn finished(&mut self, report: &SearchReport);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn expanding(&mut self, _node: &SearchNode) {}

    fn finished(&mut self, _report: &SearchReport) {}
}

/// Prints every expansion and the final summary to a terminal or any writer.
pub struct ConsoleTrace<W: Write> {
    out: W,
    styled: bool,
    quiet: bool,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleTrace<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            styled: false,
            quiet: false,
            error: None,
        }
    }

    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Only print the summary.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Returns the writer, or the first write error hit while tracing.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_node(&mut self, node: &SearchNode) -> io::Result<()> {
        let headline = format!(
            "The best state to expand with a g(n) = {} and h(n) = {} is...",
            node.depth, node.heuristic
        );
        if self.styled {
            writeln!(self.out, "{}", headline.bold())?;
        } else {
            writeln!(self.out, "{}", headline)?;
        }
        writeln!(self.out, "{}", node.board)
    }

    fn write_report(&mut self, report: &SearchReport) -> io::Result<()> {
        match report.outcome {
            Outcome::Solved { depth } => {
                let headline = format!("Goal state achieved after {} expansions", report.expansions);
                if self.styled {
                    writeln!(self.out, "{}", headline.green().bold())?;
                } else {
                    writeln!(self.out, "{}", headline)?;
                }
                writeln!(self.out, "Max queue size: {}", report.max_frontier)?;
                writeln!(self.out, "Solution depth: {}", depth)
            }
            Outcome::Exhausted => {
                let headline = format!(
                    "Failed to find a solution after {} expansions",
                    report.expansions
                );
                if self.styled {
                    writeln!(self.out, "{}", headline.red().bold())
                } else {
                    writeln!(self.out, "{}", headline)
                }
            }
        }
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }
}

impl<W: Write> TraceSink for ConsoleTrace<W> {
    fn expanding(&mut self, node: &SearchNode) {
        if self.quiet || self.error.is_some() {
            return;
        }
        let result = self.write_node(node);
        self.record(result);
    }

    fn finished(&mut self, report: &SearchReport) {
        if self.error.is_some() {
            return;
        }
        let result = self.write_report(report);
        self.record(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::Method;
    use crate::puzzle::{Board, GOAL};
    use crate::search::Solver;

    fn run(start: &str, quiet: bool) -> String {
        let start: Board = start.parse().unwrap();
        let mut sink = ConsoleTrace::new(Vec::new()).quiet(quiet);
        Solver::new(Method::ManhattanDistance).solve(start, &mut sink);
        String::from_utf8(sink.finish().unwrap()).unwrap()
    }

    #[test]
    fn prints_each_expansion_and_the_summary() {
        let output = run("F_ANDERSL", false);
        assert_eq!(
            output,
            "The best state to expand with a g(n) = 0 and h(n) = 2 is...\n\
             F _ A N D E R S\n  |   |   |   |\ncenter: L\n\
             The best state to expand with a g(n) = 1 and h(n) = 0 is...\n\
             F L A N D E R S\n  |   |   |   |\ncenter: _\n\
             Goal state achieved after 1 expansions\n\
             Max queue size: 3\n\
             Solution depth: 1\n"
        );
    }

    #[test]
    fn quiet_prints_only_the_summary() {
        let output = run("FLANDERS_", true);
        assert_eq!(
            output,
            "Goal state achieved after 0 expansions\nMax queue size: 1\nSolution depth: 0\n"
        );
    }

    #[test]
    fn reports_failure() {
        let mut sink = ConsoleTrace::new(Vec::new());
        sink.finished(&SearchReport {
            outcome: Outcome::Exhausted,
            expansions: 12,
            max_frontier: 4,
            visited: 12,
        });
        let output = String::from_utf8(sink.finish().unwrap()).unwrap();
        assert_eq!(output, "Failed to find a solution after 12 expansions\n");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn keeps_the_first_write_error() {
        let mut sink = ConsoleTrace::new(Broken);
        Solver::new(Method::UniformCost).solve(GOAL, &mut sink);
        assert_eq!(
            sink.finish().err().map(|e| e.kind()),
            Some(io::ErrorKind::BrokenPipe)
        );
    }
}
