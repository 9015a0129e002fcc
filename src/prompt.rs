use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::config::Preset;
use crate::error::PuzzleError;
use crate::heuristic::Method;
use crate::puzzle::Board;

/// Asks for whatever the command line left out, one whitespace-separated
/// answer per question.
pub struct Prompt<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn start_board(&mut self) -> Result<Board, PuzzleError> {
        self.say("Type 1 to use a default puzzle, or 2 to create a custom")?;
        if self.number()? == 1 {
            self.say("Choose a difficulty from 1 to 4")?;
            let token = self.token()?;
            return token.parse::<Preset>()?.board();
        }

        self.say("Enter the capital letters as they appear around the wheel, let '_' denote the empty space")?;
        let mut layout = self.token()?;
        self.say("Enter the letter in the center")?;
        layout.push_str(&self.token()?);
        layout.parse()
    }

    pub fn method(&mut self) -> Result<Method, PuzzleError> {
        self.say("Select algorithm")?;
        for method in Method::ALL {
            self.say(&format!("{}) {}", method as u32, method))?;
        }
        self.token()?.parse()
    }

    fn say(&mut self, line: &str) -> Result<(), PuzzleError> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    fn number(&mut self) -> Result<u32, PuzzleError> {
        let token = self.token()?;
        token
            .parse()
            .map_err(|_| PuzzleError::InvalidNumber(token))
    }

    fn token(&mut self) -> Result<String, PuzzleError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PuzzleError::UnexpectedEof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
