//! Interactive menu loop.
//!
//! A [`Session`] reads whitespace-separated tokens from any `BufRead` and
//! writes prompts and results to any `Write`. Bad input is reported and the
//! menu is shown again; only IO failures end the loop with an error.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use boolcalc_types::{
    Arity, Bit, Gate, GateError, InputPolicy, InvalidBitError, ParseError, parse_number,
};

use crate::eval::{self, Inputs};
use crate::menu::{self, FAREWELL, INVALID_CHOICE, MenuChoice};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked Exit.
    Exit,
    /// Input ran out before Exit was chosen.
    EndOfInput,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub evaluations: usize,
    pub invalid_choices: usize,
    pub input_errors: usize,
}

/// Anything that cuts a turn short.
#[derive(Debug, Error)]
enum TurnError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("end of input")]
    EndOfInput,
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    InvalidBit(#[from] InvalidBitError),
    #[error(transparent)]
    Gate(#[from] GateError),
}

enum Step {
    Continue,
    Finished(SessionEnd),
}

/// Splits lines into tokens, carrying leftovers across reads.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Bytes that are not UTF-8 become replacement characters, so they reach
    /// the number parser as an ordinary bad token.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        let mut line = Vec::new();
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
    }

    fn discard_pending(&mut self) {
        self.pending.clear();
    }
}

pub struct Session<R, W> {
    tokens: Tokens<R>,
    out: W,
    policy: InputPolicy,
    stats: SessionStats,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            tokens: Tokens::new(input),
            out,
            policy: InputPolicy::default(),
            stats: SessionStats::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Show the menu and handle selections until Exit or end of input.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        tracing::debug!(policy = self.policy.as_str(), "Session started");
        loop {
            menu::write_menu(&mut self.out)?;
            if let Step::Finished(end) = self.step()? {
                tracing::info!(
                    ?end,
                    evaluations = self.stats.evaluations,
                    invalid_choices = self.stats.invalid_choices,
                    input_errors = self.stats.input_errors,
                    "Session finished"
                );
                return Ok(end);
            }
        }
    }

    fn step(&mut self) -> io::Result<Step> {
        let number = match self.read_number() {
            Ok(number) => number,
            Err(err) => return self.recover(err),
        };

        match MenuChoice::from_number(number) {
            Some(MenuChoice::Operation(gate)) => match self.perform(gate) {
                Ok(()) => Ok(Step::Continue),
                Err(err) => self.recover(err),
            },
            Some(MenuChoice::Exit) => {
                writeln!(self.out, "{FAREWELL}")?;
                self.out.flush()?;
                Ok(Step::Finished(SessionEnd::Exit))
            }
            None => {
                self.stats.invalid_choices += 1;
                tracing::debug!(number, "Invalid menu choice");
                writeln!(self.out, "{INVALID_CHOICE}")?;
                Ok(Step::Continue)
            }
        }
    }

    fn perform(&mut self, gate: Gate) -> Result<(), TurnError> {
        let inputs = match gate.arity() {
            Arity::Unary => Inputs::One(self.read_bit("Input")?),
            Arity::Binary => {
                let a = self.read_bit("Input A")?;
                let b = self.read_bit("Input B")?;
                Inputs::Two(a, b)
            }
        };

        let result = eval::apply(gate, inputs)?;
        self.stats.evaluations += 1;
        tracing::debug!(%gate, %inputs, %result, "Evaluated");

        writeln!(self.out, "Result: {result}")?;
        match inputs {
            Inputs::One(a) => writeln!(self.out, "{gate} {a} = {result}")?,
            Inputs::Two(a, b) => writeln!(self.out, "{a} {gate} {b} = {result}")?,
        }
        Ok(())
    }

    fn read_bit(&mut self, name: &str) -> Result<Bit, TurnError> {
        write!(self.out, "{name} (0 or 1): ")?;
        self.out.flush()?;
        let number = self.read_number()?;
        Ok(self.policy.read_bit(number)?)
    }

    fn read_number(&mut self) -> Result<i64, TurnError> {
        let token = self.tokens.next_token()?.ok_or(TurnError::EndOfInput)?;
        Ok(parse_number(&token)?)
    }

    /// Report a cut-short turn; IO errors propagate, everything else returns to the menu.
    fn recover(&mut self, err: TurnError) -> io::Result<Step> {
        match err {
            TurnError::Io(err) => Err(err),
            TurnError::EndOfInput => {
                writeln!(self.out)?;
                self.out.flush()?;
                Ok(Step::Finished(SessionEnd::EndOfInput))
            }
            TurnError::Parse(err) => {
                self.note_input_error(&err);
                writeln!(
                    self.out,
                    "Invalid input '{}': {}.",
                    err.raw(),
                    err.kind().expected()
                )?;
                Ok(Step::Continue)
            }
            TurnError::InvalidBit(err) => {
                self.note_input_error(&err);
                writeln!(self.out, "Invalid input {}: expected 0 or 1.", err.value())?;
                Ok(Step::Continue)
            }
            TurnError::Gate(err) => {
                self.note_input_error(&err);
                writeln!(self.out, "Error: {err}")?;
                Ok(Step::Continue)
            }
        }
    }

    fn note_input_error(&mut self, err: &dyn std::error::Error) {
        self.stats.input_errors += 1;
        self.tokens.discard_pending();
        tracing::warn!(error = %err, "Rejected input");
    }
}
