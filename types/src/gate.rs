//! Logic gate enumeration and arity.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::bit::InvalidBitError;

/// The six supported boolean operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    And,
    Or,
    Not,
    Xor,
    Nand,
    Nor,
}

/// Number of inputs a gate consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    #[must_use]
    pub const fn input_count(self) -> usize {
        match self {
            Arity::Unary => 1,
            Arity::Binary => 2,
        }
    }
}

const GATE_PARSE_VALUES: &[&str] = &["and", "or", "not", "xor", "nand", "nor"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation '{raw}'; expected one of: {expected:?}")]
pub struct UnknownGateError {
    raw: String,
    expected: &'static [&'static str],
}

impl UnknownGateError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub const fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

/// Failure to evaluate a gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidBitError),
    #[error(transparent)]
    UnknownOperation(#[from] UnknownGateError),
    #[error("{gate} takes {expected} input(s), got {found}")]
    ArityMismatch {
        gate: Gate,
        expected: usize,
        found: usize,
    },
}

impl Gate {
    #[must_use]
    pub const fn all() -> &'static [Gate] {
        &[
            Gate::And,
            Gate::Or,
            Gate::Not,
            Gate::Xor,
            Gate::Nand,
            Gate::Nor,
        ]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Gate::And => "AND",
            Gate::Or => "OR",
            Gate::Not => "NOT",
            Gate::Xor => "XOR",
            Gate::Nand => "NAND",
            Gate::Nor => "NOR",
        }
    }

    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Gate::Not => Arity::Unary,
            Gate::And | Gate::Or | Gate::Xor | Gate::Nand | Gate::Nor => Arity::Binary,
        }
    }

    /// Parse a gate from its name, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, UnknownGateError> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "and" => Ok(Gate::And),
            "or" => Ok(Gate::Or),
            "not" => Ok(Gate::Not),
            "xor" => Ok(Gate::Xor),
            "nand" => Ok(Gate::Nand),
            "nor" => Ok(Gate::Nor),
            _ => Err(UnknownGateError {
                raw: trimmed.to_string(),
                expected: GATE_PARSE_VALUES,
            }),
        }
    }
}

impl FromStr for Gate {
    type Err = UnknownGateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gate::parse(s)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
