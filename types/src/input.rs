//! Raw numeric input handling.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bit::{Bit, InvalidBitError};

/// How numbers outside {0, 1} are treated when read as a [`Bit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Reject anything other than 0 or 1.
    #[default]
    Strict,
    /// Exactly 1 is high; every other number is low.
    Permissive,
}

impl InputPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }

    pub fn read_bit(self, value: i64) -> Result<Bit, InvalidBitError> {
        match self {
            Self::Strict => Bit::try_from(value),
            Self::Permissive => Ok(Bit::from_lenient(value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    NotANumber,
    /// A whole number too large for any input, let alone a bit.
    OutOfRange,
}

impl ParseErrorKind {
    /// What the user should have typed instead.
    #[must_use]
    pub const fn expected(self) -> &'static str {
        match self {
            Self::NotANumber => "expected a whole number",
            Self::OutOfRange => "expected 0 or 1",
        }
    }
}

/// A token that cannot be read as an input number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input '{raw}': {}", .kind.expected())]
pub struct ParseError {
    raw: String,
    kind: ParseErrorKind,
}

impl ParseError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

pub fn parse_number(token: &str) -> Result<i64, ParseError> {
    token.trim().parse::<i64>().map_err(|e| {
        let kind = match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseErrorKind::OutOfRange,
            _ => ParseErrorKind::NotANumber,
        };
        ParseError {
            raw: token.to_string(),
            kind,
        }
    })
}
