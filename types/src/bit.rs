//! Single binary digit.

use std::fmt;
use std::ops::Not;

use thiserror::Error;

/// A value constrained to {0, 1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Bit {
    #[default]
    Low,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid input {value}: expected 0 or 1")]
pub struct InvalidBitError {
    value: i64,
}

impl InvalidBitError {
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }
}

impl Bit {
    /// Both values in ascending order.
    pub const ALL: [Bit; 2] = [Bit::Low, Bit::High];

    /// Read a raw number the lenient way: exactly `1` is high, anything else is low.
    #[must_use]
    pub const fn from_lenient(value: i64) -> Self {
        if value == 1 { Bit::High } else { Bit::Low }
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Bit::Low => 0,
            Bit::High => 1,
        }
    }

    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Bit::High)
    }
}

impl TryFrom<i64> for Bit {
    type Error = InvalidBitError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Low),
            1 => Ok(Bit::High),
            _ => Err(InvalidBitError { value }),
        }
    }
}

impl From<Bit> for i64 {
    fn from(bit: Bit) -> Self {
        i64::from(bit.as_u8())
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value { Bit::High } else { Bit::Low }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_high()
    }
}

impl Not for Bit {
    type Output = Bit;

    fn not(self) -> Self::Output {
        match self {
            Bit::Low => Bit::High,
            Bit::High => Bit::Low,
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
