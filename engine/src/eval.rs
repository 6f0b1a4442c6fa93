//! Gate evaluation.
//!
//! Every gate is a pure function of its input bits. NAND and NOR are built
//! from AND, OR and NOT rather than carrying their own tables.

use std::fmt;

use boolcalc_types::{Bit, Gate, GateError, InputPolicy};

/// Input bits for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inputs {
    One(Bit),
    Two(Bit, Bit),
}

impl Inputs {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Inputs::One(_) => 1,
            Inputs::Two(..) => 2,
        }
    }

    #[must_use]
    pub const fn first(self) -> Bit {
        match self {
            Inputs::One(a) | Inputs::Two(a, _) => a,
        }
    }

    #[must_use]
    pub const fn second(self) -> Option<Bit> {
        match self {
            Inputs::One(_) => None,
            Inputs::Two(_, b) => Some(b),
        }
    }
}

impl From<(Bit, Option<Bit>)> for Inputs {
    fn from((a, b): (Bit, Option<Bit>)) -> Self {
        match b {
            Some(b) => Inputs::Two(a, b),
            None => Inputs::One(a),
        }
    }
}

impl fmt::Display for Inputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inputs::One(a) => write!(f, "{a}"),
            Inputs::Two(a, b) => write!(f, "{a}, {b}"),
        }
    }
}

#[must_use]
pub fn not(a: Bit) -> Bit {
    !a
}

#[must_use]
pub fn and(a: Bit, b: Bit) -> Bit {
    Bit::from(a.is_high() && b.is_high())
}

#[must_use]
pub fn or(a: Bit, b: Bit) -> Bit {
    Bit::from(a.is_high() || b.is_high())
}

#[must_use]
pub fn xor(a: Bit, b: Bit) -> Bit {
    Bit::from(a != b)
}

#[must_use]
pub fn nand(a: Bit, b: Bit) -> Bit {
    not(and(a, b))
}

#[must_use]
pub fn nor(a: Bit, b: Bit) -> Bit {
    not(or(a, b))
}

/// Evaluate `gate` on `a` and, for two-input gates, `b`.
pub fn evaluate(gate: Gate, a: Bit, b: Option<Bit>) -> Result<Bit, GateError> {
    apply(gate, Inputs::from((a, b)))
}

pub fn apply(gate: Gate, inputs: Inputs) -> Result<Bit, GateError> {
    match (gate, inputs) {
        (Gate::Not, Inputs::One(a)) => Ok(not(a)),
        (Gate::And, Inputs::Two(a, b)) => Ok(and(a, b)),
        (Gate::Or, Inputs::Two(a, b)) => Ok(or(a, b)),
        (Gate::Xor, Inputs::Two(a, b)) => Ok(xor(a, b)),
        (Gate::Nand, Inputs::Two(a, b)) => Ok(nand(a, b)),
        (Gate::Nor, Inputs::Two(a, b)) => Ok(nor(a, b)),
        (gate, inputs) => Err(GateError::ArityMismatch {
            gate,
            expected: gate.arity().input_count(),
            found: inputs.count(),
        }),
    }
}

/// Evaluate from raw numbers, reading each through `policy` first.
pub fn evaluate_raw(
    gate: Gate,
    a: i64,
    b: Option<i64>,
    policy: InputPolicy,
) -> Result<Bit, GateError> {
    let a = policy.read_bit(a)?;
    let b = b.map(|b| policy.read_bit(b)).transpose()?;
    evaluate(gate, a, b)
}
