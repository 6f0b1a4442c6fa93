//! Truth-table enumeration and rendering.

use std::iter::FusedIterator;

use boolcalc_types::{Arity, Bit, Gate};

use crate::eval::{self, Inputs};

/// One line of a truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub inputs: Inputs,
    pub output: Bit,
}

/// The truth table of a single gate.
///
/// Holds no rows itself; each call to [`TruthTable::rows`] starts a fresh
/// enumeration with `a` as the outer input and `b` as the inner one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthTable {
    gate: Gate,
}

impl TruthTable {
    #[must_use]
    pub const fn new(gate: Gate) -> Self {
        Self { gate }
    }

    #[must_use]
    pub const fn gate(self) -> Gate {
        self.gate
    }

    #[must_use]
    pub const fn len(self) -> usize {
        1 << self.gate.arity().input_count()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    #[must_use]
    pub fn rows(self) -> Rows {
        Rows {
            gate: self.gate,
            next: 0,
        }
    }

    /// Render the table the way the `tables` and `demo` modes print it.
    #[must_use]
    pub fn render(self) -> String {
        let mut lines = vec![format!("=== {} Truth Table ===", self.gate)];
        match self.gate.arity() {
            Arity::Unary => {
                lines.push("Input | Output".to_string());
                lines.push("------|-------".to_string());
                for row in self.rows() {
                    lines.push(format!("  {}   |   {}", row.inputs.first(), row.output));
                }
            }
            Arity::Binary => {
                lines.push("A | B | Output".to_string());
                lines.push("--|---|-------".to_string());
                for row in self.rows() {
                    if let Inputs::Two(a, b) = row.inputs {
                        lines.push(format!("{a} | {b} |   {}", row.output));
                    }
                }
            }
        }
        lines.join("\n")
    }
}

impl IntoIterator for TruthTable {
    type Item = Row;
    type IntoIter = Rows;

    fn into_iter(self) -> Self::IntoIter {
        self.rows()
    }
}

/// Iterator over the rows of a [`TruthTable`].
#[derive(Debug, Clone)]
pub struct Rows {
    gate: Gate,
    next: usize,
}

impl Rows {
    fn inputs_at(&self, index: usize) -> Inputs {
        match self.gate.arity() {
            Arity::Unary => Inputs::One(Bit::ALL[index]),
            Arity::Binary => Inputs::Two(Bit::ALL[index / 2], Bit::ALL[index % 2]),
        }
    }

    fn total(&self) -> usize {
        TruthTable::new(self.gate).len()
    }
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total() {
            return None;
        }
        let inputs = self.inputs_at(self.next);
        self.next += 1;
        // Inputs are built from the gate's own arity, so this cannot mismatch.
        let output = eval::apply(self.gate, inputs).ok()?;
        Some(Row { inputs, output })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows {}

impl FusedIterator for Rows {}

/// Render every gate's table, separated by blank lines.
#[must_use]
pub fn render_all() -> String {
    Gate::all()
        .iter()
        .map(|gate| TruthTable::new(*gate).render())
        .collect::<Vec<_>>()
        .join("\n\n")
}
