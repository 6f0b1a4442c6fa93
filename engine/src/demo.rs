//! Fixed walkthrough printed by `demo` mode.

use std::io::{self, Write};

use boolcalc_types::{Bit, Gate};

use crate::eval::{self, Inputs};
use crate::truth_table;

const H: Bit = Bit::High;
const L: Bit = Bit::Low;

/// Sample evaluations shown under "Individual Gate Computations".
const SAMPLES: &[(Gate, Inputs)] = &[
    (Gate::And, Inputs::Two(H, H)),
    (Gate::Or, Inputs::Two(L, H)),
    (Gate::Not, Inputs::One(H)),
    (Gate::Xor, Inputs::Two(H, H)),
    (Gate::Nand, Inputs::Two(H, H)),
    (Gate::Nor, Inputs::Two(L, L)),
];

/// One line of the XOR decomposition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorStep {
    pub a: Bit,
    pub b: Bit,
    pub or: Bit,
    pub and: Bit,
    pub nand: Bit,
    /// `(A OR B) AND NOT(A AND B)`.
    pub composed: Bit,
    pub xor: Bit,
}

#[must_use]
pub fn xor_decomposition() -> Vec<XorStep> {
    let mut steps = Vec::with_capacity(4);
    for a in Bit::ALL {
        for b in Bit::ALL {
            let or = eval::or(a, b);
            let and = eval::and(a, b);
            let nand = eval::not(and);
            steps.push(XorStep {
                a,
                b,
                or,
                and,
                nand,
                composed: eval::and(or, nand),
                xor: eval::xor(a, b),
            });
        }
    }
    steps
}

pub fn write_computations<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "=== Individual Gate Computations ===")?;
    for (gate, inputs) in SAMPLES {
        let result = eval::apply(*gate, *inputs)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        writeln!(out, "{gate}({inputs}) = {result}")?;
    }
    Ok(())
}

/// NOT(AND(1, 1)) evaluated one gate at a time.
pub fn write_combined_circuit<W: Write>(out: &mut W) -> io::Result<()> {
    let and_result = eval::and(H, H);
    let final_result = eval::not(and_result);
    writeln!(out, "=== Combined Circuit Example ===")?;
    writeln!(out, "Computing: NOT(AND(1, 1)) using separate gates")?;
    writeln!(out, "Step 1 - AND(1, 1) = {and_result}")?;
    writeln!(out, "Step 2 - NOT({and_result}) = {final_result}")?;
    writeln!(
        out,
        "This is equivalent to NAND(1, 1) = {}",
        eval::nand(H, H)
    )?;
    Ok(())
}

pub fn write_xor_decomposition<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "=== XOR Decomposition ===")?;
    writeln!(out, "XOR(A, B) = (A OR B) AND NOT(A AND B)")?;
    writeln!(out, "A | B | A OR B | A AND B | NOT(A AND B) | XOR")?;
    writeln!(out, "--|---|--------|---------|--------------|----")?;
    for step in xor_decomposition() {
        writeln!(
            out,
            "{} | {} |   {}    |    {}    |      {}       |  {}",
            step.a, step.b, step.or, step.and, step.nand, step.composed
        )?;
    }
    Ok(())
}

pub fn write_tables<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", truth_table::render_all())
}

/// Tables, sample computations, the combined circuit and the XOR breakdown.
pub fn write_demo<W: Write>(out: &mut W) -> io::Result<()> {
    write_tables(out)?;
    writeln!(out)?;
    write_computations(out)?;
    writeln!(out)?;
    write_combined_circuit(out)?;
    writeln!(out)?;
    write_xor_decomposition(out)?;
    tracing::debug!("Demo written");
    Ok(())
}
