//! Gate evaluator properties

use boolcalc_engine::{Bit, Gate, GateError, Inputs, TruthTable, eval, evaluate};

fn pairs() -> impl Iterator<Item = (Bit, Bit)> {
    Bit::ALL
        .into_iter()
        .flat_map(|a| Bit::ALL.into_iter().map(move |b| (a, b)))
}

fn eval2(gate: Gate, a: Bit, b: Bit) -> Bit {
    evaluate(gate, a, Some(b)).unwrap()
}

#[test]
fn and_is_high_only_when_both_high() {
    for (a, b) in pairs() {
        let expected = a == Bit::High && b == Bit::High;
        assert_eq!(eval2(Gate::And, a, b).is_high(), expected, "{a} AND {b}");
    }
}

#[test]
fn or_is_high_when_either_high() {
    for (a, b) in pairs() {
        let expected = a == Bit::High || b == Bit::High;
        assert_eq!(eval2(Gate::Or, a, b).is_high(), expected, "{a} OR {b}");
    }
}

#[test]
fn xor_is_high_when_inputs_differ() {
    for (a, b) in pairs() {
        assert_eq!(eval2(Gate::Xor, a, b).is_high(), a != b, "{a} XOR {b}");
    }
}

#[test]
fn not_is_one_minus_input() {
    for a in Bit::ALL {
        let result = evaluate(Gate::Not, a, None).unwrap();
        assert_eq!(i64::from(result), 1 - i64::from(a));
    }
}

#[test]
fn nand_and_nor_compose_from_not() {
    for (a, b) in pairs() {
        let not_and = evaluate(Gate::Not, eval2(Gate::And, a, b), None).unwrap();
        let not_or = evaluate(Gate::Not, eval2(Gate::Or, a, b), None).unwrap();
        assert_eq!(eval2(Gate::Nand, a, b), not_and);
        assert_eq!(eval2(Gate::Nor, a, b), not_or);
    }
}

#[test]
fn evaluation_is_repeatable() {
    for gate in Gate::all() {
        for (a, b) in pairs() {
            let b = (gate.arity().input_count() == 2).then_some(b);
            assert_eq!(evaluate(*gate, a, b), evaluate(*gate, a, b));
        }
    }
}

#[test]
fn tables_enumerate_in_row_major_order() {
    for gate in Gate::all() {
        let inputs: Vec<Inputs> = TruthTable::new(*gate).rows().map(|row| row.inputs).collect();
        if *gate == Gate::Not {
            assert_eq!(inputs, vec![Inputs::One(Bit::Low), Inputs::One(Bit::High)]);
        } else {
            assert_eq!(inputs, pairs().map(|(a, b)| Inputs::Two(a, b)).collect::<Vec<_>>());
        }
    }
}

#[test]
fn table_outputs_agree_with_evaluate() {
    for gate in Gate::all() {
        for row in TruthTable::new(*gate) {
            assert_eq!(eval::apply(*gate, row.inputs), Ok(row.output));
        }
    }
}

#[test]
fn unknown_operation_name() {
    let err: GateError = "implies".parse::<Gate>().unwrap_err().into();
    match err {
        GateError::UnknownOperation(e) => assert_eq!(e.raw(), "implies"),
        other => panic!("unexpected error: {other:?}"),
    }
}
