use krypto_ast::{ChainElement, Formula, Operator, Visitable, Visitor};

/// Reduces a formula to an `f64`.
///
/// Each chain holds a single precedence tier, so operators are applied left
/// to right with no precedence handling. Division follows IEEE-754: dividing
/// by zero gives an infinity or NaN instead of failing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Visitor for Evaluator {
    type Output = f64;

    fn visit_number(&mut self, value: u64) -> f64 {
        value as f64
    }

    fn visit_chain(&mut self, elements: &[ChainElement]) -> f64 {
        let Some((first, rest)) = elements.split_first() else {
            log::warn!("evaluating an empty chain");
            return f64::NAN;
        };

        let mut result = first.operand.accept(self);
        let mut pending = first.operator;
        for element in rest {
            let rhs = element.operand.accept(self);
            if let Some(op) = pending {
                result = apply(op, result, rhs);
            }
            pending = element.operator;
        }
        result
    }
}

fn apply(op: Operator, lhs: f64, rhs: f64) -> f64 {
    match op {
        Operator::Add => lhs + rhs,
        Operator::Sub => lhs - rhs,
        Operator::Mul => lhs * rhs,
        Operator::Div => lhs / rhs,
    }
}

/// Evaluates `formula`. Never fails; an empty chain evaluates to NaN.
pub fn compute_formula(formula: &Formula) -> f64 {
    formula.accept(&mut Evaluator)
}
