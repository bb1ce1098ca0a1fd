//! Canonical text rendering of formula trees.
//!
//! The rendering puts single spaces around chain operators and keeps every
//! explicit parenthesis, so feeding it back to the parser yields an equal tree.

use std::fmt;

use crate::ast::{ChainElement, Formula, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::NumberLiteral { value } => write!(f, "{value}"),
            Formula::Parenthesized { inner } => write!(f, "({inner})"),
            Formula::BinaryChain { elements } => {
                for ChainElement { operand, operator } in elements {
                    write!(f, "{operand}")?;
                    if let Some(op) = operator {
                        write!(f, " {op} ")?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_nested_groups() {
        let sum = Formula::chain(vec![
            ChainElement::new(Formula::number(1), Some(Operator::Add)),
            ChainElement::last(Formula::number(2)),
        ]);
        let formula = Formula::chain(vec![
            ChainElement::new(Formula::parenthesized(sum), Some(Operator::Mul)),
            ChainElement::last(Formula::number(3)),
        ]);

        assert_eq!(formula.to_string(), "(1 + 2) * 3");
    }

    #[test]
    fn renders_single_literal() {
        assert_eq!(Formula::number(42).to_string(), "42");
    }
}
