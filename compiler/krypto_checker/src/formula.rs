//! Binary formula trees used by the solver.
//!
//! Unlike the player-facing parsed `Formula`, these trees have one
//! operator per node and are generated rather than parsed. An
//! [`IndexFormula`] refers to card positions; [`SolutionFormula::assign`]
//! fills them with card values.

use std::fmt;

use num_rational::Rational64;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::ZeroDivisionError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SolutionFormula<T> {
    #[serde(rename = "leaf")]
    Leaf(T),
    #[serde(rename = "add")]
    Add {
        lhs: Box<SolutionFormula<T>>,
        rhs: Box<SolutionFormula<T>>,
    },
    #[serde(rename = "sub")]
    Sub {
        lhs: Box<SolutionFormula<T>>,
        rhs: Box<SolutionFormula<T>>,
    },
    #[serde(rename = "mul")]
    Mul {
        lhs: Box<SolutionFormula<T>>,
        rhs: Box<SolutionFormula<T>>,
    },
    #[serde(rename = "div")]
    Div {
        lhs: Box<SolutionFormula<T>>,
        rhs: Box<SolutionFormula<T>>,
    },
}

/// A tree whose leaves are positions into a hand.
pub type IndexFormula = SolutionFormula<usize>;
/// A tree whose leaves are card values.
pub type AssignedFormula = SolutionFormula<i64>;

impl<T> SolutionFormula<T> {
    /// Evaluates exactly, reading each leaf through `leaf`.
    fn fold(&self, leaf: &impl Fn(&T) -> i64) -> Result<Rational64, ZeroDivisionError> {
        match self {
            SolutionFormula::Leaf(value) => Ok(Rational64::from_integer(leaf(value))),
            SolutionFormula::Add { lhs, rhs } => Ok(lhs.fold(leaf)? + rhs.fold(leaf)?),
            SolutionFormula::Sub { lhs, rhs } => Ok(lhs.fold(leaf)? - rhs.fold(leaf)?),
            SolutionFormula::Mul { lhs, rhs } => Ok(lhs.fold(leaf)? * rhs.fold(leaf)?),
            SolutionFormula::Div { lhs, rhs } => {
                let lhs = lhs.fold(leaf)?;
                let rhs = rhs.fold(leaf)?;
                if rhs.is_zero() {
                    return Err(ZeroDivisionError);
                }
                Ok(lhs / rhs)
            }
        }
    }

    fn map<U>(&self, f: &impl Fn(&T) -> U) -> SolutionFormula<U> {
        let both = |lhs: &Self, rhs: &Self| (Box::new(lhs.map(f)), Box::new(rhs.map(f)));
        match self {
            SolutionFormula::Leaf(value) => SolutionFormula::Leaf(f(value)),
            SolutionFormula::Add { lhs, rhs } => {
                let (lhs, rhs) = both(lhs, rhs);
                SolutionFormula::Add { lhs, rhs }
            }
            SolutionFormula::Sub { lhs, rhs } => {
                let (lhs, rhs) = both(lhs, rhs);
                SolutionFormula::Sub { lhs, rhs }
            }
            SolutionFormula::Mul { lhs, rhs } => {
                let (lhs, rhs) = both(lhs, rhs);
                SolutionFormula::Mul { lhs, rhs }
            }
            SolutionFormula::Div { lhs, rhs } => {
                let (lhs, rhs) = both(lhs, rhs);
                SolutionFormula::Div { lhs, rhs }
            }
        }
    }

    /// The four trees joining `lhs` and `rhs` under each operator.
    pub(crate) fn combinations(lhs: &Self, rhs: &Self) -> [Self; 4]
    where
        T: Clone,
    {
        let l = || Box::new(lhs.clone());
        let r = || Box::new(rhs.clone());
        [
            SolutionFormula::Add { lhs: l(), rhs: r() },
            SolutionFormula::Sub { lhs: l(), rhs: r() },
            SolutionFormula::Mul { lhs: l(), rhs: r() },
            SolutionFormula::Div { lhs: l(), rhs: r() },
        ]
    }
}

impl IndexFormula {
    /// Evaluates the tree against the hand `values`.
    ///
    /// # Panics
    /// Panics if a leaf index is out of bounds for `values`.
    pub fn apply(&self, values: &[i64]) -> Result<Rational64, ZeroDivisionError> {
        self.fold(&|index| values[*index])
    }

    /// Replaces each index with the card it points at.
    pub fn assign(&self, values: &[i64]) -> AssignedFormula {
        self.map(&|index| values[*index])
    }
}

impl AssignedFormula {
    pub fn compute(&self) -> Result<Rational64, ZeroDivisionError> {
        self.fold(&|value| *value)
    }
}

impl<T: fmt::Display> fmt::Display for SolutionFormula<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionFormula::Leaf(value) => write!(f, "{value}"),
            SolutionFormula::Add { lhs, rhs } => write!(f, "({lhs} + {rhs})"),
            SolutionFormula::Sub { lhs, rhs } => write!(f, "({lhs} - {rhs})"),
            SolutionFormula::Mul { lhs, rhs } => write!(f, "({lhs} * {rhs})"),
            SolutionFormula::Div { lhs, rhs } => write!(f, "({lhs} / {rhs})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(i: usize) -> Box<IndexFormula> {
        Box::new(SolutionFormula::Leaf(i))
    }

    #[test]
    fn apply_uses_exact_fractions() {
        // (0 / 1) * 2 over [1, 3, 3] is exactly 1
        let formula = SolutionFormula::Mul {
            lhs: Box::new(SolutionFormula::Div {
                lhs: leaf(0),
                rhs: leaf(1),
            }),
            rhs: leaf(2),
        };
        assert_eq!(formula.apply(&[1, 3, 3]), Ok(Rational64::from_integer(1)));
    }

    #[test]
    fn zero_divisor_is_an_error() {
        let formula = SolutionFormula::Div {
            lhs: leaf(0),
            rhs: Box::new(SolutionFormula::Sub {
                lhs: leaf(1),
                rhs: leaf(2),
            }),
        };
        assert_eq!(formula.apply(&[4, 2, 2]), Err(ZeroDivisionError));
    }

    #[test]
    fn assign_then_compute_matches_apply() {
        let formula = SolutionFormula::Sub {
            lhs: leaf(1),
            rhs: leaf(0),
        };
        let assigned = formula.assign(&[3, 10]);
        assert_eq!(assigned.to_string(), "(10 - 3)");
        assert_eq!(assigned.compute(), formula.apply(&[3, 10]));
    }

    #[test]
    fn serializes_with_lowercase_tags() {
        let formula: AssignedFormula = SolutionFormula::Add {
            lhs: Box::new(SolutionFormula::Leaf(1)),
            rhs: Box::new(SolutionFormula::Leaf(2)),
        };
        let json = serde_json::to_value(&formula).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "add": { "lhs": { "leaf": 1 }, "rhs": { "leaf": 2 } } })
        );
    }
}
