// Formula tree produced by the Krypto answer parser.
// Chains keep one precedence tier each, so evaluation is a plain left fold.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parsed arithmetic answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Formula {
    /// A non-negative integer literal.
    #[cfg_attr(feature = "serde", serde(rename = "number"))]
    NumberLiteral { value: u64 },
    /// An explicitly parenthesized sub-formula.
    #[cfg_attr(feature = "serde", serde(rename = "parened"))]
    Parenthesized {
        #[cfg_attr(feature = "serde", serde(rename = "expr"))]
        inner: Box<Formula>,
    },
    /// A left-to-right chain of operands on one precedence tier.
    #[cfg_attr(feature = "serde", serde(rename = "binop"))]
    BinaryChain {
        #[cfg_attr(feature = "serde", serde(rename = "exprs"))]
        elements: Vec<ChainElement>,
    },
}

impl Formula {
    pub fn number(value: u64) -> Self {
        Formula::NumberLiteral { value }
    }

    pub fn parenthesized(inner: Formula) -> Self {
        Formula::Parenthesized {
            inner: Box::new(inner),
        }
    }

    /// Builds a chain node. `elements` must not be empty.
    pub fn chain(elements: Vec<ChainElement>) -> Self {
        debug_assert!(!elements.is_empty(), "a chain needs at least one operand");
        Formula::BinaryChain { elements }
    }

    /// Number of literals in the tree.
    pub fn literal_count(&self) -> usize {
        match self {
            Formula::NumberLiteral { .. } => 1,
            Formula::Parenthesized { inner } => inner.literal_count(),
            Formula::BinaryChain { elements } => {
                elements.iter().map(|e| e.operand.literal_count()).sum()
            }
        }
    }
}

/// One operand of a chain together with the operator linking it to the next operand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChainElement {
    #[cfg_attr(feature = "serde", serde(rename = "expr"))]
    pub operand: Formula,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "op", default, skip_serializing_if = "Option::is_none")
    )]
    pub operator: Option<Operator>,
}

impl ChainElement {
    pub fn new(operand: Formula, operator: Option<Operator>) -> Self {
        Self { operand, operator }
    }

    /// The final element of a chain, which links to nothing.
    pub fn last(operand: Formula) -> Self {
        Self::new(operand, None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Add,
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Sub,
    #[cfg_attr(feature = "serde", serde(rename = "*"))]
    Mul,
    #[cfg_attr(feature = "serde", serde(rename = "/"))]
    Div,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn tier(self) -> Tier {
        match self {
            Operator::Add | Operator::Sub => Tier::Additive,
            Operator::Mul | Operator::Div => Tier::Multiplicative,
        }
    }
}

/// A precedence tier of the grammar. Multiplicative binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Additive,
    Multiplicative,
}

impl Tier {
    /// Returns the operator spelled by `c` if it belongs to this tier.
    pub fn operator_for(self, c: char) -> Option<Operator> {
        Operator::from_symbol(c).filter(|op| op.tier() == self)
    }
}
