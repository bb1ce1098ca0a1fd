//! Visitor pattern for walking formula trees.
//!
//! A `Visitor` gets one callback per formula variant. Implementations decide
//! whether and how to descend; `Visitable::accept` dispatches on the variant.

use crate::ast::{ChainElement, Formula};

/// A trait for types that can be visited by a `Visitor`.
pub trait Visitable {
    /// Accepts a visitor and calls the matching visit method.
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output;
}

/// A visitor over formula nodes.
pub trait Visitor {
    /// The value produced for each visited node.
    type Output;

    fn visit_number(&mut self, value: u64) -> Self::Output;

    /// Visits an explicit group. The default looks straight through the parentheses.
    fn visit_parenthesized(&mut self, inner: &Formula) -> Self::Output {
        inner.accept(self)
    }

    fn visit_chain(&mut self, elements: &[ChainElement]) -> Self::Output;
}

impl Visitable for Formula {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Formula::NumberLiteral { value } => visitor.visit_number(*value),
            Formula::Parenthesized { inner } => visitor.visit_parenthesized(inner),
            Formula::BinaryChain { elements } => visitor.visit_chain(elements),
        }
    }
}
