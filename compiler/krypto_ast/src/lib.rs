//! Formula tree for Krypto puzzle answers.
//!
//! This crate defines the tree a player's answer is parsed into, its canonical
//! text rendering, and a visitor for walking it.

pub mod ast;
pub mod display;
pub mod visit;

// Re-export commonly used types
pub use ast::{ChainElement, Formula, Operator, Tier};
pub use visit::{Visitable, Visitor};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::error::Error;

/// A result type for AST serialization.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Serializes a formula (or any AST value) to a pretty JSON string.
///
/// # Example
///
/// ```
/// use krypto_ast::{to_json, ChainElement, Formula};
///
/// let formula = Formula::chain(vec![ChainElement::last(Formula::number(7))]);
/// let json = to_json(&formula).unwrap();
///
/// assert!(json.contains(r#""type": "binop""#));
/// assert!(json.contains(r#""type": "number""#));
/// assert!(json.contains(r#""value": 7"#));
/// assert!(!json.contains(r#""op""#), "absent operators are omitted");
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes an AST value from a JSON string.
///
/// ```
/// use krypto_ast::{from_json, Formula};
///
/// let formula: Formula = from_json(r#"{"type":"number","value":3}"#).unwrap();
/// assert_eq!(formula, Formula::number(3));
/// ```
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialization() -> Result<()> {
        let formula = Formula::chain(vec![
            ChainElement::new(Formula::number(1), Some(Operator::Add)),
            ChainElement::last(Formula::parenthesized(Formula::chain(vec![
                ChainElement::new(Formula::number(2), Some(Operator::Div)),
                ChainElement::last(Formula::number(4)),
            ]))),
        ]);

        let json = to_json(&formula)?;
        let deserialized: Formula = from_json(&json)?;
        assert_eq!(formula, deserialized);
        Ok(())
    }

    #[test]
    fn test_wire_shape() -> Result<()> {
        let formula = Formula::chain(vec![
            ChainElement::new(Formula::number(8), Some(Operator::Sub)),
            ChainElement::last(Formula::number(3)),
        ]);
        let value: serde_json::Value = serde_json::from_str(&to_json(&formula)?)?;
        assert_eq!(
            value,
            serde_json::json!({
                "type": "binop",
                "exprs": [
                    { "expr": { "type": "number", "value": 8 }, "op": "-" },
                    { "expr": { "type": "number", "value": 3 } }
                ]
            })
        );
        Ok(())
    }
}
