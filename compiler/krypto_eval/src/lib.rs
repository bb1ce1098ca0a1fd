//! Evaluation of Krypto formula trees.
//!
//! Evaluation is total: every well-formed tree produces an `f64`, with
//! division by zero yielding an infinity or NaN.

pub mod evaluator;
pub mod numbers;

pub use evaluator::{compute_formula, Evaluator};
pub use numbers::collect_numbers;
