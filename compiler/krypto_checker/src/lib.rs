//! Solving and checking Krypto hands.
//!
//! The solver works in exact rational arithmetic over every ordering of the
//! cards and every binary tree shape, so it can tell whether a target is
//! reachable at all. Player answers go through the parser and the `f64`
//! evaluator instead, see [`verify_answer`].

pub mod error;
pub mod formula;
pub mod hand;
pub mod solver;
pub mod verify;

pub use error::{CheckError, ZeroDivisionError};
pub use formula::{AssignedFormula, IndexFormula, SolutionFormula};
pub use hand::{distinct_hands, standard_deck, CARD_DUPLICATES, MAX_CARD_NUMBER, NUM_HAND_CARDS};
pub use solver::{
    compute_impossibles, find_answers, shapes_for, unique_permutations, MAX_SOLVER_CARDS,
};
pub use verify::{verify_answer, Verdict};
