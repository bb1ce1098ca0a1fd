use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use itertools::Itertools;
use lazy_static::lazy_static;
use num_rational::Rational64;

use crate::error::CheckError;
use crate::formula::{AssignedFormula, IndexFormula, SolutionFormula};

/// Largest hand the solver accepts.
pub const MAX_SOLVER_CARDS: usize = 5;

lazy_static! {
    static ref SHAPES: Mutex<HashMap<usize, Arc<[IndexFormula]>>> = Mutex::new(HashMap::new());
}

/// Every tree over the leaves `indices` (kept in order), with every operator at each node.
fn enumerate_shapes(indices: &[usize]) -> Vec<IndexFormula> {
    if let [index] = indices {
        return vec![SolutionFormula::Leaf(*index)];
    }

    let mut shapes = Vec::new();
    for split in 1..indices.len() {
        let (left, right) = indices.split_at(split);
        let right_shapes = enumerate_shapes(right);
        for lhs in enumerate_shapes(left) {
            for rhs in &right_shapes {
                shapes.extend(SolutionFormula::combinations(&lhs, rhs));
            }
        }
    }
    shapes
}

/// Returns the shapes for `n` leaves, computing them on first use.
pub fn shapes_for(n: usize) -> Result<Arc<[IndexFormula]>, CheckError> {
    if n > MAX_SOLVER_CARDS {
        return Err(CheckError::TooManyCards {
            count: n,
            max: MAX_SOLVER_CARDS,
        });
    }

    let mut cache = SHAPES
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(shapes) = cache.get(&n) {
        return Ok(Arc::clone(shapes));
    }

    let indices: Vec<usize> = (0..n).collect();
    let shapes: Arc<[IndexFormula]> = enumerate_shapes(&indices).into();
    log::debug!("enumerated {} shapes for {n} cards", shapes.len());
    cache.insert(n, Arc::clone(&shapes));
    Ok(shapes)
}

/// All distinct orderings of `cards`, starting from the order given.
/// Repeated cards do not produce duplicates.
pub fn unique_permutations(cards: &[i64]) -> Vec<Vec<i64>> {
    cards
        .iter()
        .copied()
        .permutations(cards.len())
        .unique()
        .collect()
}

/// Lazily yields every formula over `cards` that evaluates exactly to `target`.
///
/// Each card is used exactly once. Orderings start from the order of `cards`,
/// and for each ordering every shape is tried.
pub fn find_answers(
    cards: &[i64],
    target: i64,
) -> Result<impl Iterator<Item = AssignedFormula>, CheckError> {
    let shapes = shapes_for(cards.len())?;
    let target = Rational64::from_integer(target);

    let orderings = unique_permutations(cards);
    Ok(orderings.into_iter().flat_map(move |ordered| {
        let shapes = Arc::clone(&shapes);
        (0..shapes.len()).filter_map(move |i| match shapes[i].apply(&ordered) {
            Ok(value) if value == target => Some(shapes[i].assign(&ordered)),
            _ => None,
        })
    }))
}

/// Returns the members of `within` that no formula over `cards` reaches.
pub fn compute_impossibles(
    cards: &[i64],
    within: HashSet<i64>,
) -> Result<HashSet<i64>, CheckError> {
    let shapes = shapes_for(cards.len())?;
    let mut impossibles = within;

    'orderings: for ordered in unique_permutations(cards) {
        for shape in shapes.iter() {
            let Ok(value) = shape.apply(&ordered) else {
                continue;
            };
            if value.is_integer() {
                impossibles.remove(&value.to_integer());
            }
            if impossibles.is_empty() {
                break 'orderings;
            }
        }
    }

    Ok(impossibles)
}
