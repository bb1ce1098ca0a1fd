use serde::Serialize;

use krypto_eval::{collect_numbers, compute_formula};
use krypto_parser::{parse_complete, ParseError, ParserConfig};

/// Largest difference from the target still accepted as a hit.
pub const TOLERANCE: f64 = 1e-9;

/// Outcome of checking a player's answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// The text is not a complete formula.
    Unparsable,
    /// The literals are not exactly the cards of the hand.
    WrongCards { used: Vec<u64> },
    /// Every card was used but the value misses the target.
    WrongValue { value: f64 },
    Correct { value: f64 },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct { .. })
    }
}

/// Checks `answer` against a hand and target.
///
/// The answer must parse completely, use every card exactly once, and
/// evaluate to `target`.
pub fn verify_answer(
    cards: &[i64],
    target: i64,
    answer: &str,
    config: ParserConfig,
) -> Result<Verdict, ParseError> {
    let Some(formula) = parse_complete(answer, config)? else {
        return Ok(Verdict::Unparsable);
    };

    let used = collect_numbers(&formula);
    let mut used_sorted: Vec<i128> = used.iter().map(|&n| i128::from(n)).collect();
    let mut hand: Vec<i128> = cards.iter().map(|&c| i128::from(c)).collect();
    used_sorted.sort_unstable();
    hand.sort_unstable();
    if used_sorted != hand {
        log::debug!("answer uses {used:?}, hand is {cards:?}");
        return Ok(Verdict::WrongCards { used });
    }

    let value = compute_formula(&formula);
    if (value - target as f64).abs() <= TOLERANCE {
        Ok(Verdict::Correct { value })
    } else {
        Ok(Verdict::WrongValue { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn verify(cards: &[i64], target: i64, answer: &str) -> Verdict {
        verify_answer(cards, target, answer, ParserConfig::default()).unwrap()
    }

    #[test]
    fn accepts_correct_answer() {
        let verdict = verify(&[1, 2, 3, 4, 5], 7, "5 + 4 - 3 + 2 - 1");
        assert_eq!(verdict, Verdict::Correct { value: 7.0 });
        assert!(verdict.is_correct());
    }

    #[test]
    fn every_card_exactly_once() {
        assert_eq!(
            verify(&[1, 2, 3, 4, 5], 7, "(5 - 4) * 3 + 2 * 2"),
            Verdict::WrongCards {
                used: vec![5, 4, 3, 2, 2]
            }
        );
        assert!(matches!(
            verify(&[1, 2, 3, 4, 5], 7, "5 + 2"),
            Verdict::WrongCards { .. }
        ));
    }

    #[test]
    fn card_order_does_not_matter() {
        let verdict = verify(&[3, 1, 2, 2, 9], 10, "9 + (3 - 2) * (2 - 1)");
        assert!(verdict.is_correct());
    }

    #[test]
    fn reports_wrong_value() {
        assert_eq!(
            verify(&[1, 2], 5, "1 + 2"),
            Verdict::WrongValue { value: 3.0 }
        );
    }

    #[test]
    fn fractional_paths_are_accepted() {
        // 6 / (1 - 3 / 4) = 24
        assert!(verify(&[1, 3, 4, 6], 24, "6 / (1 - 3 / 4)").is_correct());
    }

    #[test]
    fn trailing_text_is_unparsable() {
        assert_eq!(verify(&[1, 2], 3, "1 + 2 = 3"), Verdict::Unparsable);
        assert_eq!(verify(&[1, 2], 3, "1 +"), Verdict::Unparsable);
    }

    #[test]
    fn division_by_zero_is_just_wrong() {
        assert_eq!(
            verify(&[1, 0], 1, "1 / 0"),
            Verdict::WrongValue {
                value: f64::INFINITY
            }
        );
    }

    #[test]
    fn runaway_is_propagated() {
        let answer = "(".repeat(400);
        let result = verify_answer(&[1], 1, &answer, ParserConfig::default());
        assert!(result.is_err());
    }
}
