// End-to-end: solve a hand and check answers the way a player would
use std::collections::HashSet;

use krypto_checker::{compute_impossibles, find_answers, standard_deck, verify_answer, Verdict};
use krypto_eval::{collect_numbers, compute_formula};
use krypto_parser::ParserConfig;
use tests::{init_test_logger, parse_ok};

#[test]
fn test_player_answer_matches_hand_and_target() {
    init_test_logger();
    let cards = [2, 4, 6, 8, 10];
    let answer = "10 - 8 + 6 / (4 - 2)";

    let formula = parse_ok(answer);
    let mut used = collect_numbers(&formula);
    used.sort_unstable();
    assert_eq!(used, vec![2, 4, 6, 8, 10]);
    assert_eq!(compute_formula(&formula), 5.0);

    let verdict = verify_answer(&cards, 5, answer, ParserConfig::default()).unwrap();
    assert_eq!(verdict, Verdict::Correct { value: 5.0 });
}

#[test]
fn test_solver_answers_pass_the_checker() {
    init_test_logger();
    let cards = [3, 3, 8, 8];
    let answer = find_answers(&cards, 24)
        .unwrap()
        .next()
        .expect("8 / (3 - 8 / 3) reaches 24");
    let text = answer.to_string();
    assert!(
        verify_answer(&cards, 24, &text, ParserConfig::default())
            .unwrap()
            .is_correct(),
        "{text}"
    );
}

#[test]
fn test_small_run_reaches_every_card_value() {
    let deck: HashSet<i64> = standard_deck().into_iter().collect();
    let impossibles = compute_impossibles(&[1, 2, 3, 4, 5], deck).unwrap();
    assert!(impossibles.is_empty(), "{impossibles:?}");
}
