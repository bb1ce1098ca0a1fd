// Integration tests for the Krypto answer parser
use krypto_ast::{ChainElement, Formula, Operator};
use krypto_parser::{parse_formula, ParseError};
use pretty_assertions::assert_eq;
use tests::{eval, init_test_logger, parse_ok};

#[test]
fn test_simple_binary_expression() {
    let expr = parse_ok("1 + 2 * 3");
    assert_eq!(
        expr,
        Formula::chain(vec![
            ChainElement::new(
                Formula::chain(vec![ChainElement::last(Formula::number(1))]),
                Some(Operator::Add),
            ),
            ChainElement::last(Formula::chain(vec![
                ChainElement::new(Formula::number(2), Some(Operator::Mul)),
                ChainElement::last(Formula::number(3)),
            ])),
        ])
    );
}

#[test]
fn test_documented_values() {
    assert_eq!(eval("1+2*3"), 7.0);
    assert_eq!(eval("(1+2)*3"), 9.0);
    assert_eq!(eval("10/2/5"), 1.0);
    assert_eq!(eval("8-3-2"), 3.0);
    assert_eq!(eval("  3 + 4 "), 7.0);
    assert_eq!(eval("1/0"), f64::INFINITY);
}

#[test]
fn test_no_match_is_not_an_error() {
    init_test_logger();
    for input in ["1+", "((1)", ""] {
        assert_eq!(parse_formula(input), Ok(None), "{input:?}");
    }
}

#[test]
fn test_runaway_scan_surfaces_to_caller() {
    init_test_logger();
    let inputs = [
        "9".repeat(700),
        format!("{}1", "( ".repeat(200)),
        format!("{}2", "2 * ".repeat(200)),
    ];
    for input in &inputs {
        assert!(
            matches!(
                parse_formula(input),
                Err(ParseError::RunawayScan { limit: 1000, .. })
            ),
            "{} chars should run away",
            input.len()
        );
    }
}

#[test]
fn test_deeply_grouped_answer_within_ceiling() {
    assert_eq!(eval("((((1 + 1) * 2) - 1) / 3)"), 1.0);
}
