// Rendering a parsed formula and parsing the rendering again
use krypto_ast::{from_json, to_json, Formula};
use proptest::prelude::*;
use tests::parse_ok;

#[test]
fn test_rendering_is_canonical() {
    assert_eq!(parse_ok("(1+2)*3").to_string(), "(1 + 2) * 3");
    assert_eq!(parse_ok("  10 /(5 -  3)").to_string(), "10 / (5 - 3)");
    assert_eq!(parse_ok("7").to_string(), "7");
}

#[test]
fn test_json_round_trip_of_parsed_tree() {
    let formula = parse_ok("((4 - 1) * 2) / 3");
    let json = to_json(&formula).unwrap();
    let back: Formula = from_json(&json).unwrap();
    assert_eq!(back, formula);
}

fn answer() -> impl Strategy<Value = String> {
    let leaf = (0u64..50).prop_map(|n| n.to_string());
    leaf.prop_recursive(3, 12, 3, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')],
                inner.clone()
            )
                .prop_map(|(a, op, b)| format!("{a}{op}{b}")),
            inner.prop_map(|a| format!("({a})")),
        ]
    })
}

proptest! {
    #[test]
    fn rendering_reparses_to_same_tree(text in answer()) {
        let formula = parse_ok(&text);
        let rendered = formula.to_string();
        prop_assert_eq!(parse_ok(&rendered), formula);
    }
}
