//! Shared helpers for the workspace integration tests.

use std::io::Write;
use std::sync::Once;

use env_logger::Builder;
use krypto_ast::Formula;
use krypto_eval::compute_formula;
use krypto_parser::parse_formula;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Initialize the logger for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        Builder::new()
            .filter_level(LevelFilter::Debug)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                )
            })
            .is_test(true)
            .init();
        log::info!("Test logger initialized");
    });
}

/// Parses `input`, panicking on a runaway scan or a no-match.
pub fn parse_ok(input: &str) -> Formula {
    init_test_logger();
    match parse_formula(input) {
        Ok(Some(formula)) => formula,
        Ok(None) => panic!("{input:?} did not parse"),
        Err(e) => panic!("{input:?}: {e}"),
    }
}

pub fn eval(input: &str) -> f64 {
    compute_formula(&parse_ok(input))
}
