//! Parser for Krypto puzzle answers.
//!
//! Turns text such as `(1 + 2) * 3` into a [`krypto_ast::Formula`]. A grammar
//! mismatch is reported as `Ok(None)`; the only error is the runaway-scan
//! guard, which aborts a parse that spends too many cursor operations.

pub mod config;
pub mod cursor;
pub mod error;
pub mod parser;

pub use config::{ParserConfig, DEFAULT_MAX_OPERATIONS};
pub use cursor::Cursor;
pub use error::{ParseError, ParseResult};
pub use parser::Parser;

use krypto_ast::Formula;

/// Parses an answer with the default operation ceiling.
///
/// Text after the first complete additive chain is ignored.
///
/// ```
/// use krypto_parser::parse_formula;
///
/// assert!(parse_formula("1 + 2 * 3").unwrap().is_some());
/// assert!(parse_formula("1 +").unwrap().is_none());
/// ```
pub fn parse_formula(input: &str) -> ParseResult<Formula> {
    parse_formula_with_config(input, ParserConfig::default())
}

pub fn parse_formula_with_config(input: &str, config: ParserConfig) -> ParseResult<Formula> {
    Parser::with_config(input, config).parse()
}

/// Like [`parse_formula_with_config`], but the whole input must be consumed.
///
/// Trailing spaces are allowed; anything else after the formula is a no-match.
///
/// ```
/// use krypto_parser::{parse_complete, parse_formula, ParserConfig};
///
/// assert!(parse_formula("1 + 2)").unwrap().is_some());
/// assert!(parse_complete("1 + 2)", ParserConfig::default()).unwrap().is_none());
/// assert!(parse_complete("1 + 2  ", ParserConfig::default()).unwrap().is_some());
/// ```
pub fn parse_complete(input: &str, config: ParserConfig) -> ParseResult<Formula> {
    let mut parser = Parser::with_config(input, config);
    let Some(formula) = parser.parse()? else {
        return Ok(None);
    };
    if !parser.consume_trailing_whitespace()? {
        log::debug!("trailing input at offset {}", parser.position());
        return Ok(None);
    }
    Ok(Some(formula))
}


// Integration tests are in the tests/ directory
