use krypto_ast::Formula;
use krypto_eval::compute_formula;
use krypto_parser::{ParseError, Parser, ParserConfig};

/// Result of running one answer through the parser and the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value {
        formula: Formula,
        value: f64,
        /// Offset of unread input after the formula, if any.
        trailing: Option<usize>,
    },
    NoMatch {
        position: usize,
    },
}

pub fn evaluate_source(source: &str, config: ParserConfig) -> Result<Outcome, ParseError> {
    let source = source.trim_end_matches(&['\n', '\r'][..]);
    let mut parser = Parser::with_config(source, config);

    let Some(formula) = parser.parse()? else {
        return Ok(Outcome::NoMatch {
            position: parser.position(),
        });
    };
    let at_end = parser.consume_trailing_whitespace()?;
    let value = compute_formula(&formula);
    Ok(Outcome::Value {
        formula,
        value,
        trailing: (!at_end).then(|| parser.position()),
    })
}

/// Renders `source` with a caret under character offset `position`.
pub fn render_snippet(source: &str, position: usize, message: &str) -> String {
    let line = source.trim_end_matches(&['\n', '\r'][..]);
    let pad = " ".repeat(position.min(line.chars().count()));
    format!("  | {line}\n  | {pad}^ {message}")
}
