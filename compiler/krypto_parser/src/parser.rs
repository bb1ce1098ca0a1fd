// Recursive-descent parser for Krypto answers.
//
//   Additive       := Multiplicative (('+' | '-') Multiplicative)*
//   Multiplicative := Terminal (('*' | '/') Terminal)*
//   Terminal       := Number | '(' Additive ')'
//   Number         := digit+
//
// Productions never backtrack: a no-match leaves the cursor wherever scanning
// stopped and the caller gives up as well.

use krypto_ast::{ChainElement, Formula, Tier};

use crate::config::ParserConfig;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};

/// Parser over a single answer string. One instance serves one parse.
pub struct Parser {
    cursor: Cursor,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &str, config: ParserConfig) -> Self {
        log::trace!("--- parsing start ---");
        Parser {
            cursor: Cursor::with_config(input, config),
        }
    }

    /// Parses one additive chain from the start of the input.
    ///
    /// Input left over after the chain is not inspected; use
    /// [`Parser::consume_trailing_whitespace`] to check for it.
    pub fn parse(&mut self) -> ParseResult<Formula> {
        self.parse_additive()
    }

    /// Skips trailing spaces and reports whether the whole input was consumed.
    pub fn consume_trailing_whitespace(&mut self) -> Result<bool, ParseError> {
        self.cursor.skip_whitespace()?;
        Ok(self.cursor.is_at_end())
    }

    /// Character offset where scanning stopped.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Primitive cursor operations spent so far.
    pub fn operations(&self) -> usize {
        self.cursor.operations()
    }

    fn parse_additive(&mut self) -> ParseResult<Formula> {
        log::trace!("parsing additive");
        self.parse_chain(Tier::Additive)
    }

    fn parse_multiplicative(&mut self) -> ParseResult<Formula> {
        log::trace!("parsing multiplicative");
        self.parse_chain(Tier::Multiplicative)
    }

    fn parse_operand(&mut self, tier: Tier) -> ParseResult<Formula> {
        match tier {
            Tier::Additive => self.parse_multiplicative(),
            Tier::Multiplicative => self.parse_terminal(),
        }
    }

    fn parse_chain(&mut self, tier: Tier) -> ParseResult<Formula> {
        let mut elements = Vec::new();

        loop {
            self.cursor.skip_whitespace()?;
            let Some(operand) = self.parse_operand(tier)? else {
                // Either nothing was here or an operator is missing its right operand.
                log::trace!("{tier:?} chain: no operand at {}", self.cursor.position());
                return Ok(None);
            };

            self.cursor.skip_whitespace()?;
            let operator = self.cursor.peek()?.and_then(|c| tier.operator_for(c));
            match operator {
                Some(op) => {
                    self.cursor.match_and_advance(op.symbol())?;
                    elements.push(ChainElement::new(operand, Some(op)));
                }
                None => {
                    elements.push(ChainElement::last(operand));
                    break;
                }
            }
        }

        log::trace!("{tier:?} chain of {} operand(s)", elements.len());
        Ok(Some(Formula::chain(elements)))
    }

    fn parse_terminal(&mut self) -> ParseResult<Formula> {
        log::trace!("parsing terminal");
        self.cursor.skip_whitespace()?;

        if self.cursor.peek()? == Some('(') {
            self.cursor.advance()?;
            let Some(inner) = self.parse_additive()? else {
                return Ok(None);
            };
            if !self.cursor.match_and_advance(')')? {
                return Ok(None);
            }
            return Ok(Some(Formula::parenthesized(inner)));
        }

        self.parse_number()
    }

    fn parse_number(&mut self) -> ParseResult<Formula> {
        log::trace!("parsing number");
        let mut value: u64 = 0;
        let mut found = false;

        while let Some(ch) = self.cursor.peek()? {
            let Some(digit) = ch.to_digit(10) else {
                break;
            };
            self.cursor.advance()?;
            // Overflow wraps.
            value = value.wrapping_mul(10).wrapping_add(u64::from(digit));
            found = true;
        }

        if !found {
            return Ok(None);
        }
        log::trace!("returning number {value}");
        Ok(Some(Formula::number(value)))
    }
}
