use crate::config::ParserConfig;
use crate::error::ParseError;

/// A character cursor over one answer string.
///
/// Every `peek` and `advance` counts as one operation; once the count passes
/// the configured ceiling the cursor refuses to continue and reports
/// [`ParseError::RunawayScan`].
pub struct Cursor {
    /// The characters being scanned
    chars: Vec<char>,
    /// Current position in `chars`
    position: usize,
    /// Primitive operations performed so far
    operations: usize,
    /// Ceiling for `operations`
    max_operations: usize,
}

impl Cursor {
    /// Create a cursor with the default operation ceiling
    pub fn new(input: &str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &str, config: ParserConfig) -> Self {
        Cursor {
            chars: input.chars().collect(),
            position: 0,
            operations: 0,
            max_operations: config.max_operations,
        }
    }

    /// Get the current character without advancing
    pub fn peek(&mut self) -> Result<Option<char>, ParseError> {
        self.tick()?;
        let ch = self.chars.get(self.position).copied();
        log::trace!("peek: {ch:?} at {}", self.position);
        Ok(ch)
    }

    /// Get the current character and move past it
    pub fn advance(&mut self) -> Result<Option<char>, ParseError> {
        self.tick()?;
        let ch = self.chars.get(self.position).copied();
        if ch.is_some() {
            self.position += 1;
        }
        log::trace!("next: {ch:?}");
        Ok(ch)
    }

    /// Consume one character and report whether it was `expected`.
    ///
    /// The character is consumed even when it does not match, so callers
    /// should confirm with `peek` first unless a mismatch ends the parse anyway.
    pub fn match_and_advance(&mut self, expected: char) -> Result<bool, ParseError> {
        Ok(self.advance()? == Some(expected))
    }

    /// Skip ASCII spaces. Tabs and newlines are not whitespace here.
    pub fn skip_whitespace(&mut self) -> Result<(), ParseError> {
        while self.peek()? == Some(' ') {
            self.advance()?;
        }
        Ok(())
    }

    /// Check if we're at the end of input
    pub fn is_at_end(&self) -> bool {
        self.position == self.chars.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn operations(&self) -> usize {
        self.operations
    }

    fn tick(&mut self) -> Result<(), ParseError> {
        self.operations += 1;
        if self.operations > self.max_operations {
            log::debug!(
                "runaway scan after {} operations at offset {}",
                self.max_operations,
                self.position
            );
            return Err(ParseError::RunawayScan {
                limit: self.max_operations,
                position: self.position,
            });
        }
        Ok(())
    }
}
