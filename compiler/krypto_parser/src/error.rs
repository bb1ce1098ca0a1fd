use thiserror::Error;

/// Fatal parser failures.
///
/// An ordinary grammar mismatch is not an error: productions report it as
/// `Ok(None)`. Only conditions that must abort the whole parse live here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The cursor performed more primitive operations than allowed.
    #[error("runaway scan: exceeded {limit} cursor operations at offset {position}")]
    RunawayScan { limit: usize, position: usize },
}

/// Outcome of a production: a node, a no-match (`None`), or a fatal error.
pub type ParseResult<T> = Result<Option<T>, ParseError>;
