use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[error("division by zero")]
pub struct ZeroDivisionError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The solver enumerates every tree shape, which only stays tractable for small hands.
    #[error("hand of {count} cards is too large (at most {max})")]
    TooManyCards { count: usize, max: usize },
}
