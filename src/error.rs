use thiserror::Error;

/// Errors returned by list and stack operations.
///
/// Every variant is raised before the structure is touched, so a failed call
/// leaves the list or stack exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("position must be at least 1, got {pos}")]
    InvalidArgument { pos: usize },

    #[error("position {pos} is out of range for a list of length {len}")]
    OutOfRange { pos: usize, len: usize },

    #[error("stack is empty")]
    EmptyStack,

    #[error("stack is full (capacity {capacity})")]
    StackOverflow { capacity: usize },

    /// A recursive operation was refused because the list is longer than the
    /// recursion limit.
    #[error("list of length {len} exceeds the recursion limit of {limit}")]
    ResourceExhausted { len: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, ListError>;
