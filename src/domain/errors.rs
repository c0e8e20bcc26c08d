use thiserror::Error;

/// Failure raised by a pipeline check, a handler, or a store adapter.
///
/// The payload of `NotFound` and `InvalidInput` is the message shown to the
/// client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
