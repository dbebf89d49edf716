//! Reconciler errors.

use thiserror::Error;

/// Errors returned by [`VirtualDom`](crate::VirtualDom) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtelierError {
    /// The caller broke the ownership contract of the mounted tree
    #[error("precondition violation: {0}")]
    PreconditionViolation(&'static str),
}

/// Result type for reconciler operations.
pub type AtelierResult<T> = Result<T, AtelierError>;
