//! Errors of the checked handle operations.

use std::result;

use thiserror::Error;

/// Result type for the checked handle operations
pub type Result<T> = result::Result<T, IteratorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Misuse of an iterator handle that was caught at runtime
pub enum IteratorError {
    /// The two handles wrap different adapter types.
    #[error("cannot compare iterators of different kinds: `{left}` and `{right}`")]
    IncompatibleKinds {
        /// Adapter type of the left operand
        left: &'static str,
        /// Adapter type of the right operand
        right: &'static str,
    },
    /// Same adapter type, but the handles walk different containers.
    #[error("cannot compare iterators over different containers")]
    DifferentContainers,
    /// The handle already sits on the end position.
    #[error("cannot advance an iterator past the end of its container")]
    PastEnd,
}
