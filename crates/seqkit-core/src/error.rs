use thiserror::Error;

/// Canonical result for seqkit.
pub type Result<T> = std::result::Result<T, SeqError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// A caller-supplied argument is unusable; raised at call time, never deferred.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    #[error("invalid operation: {0}")]
    InvalidOperation(#[from] InvalidOperation),

    #[error("argument `{argument}` is out of range: {index}")]
    OutOfRange { argument: &'static str, index: isize },

    #[error("arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },
}

/// Why a reducer could not produce a result from the state of its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidOperation {
    #[error("sequence contains no elements")]
    NoElements,

    #[error("sequence contains no matching element")]
    NoMatch,

    #[error("sequence contains more than one element")]
    MoreThanOneElement,

    #[error("sequence contains more than one matching element")]
    MoreThanOneMatch,
}

impl SeqError {
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        SeqError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    pub fn overflow(operation: &'static str) -> Self {
        SeqError::Overflow { operation }
    }

    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, SeqError::InvalidOperation(_))
    }
}
