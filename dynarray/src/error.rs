use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error, Diagnostic)]
pub enum ArrayError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("!!INTERNAL ERROR!! resize to capacity {requested} can't hold {len} elements")]
    #[diagnostic(help("the resize policy produced a broken target, the array must not be used further"))]
    InternalInvariant { requested: usize, len: usize },
    #[error("capacity overflow while growing from {capacity}")]
    CapacityOverflow { capacity: usize },
}

impl ArrayError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Whether the array that produced this error is left in an unusable state
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ArrayError::InternalInvariant { .. } | ArrayError::CapacityOverflow { .. }
        )
    }
}

pub type Result<T, E = ArrayError> = std::result::Result<T, E>;
