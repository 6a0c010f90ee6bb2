use std::fmt::{self, Display};

/// Errors produced when parsing model values from external text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidWrapMode(String),
    InvalidPointerKind(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidWrapMode(raw) => {
                write!(f, "invalid wrap mode '{raw}' (expected finite or loop)")
            }
            ModelError::InvalidPointerKind(raw) => {
                write!(f, "invalid pointer kind '{raw}'")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
