use alloc::string::{String, ToString};
use core::{fmt, str::Utf8Error};
use thiserror::Error;

/// Errors reported by the hashing engines.
///
/// All errors are local to the engine (or parse) that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum HashError {
    /// A construction parameter is outside the range the algorithm supports.
    #[error("unsupported {parameter}: {value}")]
    UnsupportedParameter {
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// The rejected value, as given by the caller.
        value: String,
    },

    /// Input handed over as text is not valid UTF-8.
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidEncoding {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
}

impl HashError {
    /// Create an [`HashError::UnsupportedParameter`] error.
    #[must_use]
    pub fn unsupported(parameter: &'static str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        log::debug!("rejecting {}: {}", parameter, value);
        Self::UnsupportedParameter { parameter, value }
    }
}

impl From<Utf8Error> for HashError {
    fn from(err: Utf8Error) -> Self {
        Self::InvalidEncoding {
            valid_up_to: err.valid_up_to(),
        }
    }
}

/// Result type for hashing operations.
pub type Result<T> = core::result::Result<T, HashError>;
