use thiserror::Error;

/// Errors returned by formatted-string decoding.
///
/// Both variants are causes of a single "invalid format" kind; the message
/// always starts with `invalid format:`.
///
/// # Examples
/// ```
/// use cpe23_core::{DecodeError, decode};
///
/// let err = decode("cpe:2.2:a:b:c:d:e:f:g:h:i:j:k").unwrap_err();
/// assert_eq!(err, DecodeError::InvalidPrefix);
/// assert!(err.to_string().starts_with("invalid format:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid format: expected prefix `cpe:2.3:`")]
    InvalidPrefix,
    #[error("invalid format: expected {expected} fields, got {actual}")]
    WrongArity { expected: usize, actual: usize },
}

impl DecodeError {
    /// Every decode failure belongs to the invalid-format kind.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidPrefix | Self::WrongArity { .. })
    }
}
