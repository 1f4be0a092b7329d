use super::Error;
use crate::stmt::Type;

/// Error when a declared type conflicts with what the result actually holds.
///
/// This is raised when the relational type declared by a converter cannot be
/// read from the column's JDBC type, and when a raw value extracted from a row
/// does not fit the type it is being read as.
#[derive(Debug)]
pub(super) struct TypeMismatchError {
    message: Box<str>,
}

impl std::error::Error for TypeMismatchError {}

impl core::fmt::Display for TypeMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "type mismatch: {}", self.message)
    }
}

impl Error {
    /// Creates a type mismatch error for a column that cannot be read as
    /// `declared`.
    pub fn type_mismatch(position: usize, declared: &Type, jdbc_type: &str) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatchError {
            message: format!(
                "column {position} of JDBC type {jdbc_type} cannot be read as {declared:?}"
            )
            .into(),
        }))
    }

    /// Creates a type mismatch error for a value that does not fit `expected`.
    pub fn value_type_mismatch(value: &crate::stmt::Value, expected: &Type) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatchError {
            message: format!("value {value:?} cannot be read as {expected:?}").into(),
        }))
    }

    /// Returns `true` if this error is a type mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeMismatch(_))
    }
}
