use super::Error;
use crate::stmt::Type;

/// Error when a type has no descriptor in the type configuration.
#[derive(Debug)]
pub(super) struct UnknownTypeError {
    ty: Type,
}

impl std::error::Error for UnknownTypeError {}

impl core::fmt::Display for UnknownTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no type descriptor registered for {:?}", self.ty)
    }
}

impl Error {
    /// Creates an unknown type error.
    pub fn unknown_type(ty: &Type) -> Error {
        Error::from(super::ErrorKind::UnknownType(UnknownTypeError { ty: ty.clone() }))
    }

    /// Returns `true` if this error is an unknown type error.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownType(_))
    }
}
