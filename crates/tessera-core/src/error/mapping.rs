use super::Error;
use crate::stmt::Value;

/// Error when mapping metadata cannot resolve a value.
///
/// Raised for discriminator values with no registered subtype and for entity
/// names that are not part of a hierarchy. These are configuration errors;
/// retrying with the same metadata fails the same way.
#[derive(Debug)]
pub(super) struct MappingError {
    message: Box<str>,
}

impl std::error::Error for MappingError {}

impl core::fmt::Display for MappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "mapping error: {}", self.message)
    }
}

impl Error {
    /// Creates a mapping error with the given message.
    pub fn mapping(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Mapping(MappingError {
            message: message.into().into(),
        }))
    }

    /// Creates a mapping error for a discriminator value that no subtype of
    /// `entity` is registered for.
    pub fn unmapped_discriminator(value: &Value, entity: &str) -> Error {
        Error::mapping(format!(
            "no subtype of `{entity}` is registered for discriminator value {value:?}"
        ))
    }

    /// Returns `true` if this error is a mapping error.
    pub fn is_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Mapping(_))
    }
}
