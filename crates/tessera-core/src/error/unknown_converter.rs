use super::Error;

/// Error when a converter class has no bean in the bean registry.
#[derive(Debug)]
pub(super) struct UnknownConverterError {
    name: &'static str,
}

impl std::error::Error for UnknownConverterError {}

impl core::fmt::Display for UnknownConverterError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no converter bean registered for `{}`", self.name)
    }
}

impl Error {
    /// Creates an unknown converter error for the converter type `name`.
    pub fn unknown_converter(name: &'static str) -> Error {
        Error::from(super::ErrorKind::UnknownConverter(UnknownConverterError {
            name,
        }))
    }

    /// Returns `true` if this error is an unknown converter error.
    pub fn is_unknown_converter(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownConverter(_))
    }
}
