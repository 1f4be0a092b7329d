use super::Error;

/// Error when a result column cannot be located in the row metadata.
#[derive(Debug)]
pub(super) struct ResultMappingError {
    message: Box<str>,
}

impl std::error::Error for ResultMappingError {}

impl core::fmt::Display for ResultMappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "result mapping error: {}", self.message)
    }
}

impl Error {
    /// Creates a result mapping error.
    pub fn result_mapping(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ResultMapping(ResultMappingError {
            message: message.into().into(),
        }))
    }

    /// Creates a result mapping error for an alias missing from the row
    /// metadata.
    pub fn unknown_column_alias(alias: &str) -> Error {
        Error::result_mapping(format!("no result column with alias `{alias}`"))
    }

    /// Creates a result mapping error for a position outside the row.
    pub fn unknown_column_position(position: usize) -> Error {
        Error::result_mapping(format!("no result column at position {position}"))
    }

    /// Returns `true` if this error is a result mapping error.
    pub fn is_result_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ResultMapping(_))
    }
}
