//! Turning result set columns into domain values.
//!
//! Result builders describe what a query returns. Resolving them against the
//! [`RowMetadata`] of an executed statement yields [`BasicResult`]s, which
//! read their value out of each row by values-array position.

mod builder;
pub use builder::{BasicResultBuilder, ConvertedResultBuilder, DynamicResultBuilder};

mod domain_result;
pub use domain_result::{BasicFetch, BasicResult, FetchParent, FetchTiming, ValueAssembler};

mod legacy;
pub use legacy::{DynamicFetchBuilderLegacy, LegacyFetchResolver};

mod metadata;
pub use metadata::{ResultSetMetadata, RowMetadata};

mod result_set_mapping;
pub use result_set_mapping::{JdbcValuesMapping, ResultSetMapping};

use tessera_core::{Error, Result};

/// Converts a 1-based JDBC column position to the 0-based index into the row
/// buffer. Position 0 names no column.
pub fn jdbc_position_to_values_array_position(jdbc_position: usize) -> Result<usize> {
    jdbc_position
        .checked_sub(1)
        .ok_or_else(|| Error::unknown_column_position(jdbc_position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_arithmetic() {
        assert_eq!(jdbc_position_to_values_array_position(1).unwrap(), 0);
        assert_eq!(jdbc_position_to_values_array_position(3).unwrap(), 2);
    }

    #[test]
    fn position_zero_is_rejected() {
        let err = jdbc_position_to_values_array_position(0).unwrap_err();
        assert!(err.is_result_mapping());
        assert_eq!(
            err.to_string(),
            "result mapping error: no result column at position 0"
        );
    }
}
