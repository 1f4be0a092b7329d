use super::{
    BasicResult, BasicResultBuilder, DynamicFetchBuilderLegacy, DynamicResultBuilder,
    LegacyFetchResolver, RowMetadata,
};
use crate::sql_ast::{SqlAstCreationState, SqlSelection};

use tessera_core::{stmt::Value, Result};

/// Describes how the rows of a native query map to results.
///
/// A mapping with no result builders returns every column of the row as is.
/// The mapping itself is the plan cache key: equal mappings resolve to equal
/// results against the same row metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResultSetMapping {
    result_builders: Vec<DynamicResultBuilder>,
    legacy_fetch_builders: LegacyFetchResolver,
}

/// A [`ResultSetMapping`] resolved against the metadata of one result set.
#[derive(Debug, Clone)]
pub struct JdbcValuesMapping {
    selections: Vec<SqlSelection>,
    results: Vec<BasicResult>,
}

impl ResultSetMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result_builder(&mut self, builder: impl Into<DynamicResultBuilder>) -> &mut Self {
        self.result_builders.push(builder.into());
        self
    }

    pub fn add_legacy_fetch_builder(&mut self, builder: DynamicFetchBuilderLegacy) -> &mut Self {
        self.legacy_fetch_builders.register(builder);
        self
    }

    pub fn result_builders(&self) -> &[DynamicResultBuilder] {
        &self.result_builders
    }

    pub fn legacy_fetch_builders(&self) -> &LegacyFetchResolver {
        &self.legacy_fetch_builders
    }

    pub fn cache_key_instance(&self) -> Self {
        self.clone()
    }

    /// Resolves every result builder, in order, against `metadata`.
    pub fn resolve(
        &self,
        metadata: &dyn RowMetadata,
        state: &mut SqlAstCreationState,
    ) -> Result<JdbcValuesMapping> {
        let mut results = Vec::new();

        if self.result_builders.is_empty() {
            for result_position in 0..metadata.column_count() {
                let result = BasicResultBuilder::new(None).build_result(
                    metadata,
                    result_position,
                    &self.legacy_fetch_builders,
                    state,
                )?;
                results.push(result);
            }
        } else {
            for (result_position, builder) in self.result_builders.iter().enumerate() {
                let result = builder.build_result(
                    metadata,
                    result_position,
                    &self.legacy_fetch_builders,
                    state,
                )?;
                results.push(result);
            }
        }

        tracing::debug!(
            results = results.len(),
            columns = metadata.column_count(),
            "resolved result set mapping"
        );

        Ok(JdbcValuesMapping {
            selections: state.resolver().selections().to_vec(),
            results,
        })
    }
}

impl JdbcValuesMapping {
    pub fn selections(&self) -> &[SqlSelection] {
        &self.selections
    }

    pub fn results(&self) -> &[BasicResult] {
        &self.results
    }

    /// Assembles the results of one row, in result order.
    pub fn assemble_row(&self, row: &[Value]) -> Result<Vec<Value>> {
        self.results
            .iter()
            .map(|result| result.assemble(row))
            .collect()
    }
}
