use super::{Expression, ExpressionKey, SqlSelection};
use crate::results::FetchParent;

use indexmap::IndexMap;
use tessera_core::{stmt::Type, Error, Result, TypeConfiguration};

/// Memoizes the expressions and selections of one statement-building pass.
///
/// Each distinct [`ExpressionKey`] is created once; each distinct expression
/// is selected once. Result set columns keep the position they were read
/// from; every other selection takes the slot after the highest one in use.
#[derive(Debug, Default)]
pub struct SqlExpressionResolver {
    expressions: IndexMap<ExpressionKey, Expression>,
    selections: Vec<SqlSelection>,
}

impl SqlExpressionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the expression registered for `key`, calling `create` to build
    /// it on first use. A failed `create` registers nothing.
    pub fn resolve_sql_expression(
        &mut self,
        key: ExpressionKey,
        create: impl FnOnce() -> Result<Expression>,
    ) -> Result<Expression> {
        if let Some(expression) = self.expressions.get(&key) {
            return Ok(expression.clone());
        }

        let expression = create()?;
        tracing::trace!(?key, ?expression, "resolved sql expression");
        self.expressions.insert(key, expression.clone());
        Ok(expression)
    }

    /// Returns the selection of `expression`, adding it to the select list on
    /// first use. `java_type` is the type of the raw column value and must be
    /// known to `types`.
    pub fn resolve_sql_selection(
        &mut self,
        expression: Expression,
        java_type: &Type,
        fetch_parent: Option<&FetchParent>,
        types: &TypeConfiguration,
    ) -> Result<SqlSelection> {
        if let Some(selection) = self
            .selections
            .iter()
            .find(|selection| *selection.expression() == expression)
        {
            return Ok(selection.clone());
        }

        let descriptor = types.descriptor(java_type)?;

        let values_array_position = match &expression {
            Expression::ResultSetColumn {
                values_array_position,
                ..
            } => {
                if self.is_taken(*values_array_position) {
                    return Err(Error::result_mapping(format!(
                        "result column at position {} is already selected",
                        values_array_position + 1
                    )));
                }
                *values_array_position
            }
            _ => self.next_values_array_position(),
        };

        let selection = SqlSelection::new(
            values_array_position,
            expression,
            descriptor.ty().clone(),
        );

        tracing::trace!(
            jdbc_position = selection.jdbc_position(),
            values_array_position,
            java_type = descriptor.name(),
            fetch_parent = fetch_parent.map(|parent| parent.navigable_path().full_path()),
            "allocated sql selection"
        );

        self.selections.push(selection.clone());
        Ok(selection)
    }

    fn is_taken(&self, values_array_position: usize) -> bool {
        self.selections
            .iter()
            .any(|selection| selection.values_array_position() == values_array_position)
    }

    fn next_values_array_position(&self) -> usize {
        self.selections
            .iter()
            .map(|selection| selection.values_array_position() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Selections in the order they were added.
    pub fn selections(&self) -> &[SqlSelection] {
        &self.selections
    }

    pub fn expression_count(&self) -> usize {
        self.expressions.len()
    }
}
