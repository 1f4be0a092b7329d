use super::{DiscriminatorType, DiscriminatorValue, EntityDescriptor, NavigableRole};
use crate::{
    results::{BasicFetch, BasicResult, FetchParent, FetchTiming, ValueAssembler},
    sql_ast::{
        ColumnReference, Expression, ExpressionKey, NavigablePath, SqlAstCreationState,
        SqlSelection, TableGroup,
    },
    CreationContext,
};

use tessera_core::{
    schema::db::{Identifier, QualifiedTableName},
    stmt::{Type, Value},
    types::{BasicType, JdbcMapping},
    Error, Result,
};

use std::sync::Arc;

/// Where the discriminator value is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscriminatorSelectable {
    /// A physical column of the hierarchy's table. Only table groups over
    /// `table` can select it.
    Column {
        table: QualifiedTableName,
        column: Identifier,
    },

    /// A SQL formula evaluated against the hierarchy's table.
    Formula(String),
}

/// The discriminator of a single-table entity hierarchy.
///
/// Selections of the discriminator are typed by the underlying relational
/// type. Stored values are translated to entity names only by
/// [`concrete_entity_name_for_value`](Self::concrete_entity_name_for_value)
/// and by the results built here; disassembly leaves values untouched.
#[derive(Debug, Clone)]
pub struct DiscriminatorMapping {
    role: NavigableRole,
    entity: Arc<EntityDescriptor>,
    discriminator_type: DiscriminatorType,
    selectable: DiscriminatorSelectable,
    creation_context: Arc<CreationContext>,
}

impl DiscriminatorMapping {
    pub const ROLE_NAME: &'static str = "{discriminator}";

    pub fn new(
        entity: Arc<EntityDescriptor>,
        underlying: BasicType,
        selectable: DiscriminatorSelectable,
        creation_context: Arc<CreationContext>,
    ) -> Self {
        Self {
            role: entity.navigable_role().append(Self::ROLE_NAME),
            discriminator_type: DiscriminatorType::new(underlying, entity.clone()),
            entity,
            selectable,
            creation_context,
        }
    }

    pub fn navigable_role(&self) -> &NavigableRole {
        &self.role
    }

    pub fn entity_descriptor(&self) -> &Arc<EntityDescriptor> {
        &self.entity
    }

    pub fn creation_context(&self) -> &Arc<CreationContext> {
        &self.creation_context
    }

    pub fn selectable(&self) -> &DiscriminatorSelectable {
        &self.selectable
    }

    pub fn jdbc_mapping(&self) -> &DiscriminatorType {
        &self.discriminator_type
    }

    pub fn underlying_jdbc_mapping_type(&self) -> &BasicType {
        self.discriminator_type.underlying_type()
    }

    /// The domain-facing type: the name of a concrete entity.
    pub fn java_type(&self) -> &Type {
        self.discriminator_type.java_type()
    }

    pub fn jdbc_type_count(&self) -> usize {
        1
    }

    pub fn concrete_entity_name_for_value(&self, value: &Value) -> Result<&str> {
        let entity = self.entity.subclass_for_discriminator_value(value)?;
        tracing::debug!(
            hierarchy = self.entity.name(),
            ?value,
            entity,
            "resolved discriminator value"
        );
        Ok(entity)
    }

    pub fn discriminator_value_for_entity(&self, entity: &str) -> Result<&DiscriminatorValue> {
        self.entity.discriminator_value_for_subclass(entity)
    }

    /// Selects the discriminator column of `table_group`, reusing the
    /// selection when the pass already has one.
    pub fn create_sql_selection(
        &self,
        navigable_path: &NavigablePath,
        table_group: &TableGroup,
        state: &mut SqlAstCreationState,
    ) -> Result<SqlSelection> {
        self.resolve_sql_selection(navigable_path, table_group, None, state)
    }

    /// A result exposing the concrete entity name of each row.
    pub fn create_domain_result(
        &self,
        navigable_path: &NavigablePath,
        table_group: &TableGroup,
        result_variable: Option<&str>,
        state: &mut SqlAstCreationState,
    ) -> Result<BasicResult> {
        let selection = self.resolve_sql_selection(navigable_path, table_group, None, state)?;

        Ok(BasicResult::new(
            selection.values_array_position(),
            result_variable.map(str::to_string),
            self.java_type().clone(),
            ValueAssembler::Discriminator(self.discriminator_type.clone()),
        ))
    }

    /// Fetches the discriminator as part of `fetch_parent`.
    ///
    /// # Panics
    ///
    /// The fetch parent's table group must already be registered in the
    /// pass's from clause.
    pub fn generate_fetch(
        &self,
        fetch_parent: &FetchParent,
        fetchable_path: &NavigablePath,
        timing: FetchTiming,
        selected: bool,
        result_variable: Option<&str>,
        state: &mut SqlAstCreationState,
    ) -> Result<BasicFetch> {
        let Some(table_group) = state
            .from_clause()
            .table_group(fetch_parent.navigable_path())
            .cloned()
        else {
            panic!(
                "no table group registered for fetch parent `{}`",
                fetch_parent.navigable_path()
            );
        };

        let selection =
            self.resolve_sql_selection(fetchable_path, &table_group, Some(fetch_parent), state)?;

        Ok(BasicFetch::new(
            selection.values_array_position(),
            fetch_parent,
            fetchable_path.clone(),
            self.role.clone(),
            timing,
            selected,
            result_variable.map(str::to_string),
            ValueAssembler::Discriminator(self.discriminator_type.clone()),
        ))
    }

    pub fn apply_sql_selections(
        &self,
        navigable_path: &NavigablePath,
        table_group: &TableGroup,
        state: &mut SqlAstCreationState,
    ) -> Result<()> {
        self.resolve_sql_selection(navigable_path, table_group, None, state)?;
        Ok(())
    }

    /// Like [`apply_sql_selections`](Self::apply_sql_selections), reporting
    /// the selection and the discriminator's JDBC mapping to `consumer`.
    pub fn apply_sql_selections_with(
        &self,
        navigable_path: &NavigablePath,
        table_group: &TableGroup,
        state: &mut SqlAstCreationState,
        consumer: impl FnOnce(&SqlSelection, &dyn JdbcMapping),
    ) -> Result<()> {
        let selection = self.resolve_sql_selection(navigable_path, table_group, None, state)?;
        consumer(&selection, &self.discriminator_type);
        Ok(())
    }

    /// Reports the single JDBC type at `offset`; returns the next offset.
    pub fn for_each_jdbc_type(
        &self,
        offset: usize,
        mut action: impl FnMut(usize, &dyn JdbcMapping),
    ) -> usize {
        action(offset, &self.discriminator_type);
        offset + self.jdbc_type_count()
    }

    pub fn for_each_selectable(
        &self,
        offset: usize,
        mut consumer: impl FnMut(usize, &DiscriminatorMapping),
    ) -> usize {
        consumer(offset, self);
        offset + self.jdbc_type_count()
    }

    pub fn for_each_disassembled_jdbc_value(
        &self,
        value: &Value,
        offset: usize,
        mut consumer: impl FnMut(usize, &Value, &dyn JdbcMapping),
    ) -> usize {
        consumer(offset, value, &self.discriminator_type);
        offset + self.jdbc_type_count()
    }

    pub fn break_down_jdbc_values(
        &self,
        value: Value,
        mut consumer: impl FnMut(Value, &DiscriminatorMapping),
    ) {
        consumer(self.disassemble(value), self);
    }

    /// Discriminator values are stored as they are.
    pub fn disassemble(&self, value: Value) -> Value {
        value
    }

    fn resolve_sql_selection(
        &self,
        navigable_path: &NavigablePath,
        table_group: &TableGroup,
        fetch_parent: Option<&FetchParent>,
        state: &mut SqlAstCreationState,
    ) -> Result<SqlSelection> {
        let expression = self.resolve_sql_expression(table_group, state)?;
        let creation_context = state.creation_context().clone();

        let selection = state.resolver_mut().resolve_sql_selection(
            expression,
            self.underlying_jdbc_mapping_type().jdbc_java_type(),
            fetch_parent,
            creation_context.types(),
        )?;

        tracing::trace!(
            path = %navigable_path,
            role = %self.role,
            values_array_position = selection.values_array_position(),
            "discriminator selected"
        );
        Ok(selection)
    }

    fn resolve_sql_expression(
        &self,
        table_group: &TableGroup,
        state: &mut SqlAstCreationState,
    ) -> Result<Expression> {
        let qualifier = table_group.qualifier();
        let jdbc_mapping = self.underlying_jdbc_mapping_type().clone();

        let (key, expression) = match &self.selectable {
            DiscriminatorSelectable::Column { table, column } => {
                if table_group.table() != table {
                    return Err(Error::mapping(format!(
                        "discriminator column `{column}` of `{table}` cannot be selected from table group `{}` over `{}`",
                        table_group.navigable_path(),
                        table_group.table()
                    )));
                }

                (
                    ExpressionKey::column(qualifier, column),
                    Expression::Column(ColumnReference {
                        qualifier: qualifier.to_string(),
                        column: column.clone(),
                        jdbc_mapping,
                    }),
                )
            }
            DiscriminatorSelectable::Formula(sql) => (
                ExpressionKey::formula(qualifier, sql),
                Expression::Formula {
                    qualifier: qualifier.to_string(),
                    sql: sql.clone(),
                    jdbc_mapping,
                },
            ),
        };

        state
            .resolver_mut()
            .resolve_sql_expression(key, || Ok(expression))
    }
}
