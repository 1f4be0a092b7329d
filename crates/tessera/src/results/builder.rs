use super::{
    jdbc_position_to_values_array_position, BasicResult, LegacyFetchResolver, RowMetadata,
    ValueAssembler,
};
use crate::{
    sql_ast::{Expression, ExpressionKey, SqlAstCreationState, SqlSelection},
    CreationContext,
};

use tessera_core::{
    stmt::Type,
    types::{
        AttributeConverter, BasicValueConverter, ConverterClass, ConverterImpl,
        JavaTypeDescriptor, JdbcMapping, ManagedBean,
    },
    Error, Result,
};

/// A scalar result read from a column as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasicResultBuilder {
    column_alias: Option<String>,

    /// Type to read the column as. Without one the column's JDBC type
    /// decides.
    explicit_type: Option<Type>,
}

/// A scalar result passed through an attribute converter.
///
/// Two builders are equal when their aliases are equal (both absent counts
/// as equal) and they wrap equal converters, no matter whether the converter
/// was provided directly or resolved from the bean registry. Equal builders
/// share a cached query plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConvertedResultBuilder {
    column_alias: Option<String>,
    converter: ConverterImpl,
}

/// Any builder of a single scalar result column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DynamicResultBuilder {
    Basic(BasicResultBuilder),
    Converted(ConvertedResultBuilder),
}

impl BasicResultBuilder {
    pub fn new(column_alias: Option<&str>) -> Self {
        Self {
            column_alias: column_alias.map(str::to_string),
            explicit_type: None,
        }
    }

    pub fn with_type(mut self, ty: Type) -> Self {
        self.explicit_type = Some(ty);
        self
    }

    pub fn column_alias(&self) -> Option<&str> {
        self.column_alias.as_deref()
    }

    pub fn java_type(&self) -> Option<&Type> {
        self.explicit_type.as_ref()
    }

    pub fn build_result(
        &self,
        metadata: &dyn RowMetadata,
        result_position: usize,
        _legacy_fetch_resolver: &LegacyFetchResolver,
        state: &mut SqlAstCreationState,
    ) -> Result<BasicResult> {
        let hint = match &self.explicit_type {
            Some(ty) => Some(state.creation_context().types().descriptor(ty)?),
            None => None,
        };

        let selection = resolve_result_column(
            self.column_alias.as_deref(),
            hint.as_deref(),
            metadata,
            result_position,
            state,
        )?;
        let basic_type = selection.expression().jdbc_mapping().clone();

        Ok(BasicResult::new(
            selection.values_array_position(),
            self.column_alias.clone(),
            basic_type.java_type().clone(),
            ValueAssembler::Basic(basic_type),
        ))
    }
}

impl ConvertedResultBuilder {
    /// Builds a result converted by the given converter instance.
    pub fn with_converter<C: AttributeConverter>(
        column_alias: Option<&str>,
        domain: &Type,
        relational: &Type,
        converter: C,
        creation_context: &CreationContext,
    ) -> Result<Self> {
        Self::from_bean(
            column_alias,
            domain,
            relational,
            ManagedBean::provided(converter),
            creation_context,
        )
    }

    /// Builds a result converted by the bean registered for `class`.
    pub fn with_converter_class(
        column_alias: Option<&str>,
        domain: &Type,
        relational: &Type,
        class: ConverterClass,
        creation_context: &CreationContext,
    ) -> Result<Self> {
        let bean = creation_context.beans().get_bean(class)?;
        Self::from_bean(column_alias, domain, relational, bean, creation_context)
    }

    fn from_bean(
        column_alias: Option<&str>,
        domain: &Type,
        relational: &Type,
        bean: ManagedBean,
        creation_context: &CreationContext,
    ) -> Result<Self> {
        let types = creation_context.types();
        let converter =
            ConverterImpl::new(bean, types.descriptor(domain)?, types.descriptor(relational)?);

        Ok(Self {
            column_alias: column_alias.map(str::to_string),
            converter,
        })
    }

    pub fn column_alias(&self) -> Option<&str> {
        self.column_alias.as_deref()
    }

    pub fn converter(&self) -> &ConverterImpl {
        &self.converter
    }

    /// The domain type results are converted to.
    pub fn java_type(&self) -> &Type {
        self.converter.domain_java_type().ty()
    }

    /// An instance equal to this one, suitable as a plan cache key.
    pub fn cache_key_instance(&self) -> Self {
        self.clone()
    }

    /// Locates the column in `metadata` and returns a result that converts
    /// its value.
    ///
    /// The column is found by alias, or at `result_position + 1` when the
    /// builder has no alias. The converter's relational type decides how the
    /// column is read.
    pub fn build_result(
        &self,
        metadata: &dyn RowMetadata,
        result_position: usize,
        _legacy_fetch_resolver: &LegacyFetchResolver,
        state: &mut SqlAstCreationState,
    ) -> Result<BasicResult> {
        let selection = resolve_result_column(
            self.column_alias.as_deref(),
            Some(self.converter.relational_java_type()),
            metadata,
            result_position,
            state,
        )?;

        Ok(BasicResult::new(
            selection.values_array_position(),
            self.column_alias.clone(),
            self.java_type().clone(),
            ValueAssembler::Converted(self.converter.clone()),
        ))
    }
}

impl DynamicResultBuilder {
    pub fn column_alias(&self) -> Option<&str> {
        match self {
            DynamicResultBuilder::Basic(builder) => builder.column_alias(),
            DynamicResultBuilder::Converted(builder) => builder.column_alias(),
        }
    }

    /// The type of the built result, when known before resolution.
    pub fn java_type(&self) -> Option<&Type> {
        match self {
            DynamicResultBuilder::Basic(builder) => builder.java_type(),
            DynamicResultBuilder::Converted(builder) => Some(builder.java_type()),
        }
    }

    pub fn cache_key_instance(&self) -> Self {
        self.clone()
    }

    pub fn build_result(
        &self,
        metadata: &dyn RowMetadata,
        result_position: usize,
        legacy_fetch_resolver: &LegacyFetchResolver,
        state: &mut SqlAstCreationState,
    ) -> Result<BasicResult> {
        match self {
            DynamicResultBuilder::Basic(builder) => {
                builder.build_result(metadata, result_position, legacy_fetch_resolver, state)
            }
            DynamicResultBuilder::Converted(builder) => {
                builder.build_result(metadata, result_position, legacy_fetch_resolver, state)
            }
        }
    }
}

impl From<BasicResultBuilder> for DynamicResultBuilder {
    fn from(value: BasicResultBuilder) -> Self {
        Self::Basic(value)
    }
}

impl From<ConvertedResultBuilder> for DynamicResultBuilder {
    fn from(value: ConvertedResultBuilder) -> Self {
        Self::Converted(value)
    }
}

/// Selects the result set column a builder reads, once per pass.
fn resolve_result_column(
    column_alias: Option<&str>,
    hint: Option<&JavaTypeDescriptor>,
    metadata: &dyn RowMetadata,
    result_position: usize,
    state: &mut SqlAstCreationState,
) -> Result<SqlSelection> {
    let creation_context = state.creation_context().clone();
    let types = creation_context.types();

    let key = match column_alias {
        Some(alias) => ExpressionKey::alias(alias),
        None => ExpressionKey::position(result_position + 1),
    };

    let expression = state.resolver_mut().resolve_sql_expression(key, || {
        let jdbc_position = match column_alias {
            Some(alias) => metadata.resolve_column_position(alias)?,
            None => result_position + 1,
        };

        let values_array_position = jdbc_position_to_values_array_position(jdbc_position)?;
        let jdbc_mapping = metadata.resolve_type(jdbc_position, hint, types)?;

        tracing::debug!(
            alias = column_alias,
            jdbc_position,
            values_array_position,
            java_type = ?jdbc_mapping.java_type(),
            "resolved result column"
        );

        Ok(Expression::ResultSetColumn {
            values_array_position,
            jdbc_mapping,
        })
    })?;

    // The column may have been resolved earlier in the pass without a hint,
    // or with a different one.
    if let (
        Some(hint),
        Expression::ResultSetColumn {
            values_array_position,
            jdbc_mapping,
        },
    ) = (hint, &expression)
    {
        let jdbc_type = jdbc_mapping.jdbc_type();
        if !jdbc_type.can_read_as(hint.ty()) {
            return Err(Error::type_mismatch(
                values_array_position + 1,
                hint.ty(),
                jdbc_type.name(),
            ));
        }
    }

    let java_type = expression.jdbc_mapping().java_type().clone();
    state
        .resolver_mut()
        .resolve_sql_selection(expression, &java_type, None, types)
}
