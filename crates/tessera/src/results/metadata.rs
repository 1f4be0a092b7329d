use tessera_core::{
    types::{BasicType, JavaTypeDescriptor, JdbcType},
    Error, Result, TypeConfiguration,
};

/// Shape of the rows a statement returned.
pub trait RowMetadata {
    fn column_count(&self) -> usize;

    /// The 1-based position of the column labelled `alias`. Labels match
    /// case-insensitively.
    fn resolve_column_position(&self, alias: &str) -> Result<usize>;

    /// The label of the column at 1-based `position`.
    fn resolve_column_name(&self, position: usize) -> Result<&str>;

    /// How to read the column at 1-based `position`. A `hint` settles which
    /// type the value is read as; without one the column's JDBC type decides.
    fn resolve_type(
        &self,
        position: usize,
        hint: Option<&JavaTypeDescriptor>,
        types: &TypeConfiguration,
    ) -> Result<BasicType>;
}

/// Row metadata captured from a result set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSetMetadata {
    columns: Vec<(String, JdbcType)>,
}

impl ResultSetMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column. Columns are numbered from 1 in the order added.
    pub fn column(mut self, label: impl Into<String>, jdbc_type: JdbcType) -> Self {
        self.columns.push((label.into(), jdbc_type));
        self
    }

    fn jdbc_type(&self, position: usize) -> Result<JdbcType> {
        position
            .checked_sub(1)
            .and_then(|index| self.columns.get(index))
            .map(|(_, jdbc_type)| *jdbc_type)
            .ok_or_else(|| Error::unknown_column_position(position))
    }
}

impl RowMetadata for ResultSetMetadata {
    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn resolve_column_position(&self, alias: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|(label, _)| label.eq_ignore_ascii_case(alias))
            .map(|index| index + 1)
            .ok_or_else(|| Error::unknown_column_alias(alias))
    }

    fn resolve_column_name(&self, position: usize) -> Result<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.columns.get(index))
            .map(|(label, _)| label.as_str())
            .ok_or_else(|| Error::unknown_column_position(position))
    }

    fn resolve_type(
        &self,
        position: usize,
        hint: Option<&JavaTypeDescriptor>,
        types: &TypeConfiguration,
    ) -> Result<BasicType> {
        let jdbc_type = self.jdbc_type(position)?;
        types.resolve_basic_type(position, jdbc_type, hint)
    }
}
