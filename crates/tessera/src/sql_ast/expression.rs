use tessera_core::{schema::db::Identifier, types::BasicType};

/// Identifies an expression within one pass. Resolving the same key twice
/// yields the expression created the first time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpressionKey {
    /// A column of the table group with the given qualifier.
    Column { qualifier: String, column: Identifier },

    /// A formula evaluated against the table group with the given qualifier.
    Formula { qualifier: String, sql: String },

    /// A result set column addressed by alias.
    Alias(String),

    /// A result set column addressed by 1-based JDBC position.
    Position(usize),
}

/// A SQL expression producing a single column value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Column(ColumnReference),

    Formula {
        qualifier: String,
        sql: String,
        jdbc_mapping: BasicType,
    },

    /// A column of a result set whose shape is known only from its metadata.
    /// Carries its own position; it is already a selection.
    ResultSetColumn {
        values_array_position: usize,
        jdbc_mapping: BasicType,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnReference {
    pub qualifier: String,
    pub column: Identifier,
    pub jdbc_mapping: BasicType,
}

impl ExpressionKey {
    pub fn column(qualifier: &str, column: &Identifier) -> Self {
        Self::Column {
            qualifier: qualifier.to_string(),
            column: column.clone(),
        }
    }

    pub fn formula(qualifier: &str, sql: &str) -> Self {
        Self::Formula {
            qualifier: qualifier.to_string(),
            sql: sql.to_string(),
        }
    }

    pub fn alias(alias: &str) -> Self {
        Self::Alias(alias.to_string())
    }

    pub fn position(jdbc_position: usize) -> Self {
        Self::Position(jdbc_position)
    }
}

impl Expression {
    /// How the expression's value is bound and extracted.
    pub fn jdbc_mapping(&self) -> &BasicType {
        match self {
            Self::Column(column) => &column.jdbc_mapping,
            Self::Formula { jdbc_mapping, .. } => jdbc_mapping,
            Self::ResultSetColumn { jdbc_mapping, .. } => jdbc_mapping,
        }
    }
}

impl From<ColumnReference> for Expression {
    fn from(value: ColumnReference) -> Self {
        Self::Column(value)
    }
}
