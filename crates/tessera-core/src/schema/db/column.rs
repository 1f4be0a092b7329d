use super::Identifier;
use crate::types::JdbcType;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// The name of the column in the database.
    pub name: Identifier,

    /// The JDBC type the column is stored as.
    pub ty: JdbcType,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// True if the column alone is declared unique. Only dialects that
    /// express uniqueness inline use this flag.
    pub unique: bool,
}

impl Column {
    pub fn new(name: impl Into<Identifier>, ty: JdbcType) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: true,
            unique: false,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn is_quoted(&self) -> bool {
        self.name.is_quoted()
    }
}
