use crate::stmt::Type;

/// The SQL type of a column or parameter as reported by the driver.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JdbcType {
    Boolean,
    SmallInt,
    Integer,
    BigInt,
    Char,
    VarChar,
    Binary,
}

impl JdbcType {
    pub const fn name(self) -> &'static str {
        match self {
            JdbcType::Boolean => "BOOLEAN",
            JdbcType::SmallInt => "SMALLINT",
            JdbcType::Integer => "INTEGER",
            JdbcType::BigInt => "BIGINT",
            JdbcType::Char => "CHAR",
            JdbcType::VarChar => "VARCHAR",
            JdbcType::Binary => "BINARY",
        }
    }

    /// The value type a column of this JDBC type is read as when nothing
    /// else is known.
    pub const fn default_java_type(self) -> Type {
        match self {
            JdbcType::Boolean => Type::Bool,
            JdbcType::SmallInt => Type::I16,
            JdbcType::Integer => Type::I32,
            JdbcType::BigInt => Type::I64,
            JdbcType::Char | JdbcType::VarChar => Type::String,
            JdbcType::Binary => Type::Bytes,
        }
    }

    /// Returns `true` when a column of this JDBC type can be read as `ty`.
    ///
    /// Integer columns may be read into wider integer types. Object types are
    /// never readable directly; they require a converter.
    pub fn can_read_as(self, ty: &Type) -> bool {
        let default = self.default_java_type();
        &default == ty
            || ty.is_widening_of(&default)
            || matches!(
                (self, ty),
                (JdbcType::Char | JdbcType::VarChar, Type::EntityName)
            )
    }
}
