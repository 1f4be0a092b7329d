use super::JdbcType;
use crate::{
    stmt::{Type, Value},
    Result,
};

use std::fmt;

/// Describes how a single column value travels between JDBC and memory.
pub trait JdbcMapping: fmt::Debug + Send + Sync {
    /// The type values have once read.
    fn java_type(&self) -> &Type;

    /// The type of the raw value bound to or extracted from JDBC. Differs from
    /// [`java_type`](JdbcMapping::java_type) only for mappings that translate
    /// values after extraction.
    fn jdbc_java_type(&self) -> &Type {
        self.java_type()
    }

    fn jdbc_type(&self) -> JdbcType;
}

/// A value type paired with the JDBC type it is stored as.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasicType {
    java_type: Type,
    jdbc_type: JdbcType,
}

impl BasicType {
    pub fn new(java_type: Type, jdbc_type: JdbcType) -> Self {
        Self {
            java_type,
            jdbc_type,
        }
    }

    /// Reads a raw column value as this type.
    pub fn extract(&self, value: Value) -> Result<Value> {
        value.cast(&self.java_type)
    }
}

impl JdbcMapping for BasicType {
    fn java_type(&self) -> &Type {
        &self.java_type
    }

    fn jdbc_type(&self) -> JdbcType {
        self.jdbc_type
    }
}
