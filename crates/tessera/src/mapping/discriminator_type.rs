use super::EntityDescriptor;

use tessera_core::{
    stmt::{Type, Value},
    types::{BasicType, JdbcMapping, JdbcType},
    Result,
};

use std::sync::Arc;

/// The two faces of a discriminator: entity names in memory, and the
/// underlying value stored in the column.
///
/// Binding and extraction always go through the underlying type. Stored
/// values turn into entity names only when a result is assembled.
#[derive(Debug, Clone)]
pub struct DiscriminatorType {
    underlying: BasicType,
    entity: Arc<EntityDescriptor>,
}

impl DiscriminatorType {
    pub fn new(underlying: BasicType, entity: Arc<EntityDescriptor>) -> Self {
        Self { underlying, entity }
    }

    /// The relational type of the discriminator column.
    pub fn underlying_type(&self) -> &BasicType {
        &self.underlying
    }

    /// Reads a raw column value and returns the name of the entity it
    /// identifies.
    pub fn to_domain(&self, raw: Value) -> Result<Value> {
        let raw = self.underlying.extract(raw)?;
        let entity = self.entity.subclass_for_discriminator_value(&raw)?;
        Ok(Value::String(entity.to_string()))
    }
}

impl JdbcMapping for DiscriminatorType {
    fn java_type(&self) -> &Type {
        &Type::EntityName
    }

    fn jdbc_java_type(&self) -> &Type {
        self.underlying.java_type()
    }

    fn jdbc_type(&self) -> JdbcType {
        self.underlying.jdbc_type()
    }
}
