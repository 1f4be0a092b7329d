use super::NavigableRole;

use indexmap::IndexMap;
use tessera_core::{schema::db::QualifiedTableName, stmt::Value, Error, Result};

use std::{fmt, sync::Arc};

/// The root of a single-table entity hierarchy, as far as discriminator
/// resolution is concerned.
#[derive(Debug)]
pub struct EntityDescriptor {
    name: String,
    role: NavigableRole,
    table: QualifiedTableName,

    /// Stored discriminator value to concrete entity name, in declaration
    /// order.
    subtypes: IndexMap<Value, String>,

    /// Entity matched by a null discriminator.
    null_subtype: Option<String>,

    /// Entity matched by any non-null value without an exact entry.
    not_null_subtype: Option<String>,

    /// Entity name back to its discriminator value.
    values: IndexMap<String, DiscriminatorValue>,
}

/// The discriminator value identifying one entity of a hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiscriminatorValue {
    /// An exact stored value.
    Value(Value),

    /// The column is null.
    Null,

    /// The column holds a value no other entity claims.
    NotNull,
}

#[derive(Debug)]
pub struct EntityDescriptorBuilder {
    name: String,
    table: QualifiedTableName,
    entries: Vec<(DiscriminatorValue, String)>,
}

impl EntityDescriptor {
    pub fn builder(name: impl Into<String>, table: QualifiedTableName) -> EntityDescriptorBuilder {
        EntityDescriptorBuilder {
            name: name.into(),
            table,
            entries: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn navigable_role(&self) -> &NavigableRole {
        &self.role
    }

    /// The table the whole hierarchy is stored in.
    pub fn table(&self) -> &QualifiedTableName {
        &self.table
    }

    /// The concrete entity stored with discriminator `value`.
    pub fn subclass_for_discriminator_value(&self, value: &Value) -> Result<&str> {
        let found = if value.is_null() {
            self.null_subtype.as_deref()
        } else {
            self.subtypes
                .get(value)
                .map(String::as_str)
                .or(self.not_null_subtype.as_deref())
        };

        found.ok_or_else(|| Error::unmapped_discriminator(value, &self.name))
    }

    /// The discriminator value stored for entity `name`.
    pub fn discriminator_value_for_subclass(&self, name: &str) -> Result<&DiscriminatorValue> {
        self.values.get(name).ok_or_else(|| {
            Error::mapping(format!(
                "entity `{}` is not part of the `{}` hierarchy",
                name, self.name
            ))
        })
    }

    /// Entity names in declaration order.
    pub fn subclass_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }
}

impl EntityDescriptorBuilder {
    /// Maps a stored discriminator value to a concrete entity.
    pub fn subtype(mut self, value: impl Into<Value>, entity: impl Into<String>) -> Self {
        let value = match value.into() {
            Value::Null => DiscriminatorValue::Null,
            value => DiscriminatorValue::Value(value),
        };
        self.entries.push((value, entity.into()));
        self
    }

    /// The entity stored with a null discriminator.
    pub fn null_subtype(mut self, entity: impl Into<String>) -> Self {
        self.entries.push((DiscriminatorValue::Null, entity.into()));
        self
    }

    /// The entity stored with any discriminator value not otherwise mapped.
    pub fn not_null_subtype(mut self, entity: impl Into<String>) -> Self {
        self.entries
            .push((DiscriminatorValue::NotNull, entity.into()));
        self
    }

    pub fn build(self) -> Result<Arc<EntityDescriptor>> {
        let mut descriptor = EntityDescriptor {
            role: NavigableRole::new(self.name.clone()),
            name: self.name,
            table: self.table,
            subtypes: IndexMap::new(),
            null_subtype: None,
            not_null_subtype: None,
            values: IndexMap::new(),
        };

        for (value, entity) in self.entries {
            let claimed = match &value {
                DiscriminatorValue::Value(value) => descriptor
                    .subtypes
                    .insert(value.clone(), entity.clone())
                    .is_some(),
                DiscriminatorValue::Null => descriptor.null_subtype.replace(entity.clone()).is_some(),
                DiscriminatorValue::NotNull => descriptor
                    .not_null_subtype
                    .replace(entity.clone())
                    .is_some(),
            };

            if claimed {
                return Err(Error::invalid_schema(format!(
                    "discriminator value {} is mapped more than once in `{}`",
                    value, descriptor.name
                )));
            }

            if descriptor.values.insert(entity.clone(), value).is_some() {
                return Err(Error::invalid_schema(format!(
                    "entity `{}` has more than one discriminator value in `{}`",
                    entity, descriptor.name
                )));
            }
        }

        Ok(Arc::new(descriptor))
    }
}

impl fmt::Display for DiscriminatorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscriminatorValue::Value(value) => write!(f, "{value:?}"),
            DiscriminatorValue::Null => f.write_str("<null>"),
            DiscriminatorValue::NotNull => f.write_str("<not null>"),
        }
    }
}
