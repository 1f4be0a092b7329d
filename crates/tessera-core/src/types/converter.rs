use super::{JavaTypeDescriptor, ManagedBean};
use crate::{stmt::Value, Error, Result};

use std::{
    any::TypeId,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// A user-supplied two-way conversion between a domain value and the value
/// stored in a column.
pub trait AttributeConverter: Send + Sync + 'static {
    /// Converts a domain value to the value written to the database.
    fn to_relational(&self, domain: Value) -> Result<Value>;

    /// Converts a value read from the database to its domain value.
    fn to_domain(&self, relational: Value) -> Result<Value>;
}

/// Identifies an [`AttributeConverter`] implementation.
#[derive(Clone, Copy)]
pub struct ConverterClass {
    type_id: TypeId,
    name: &'static str,
}

/// A converter together with the types on both of its sides.
pub trait BasicValueConverter: fmt::Debug + Send + Sync {
    fn to_domain_value(&self, relational: Value) -> Result<Value>;

    fn to_relational_value(&self, domain: Value) -> Result<Value>;

    fn domain_java_type(&self) -> &JavaTypeDescriptor;

    fn relational_java_type(&self) -> &JavaTypeDescriptor;
}

/// The canonical [`BasicValueConverter`] wrapping a managed converter bean.
///
/// Two instances are equal when they wrap the same converter class between
/// the same types, regardless of whether the bean was provided directly or
/// resolved through the [`BeanRegistry`](super::BeanRegistry).
#[derive(Clone)]
pub struct ConverterImpl {
    bean: ManagedBean,
    domain: Arc<JavaTypeDescriptor>,
    relational: Arc<JavaTypeDescriptor>,
}

impl ConverterClass {
    pub fn of<C: AttributeConverter>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            name: std::any::type_name::<C>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ConverterClass {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ConverterClass {}

impl Hash for ConverterClass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ConverterClass {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ConverterClass({})", self.name)
    }
}

impl ConverterImpl {
    pub fn new(
        bean: ManagedBean,
        domain: Arc<JavaTypeDescriptor>,
        relational: Arc<JavaTypeDescriptor>,
    ) -> Self {
        Self {
            bean,
            domain,
            relational,
        }
    }

    pub fn converter_class(&self) -> ConverterClass {
        self.bean.class()
    }
}

impl BasicValueConverter for ConverterImpl {
    fn to_domain_value(&self, relational: Value) -> Result<Value> {
        let relational = relational.cast(self.relational.ty())?;
        let domain = self.bean.instance().to_domain(relational)?;

        if !self.domain.is_instance(&domain) {
            return Err(Error::value_type_mismatch(&domain, self.domain.ty()));
        }

        Ok(domain)
    }

    fn to_relational_value(&self, domain: Value) -> Result<Value> {
        let relational = self.bean.instance().to_relational(domain)?;
        relational.cast(self.relational.ty())
    }

    fn domain_java_type(&self) -> &JavaTypeDescriptor {
        &self.domain
    }

    fn relational_java_type(&self) -> &JavaTypeDescriptor {
        &self.relational
    }
}

impl PartialEq for ConverterImpl {
    fn eq(&self, other: &Self) -> bool {
        self.bean.class() == other.bean.class()
            && self.domain.ty() == other.domain.ty()
            && self.relational.ty() == other.relational.ty()
    }
}

impl Eq for ConverterImpl {}

impl Hash for ConverterImpl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bean.class().hash(state);
        self.domain.ty().hash(state);
        self.relational.ty().hash(state);
    }
}

impl fmt::Debug for ConverterImpl {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("ConverterImpl")
            .field("converter", &self.bean.class())
            .field("domain", &self.domain.ty())
            .field("relational", &self.relational.ty())
            .finish()
    }
}
