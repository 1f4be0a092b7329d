use super::{BasicType, JavaTypeDescriptor, JdbcType};
use crate::{stmt::Type, Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Registry of type descriptors.
///
/// Scalar types are always present. Object types produced by converters must
/// be registered before descriptors for them can be resolved. Once built the
/// configuration is immutable and may be shared freely.
#[derive(Debug)]
pub struct TypeConfiguration {
    descriptors: IndexMap<Type, Arc<JavaTypeDescriptor>>,
}

#[derive(Debug)]
pub struct TypeConfigurationBuilder {
    descriptors: IndexMap<Type, Arc<JavaTypeDescriptor>>,
}

impl TypeConfiguration {
    pub fn builder() -> TypeConfigurationBuilder {
        let mut descriptors = IndexMap::new();

        for (ty, name, jdbc_type) in [
            (Type::Bool, "bool", Some(JdbcType::Boolean)),
            (Type::I16, "i16", Some(JdbcType::SmallInt)),
            (Type::I32, "i32", Some(JdbcType::Integer)),
            (Type::I64, "i64", Some(JdbcType::BigInt)),
            (Type::String, "String", Some(JdbcType::VarChar)),
            (Type::Bytes, "Vec<u8>", Some(JdbcType::Binary)),
            (Type::EntityName, "EntityName", Some(JdbcType::VarChar)),
        ] {
            descriptors.insert(
                ty.clone(),
                Arc::new(JavaTypeDescriptor::new(ty, name, jdbc_type)),
            );
        }

        TypeConfigurationBuilder { descriptors }
    }

    /// Returns the descriptor for `ty`.
    pub fn descriptor(&self, ty: &Type) -> Result<Arc<JavaTypeDescriptor>> {
        self.descriptors
            .get(ty)
            .cloned()
            .ok_or_else(|| Error::unknown_type(ty))
    }

    /// The basic type a column of `jdbc_type` is read as without a hint.
    pub fn standard_basic_type(&self, jdbc_type: JdbcType) -> BasicType {
        BasicType::new(jdbc_type.default_java_type(), jdbc_type)
    }

    /// The basic type for reading column `position` of `jdbc_type` as the
    /// hinted type, failing when the two are incompatible.
    pub fn resolve_basic_type(
        &self,
        position: usize,
        jdbc_type: JdbcType,
        hint: Option<&JavaTypeDescriptor>,
    ) -> Result<BasicType> {
        let Some(hint) = hint else {
            return Ok(self.standard_basic_type(jdbc_type));
        };

        if !jdbc_type.can_read_as(hint.ty()) {
            return Err(Error::type_mismatch(position, hint.ty(), jdbc_type.name()));
        }

        Ok(BasicType::new(hint.ty().clone(), jdbc_type))
    }
}

impl Default for TypeConfiguration {
    fn default() -> Self {
        TypeConfiguration::builder().build()
    }
}

impl TypeConfigurationBuilder {
    /// Registers `T` as an object type that converters may produce.
    pub fn register_object<T: ?Sized + 'static>(&mut self) -> &mut Self {
        let name = std::any::type_name::<T>();
        let ty = Type::Object(name);
        self.descriptors
            .entry(ty.clone())
            .or_insert_with(|| Arc::new(JavaTypeDescriptor::new(ty, name, None)));
        self
    }

    pub fn build(&self) -> TypeConfiguration {
        TypeConfiguration {
            descriptors: self.descriptors.clone(),
        }
    }
}
