use super::JdbcType;
use crate::stmt::{Type, Value};

use std::borrow::Cow;

/// Describes an in-memory value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaTypeDescriptor {
    ty: Type,
    name: Cow<'static, str>,
    recommended_jdbc_type: Option<JdbcType>,
}

impl JavaTypeDescriptor {
    pub(crate) fn new(
        ty: Type,
        name: impl Into<Cow<'static, str>>,
        recommended_jdbc_type: Option<JdbcType>,
    ) -> Self {
        Self {
            ty,
            name: name.into(),
            recommended_jdbc_type,
        }
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The JDBC type this type is stored as unless told otherwise. `None` for
    /// object types, which are only stored through a converter.
    pub fn recommended_jdbc_type(&self) -> Option<JdbcType> {
        self.recommended_jdbc_type
    }

    pub fn is_instance(&self, value: &Value) -> bool {
        value.is_a(&self.ty)
    }
}
