use super::{Object, Type};
use crate::{Error, Result};

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// String value
    String(String),

    /// Byte array
    Bytes(Vec<u8>),

    /// Opaque domain value
    Object(Object),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn object<T: std::any::Any + Send + Sync>(value: T) -> Self {
        Self::Object(Object::new(value))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }

    /// Returns `true` when the value can be read as `ty`. Null is an instance
    /// of every type.
    pub fn is_a(&self, ty: &Type) -> bool {
        match (self, ty) {
            (Self::Null, _) => true,
            (Self::Bool(_), Type::Bool) => true,
            (Self::I16(_), Type::I16 | Type::I32 | Type::I64) => true,
            (Self::I32(_), Type::I32 | Type::I64) => true,
            (Self::I64(_), Type::I64) => true,
            (Self::String(_), Type::String | Type::EntityName) => true,
            (Self::Bytes(_), Type::Bytes) => true,
            (Self::Object(object), Type::Object(name)) => object.type_name() == *name,
            _ => false,
        }
    }

    /// Converts the value into `ty`, widening integers when needed.
    pub fn cast(self, ty: &Type) -> Result<Value> {
        if !self.is_a(ty) {
            return Err(Error::value_type_mismatch(&self, ty));
        }

        Ok(match (self, ty) {
            (Self::I16(v), Type::I32) => Self::I32(v.into()),
            (Self::I16(v), Type::I64) => Self::I64(v.into()),
            (Self::I32(v), Type::I64) => Self::I64(v.into()),
            (value, _) => value,
        })
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i16> for Value {
    fn from(src: i16) -> Self {
        Self::I16(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
