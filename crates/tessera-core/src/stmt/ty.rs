/// A value type as seen by the mapping layer.
///
/// This is the identity used to look up type descriptors in the
/// [`TypeConfiguration`](crate::TypeConfiguration). Relational values are
/// always one of the scalar variants; converters may produce
/// [`Type::Object`] domain values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// String type
    String,

    /// Byte array
    Bytes,

    /// The name of a concrete entity type within a polymorphic hierarchy.
    EntityName,

    /// An application type produced by a converter, identified by its Rust
    /// type name.
    Object(&'static str),
}

impl Type {
    /// Returns the [`Type::Object`] identifying `T`.
    pub fn of<T: ?Sized + 'static>() -> Type {
        Type::Object(std::any::type_name::<T>())
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Type::Object(_))
    }

    /// True when a value of type `other` can be widened into this type
    /// without loss.
    pub fn is_widening_of(&self, other: &Type) -> bool {
        matches!(
            (other, self),
            (Type::I16, Type::I32) | (Type::I16, Type::I64) | (Type::I32, Type::I64)
        )
    }
}
