mod direction;
pub use direction::Direction;

mod object;
pub use object::Object;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
