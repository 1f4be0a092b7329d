mod add_unique_key;
pub use add_unique_key::AddUniqueKey;

mod drop_unique_key;
pub use drop_unique_key::DropUniqueKey;

mod unique_constraint;
pub use unique_constraint::{UniqueColumn, UniqueConstraint};

/// A DDL statement concerning unique constraints.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    AddUniqueKey(AddUniqueKey),
    DropUniqueKey(DropUniqueKey),
}
