mod column;
pub use column::Column;

mod name;
pub use name::{Identifier, QualifiedTableName};

mod table;
pub use table::{Table, TableBuilder};

mod unique_key;
pub use unique_key::UniqueKey;
