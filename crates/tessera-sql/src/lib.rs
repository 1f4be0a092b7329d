pub mod dialect;
pub use dialect::{Dialect, UniqueStrategy};

pub mod migration;
pub use migration::UniqueKeyStatements;

pub mod serializer;
pub use serializer::{Serializer, SqlStringGenerationContext};

pub mod stmt;
pub use stmt::Statement;

mod unique;
pub use unique::UniqueDelegate;
