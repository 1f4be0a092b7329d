mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::db::Table;

pub mod stmt;

pub mod types;
pub use types::TypeConfiguration;

/// A Result type alias that uses Tessera's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
