mod context;
pub use context::{CreationContext, CreationContextBuilder};

pub mod mapping;
pub use mapping::{DiscriminatorMapping, EntityDescriptor};

pub mod results;
pub use results::{ConvertedResultBuilder, DynamicResultBuilder, ResultSetMapping};

pub mod sql_ast;
pub use sql_ast::SqlAstCreationState;

pub use tessera_core::{Error, Result};
