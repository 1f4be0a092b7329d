//! State of one statement-building pass.
//!
//! Everything in this module is owned by a single compilation: the
//! expressions and selections it resolves, and the table groups it has joined.
//! A [`SqlAstCreationState`] is created per pass, threaded through by `&mut`,
//! and dropped once the statement is built.

mod expression;
pub use expression::{ColumnReference, Expression, ExpressionKey};

mod from_clause;
pub use from_clause::{FromClauseAccess, TableGroup};

mod path;
pub use path::NavigablePath;

mod resolver;
pub use resolver::SqlExpressionResolver;

mod selection;
pub use selection::SqlSelection;

mod state;
pub use state::SqlAstCreationState;
