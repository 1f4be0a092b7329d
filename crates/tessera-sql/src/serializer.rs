#[macro_use]
mod fmt;
pub(crate) use fmt::ToSql;

mod context;
pub use context::SqlStringGenerationContext;

mod delim;
use delim::Comma;

mod ident;
use ident::{Ident, TableName};

// Fragment serializers
mod statement;

use crate::{stmt::Statement, Dialect};

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer<'a> {
    /// The dialect handles the differences between SQL products.
    dialect: &'a Dialect,

    /// Formats qualified table names.
    context: &'a SqlStringGenerationContext,
}

pub(crate) struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn new(dialect: &'a Dialect, context: &'a SqlStringGenerationContext) -> Self {
        Serializer { dialect, context }
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        self.fragment(stmt)
    }

    /// Serializes a fragment that is not a complete statement.
    pub(crate) fn fragment(&self, value: impl ToSql) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        value.to_sql(&mut fmt);
        ret
    }
}
