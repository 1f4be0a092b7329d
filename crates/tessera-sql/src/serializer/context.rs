use crate::Dialect;

use tessera_core::schema::db::{Identifier, QualifiedTableName};

/// Formats qualified table names.
///
/// Names that do not specify a catalog or schema pick up the context's
/// defaults. Quoting is left to the dialect the name is formatted for, so a
/// context can be shared across databases.
#[derive(Debug, Clone, Default)]
pub struct SqlStringGenerationContext {
    default_catalog: Option<Identifier>,
    default_schema: Option<Identifier>,
}

impl SqlStringGenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_catalog(mut self, catalog: impl Into<Identifier>) -> Self {
        self.default_catalog = Some(catalog.into());
        self
    }

    pub fn with_default_schema(mut self, schema: impl Into<Identifier>) -> Self {
        self.default_schema = Some(schema.into());
        self
    }

    /// Joins the parts of `name` with `.`, quoting each part the mapping
    /// quoted with `dialect`'s quote characters.
    pub fn format(&self, dialect: &Dialect, name: &QualifiedTableName) -> String {
        let catalog = name.catalog.as_ref().or(self.default_catalog.as_ref());
        let schema = name.schema.as_ref().or(self.default_schema.as_ref());

        let mut ret = String::new();
        for part in catalog.into_iter().chain(schema).chain([&name.table]) {
            if !ret.is_empty() {
                ret.push('.');
            }
            ret.push_str(&dialect.quote_identifier(part));
        }
        ret
    }
}
