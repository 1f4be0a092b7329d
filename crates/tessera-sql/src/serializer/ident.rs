use super::{Formatter, ToSql};

use tessera_core::schema::db::{Identifier, QualifiedTableName};

/// An identifier, quoted with the dialect's quote characters when it was
/// quoted in the mapping.
pub(super) struct Ident<'a>(pub(super) &'a Identifier);

/// A table name formatted by the generation context.
pub(super) struct TableName<'a>(pub(super) &'a QualifiedTableName);

impl ToSql for Ident<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let quoted = f.serializer.dialect.quote_identifier(self.0);
        f.dst.push_str(&quoted);
    }
}

impl ToSql for TableName<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = f.serializer.context.format(f.serializer.dialect, self.0);
        f.dst.push_str(&name);
    }
}
