use super::{Comma, Formatter, Ident, TableName, ToSql};

use crate::stmt;

struct AlterTable<'a>(&'a stmt::Statement);

impl ToSql for AlterTable<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = match self.0 {
            stmt::Statement::AddUniqueKey(stmt) => &stmt.table,
            stmt::Statement::DropUniqueKey(stmt) => &stmt.table,
        };

        let table_name = f.serializer.fragment(TableName(table));
        let prefix = f.serializer.dialect.alter_table_string(&table_name);
        fmt!(f, &prefix);
    }
}

impl ToSql for &stmt::UniqueColumn {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let order = self.order.map(|order| (" ", order.as_sql()));
        fmt!(f, Ident(&self.name) order);
    }
}

impl ToSql for &stmt::UniqueConstraint {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = Comma(&self.columns);
        fmt!(f, "constraint " Ident(&self.name) " unique (" columns ")");
    }
}

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let dialect = f.serializer.dialect;

        match self {
            stmt::Statement::AddUniqueKey(stmt) => {
                let constraint = &stmt.constraint;
                fmt!(f, AlterTable(self) " add " constraint);
            }
            stmt::Statement::DropUniqueKey(stmt) => {
                let before = dialect
                    .supports_if_exists_before_constraint_name()
                    .then_some(dialect.if_exists_before_token);
                let after = dialect
                    .supports_if_exists_after_constraint_name()
                    .then_some(dialect.if_exists_after_token);

                fmt!(
                    f,
                    AlterTable(self) dialect.drop_constraint_keyword before Ident(&stmt.name) after
                );
            }
        }
    }
}
