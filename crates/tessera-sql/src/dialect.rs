use tessera_core::schema::db::Identifier;

/// SQL syntax policy of one database product.
///
/// Dialects differ only in data: new products are supported by declaring a
/// new constant, usually as a struct update of [`Dialect::ANSI`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Product name, for diagnostics.
    pub name: &'static str,

    /// Character opening a quoted identifier.
    pub open_quote: char,

    /// Character closing a quoted identifier.
    pub close_quote: char,

    /// `alter table if exists <name>` is accepted.
    pub if_exists_after_alter_table: bool,

    /// `... drop constraint if exists <name>` is accepted.
    pub if_exists_before_constraint_name: bool,

    /// `... drop constraint <name> if exists` is accepted.
    pub if_exists_after_constraint_name: bool,

    /// Text emitted before the constraint name when
    /// `if_exists_before_constraint_name` is set.
    pub if_exists_before_token: &'static str,

    /// Text emitted after the constraint name when
    /// `if_exists_after_constraint_name` is set.
    pub if_exists_after_token: &'static str,

    /// Keyword between the alter-table prefix and the constraint name when
    /// dropping a unique key, surrounding spaces included.
    pub drop_constraint_keyword: &'static str,

    /// Where unique constraints are declared.
    pub unique_strategy: UniqueStrategy,
}

/// How a dialect declares unique constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueStrategy {
    /// A separate `alter table ... add constraint` after the table exists.
    AlterTable,

    /// Inside the `create table` statement. Used by databases that cannot add
    /// constraints to an existing table.
    CreateTable,
}

impl Dialect {
    /// Standard SQL with no optional syntax.
    pub const ANSI: Self = Self {
        name: "ansi",
        open_quote: '"',
        close_quote: '"',
        if_exists_after_alter_table: false,
        if_exists_before_constraint_name: false,
        if_exists_after_constraint_name: false,
        if_exists_before_token: "if exists ",
        if_exists_after_token: " if exists",
        drop_constraint_keyword: " drop constraint ",
        unique_strategy: UniqueStrategy::AlterTable,
    };

    /// PostgreSQL
    pub const POSTGRESQL: Self = Self {
        name: "postgresql",
        if_exists_after_alter_table: true,
        if_exists_before_constraint_name: true,
        ..Self::ANSI
    };

    /// MySQL. Unique constraints are indexes and are dropped as such.
    pub const MYSQL: Self = Self {
        name: "mysql",
        open_quote: '`',
        close_quote: '`',
        drop_constraint_keyword: " drop index ",
        ..Self::ANSI
    };

    /// SQLite cannot add constraints with `alter table`.
    pub const SQLITE: Self = Self {
        name: "sqlite",
        unique_strategy: UniqueStrategy::CreateTable,
        ..Self::ANSI
    };

    /// H2
    pub const H2: Self = Self {
        name: "h2",
        if_exists_after_alter_table: true,
        if_exists_before_constraint_name: true,
        ..Self::ANSI
    };

    /// Microsoft SQL Server
    pub const SQL_SERVER: Self = Self {
        name: "sqlserver",
        open_quote: '[',
        close_quote: ']',
        if_exists_before_constraint_name: true,
        ..Self::ANSI
    };

    /// Applies the dialect's quote characters to a name written in mapping
    /// syntax. Names wrapped in backticks are quoted; anything else is
    /// returned unchanged.
    pub fn quote(&self, name: &str) -> String {
        self.quote_identifier(&Identifier::new(name))
    }

    pub fn quote_identifier(&self, identifier: &Identifier) -> String {
        if identifier.is_quoted() {
            format!("{}{}{}", self.open_quote, identifier.text(), self.close_quote)
        } else {
            identifier.text().to_string()
        }
    }

    /// The prefix of every `alter table` command, without a trailing space.
    pub fn alter_table_string(&self, table_name: &str) -> String {
        if self.if_exists_after_alter_table {
            format!("alter table if exists {table_name}")
        } else {
            format!("alter table {table_name}")
        }
    }

    pub fn supports_if_exists_before_constraint_name(&self) -> bool {
        self.if_exists_before_constraint_name
    }

    pub fn supports_if_exists_after_constraint_name(&self) -> bool {
        self.if_exists_after_constraint_name
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::ANSI
    }
}
