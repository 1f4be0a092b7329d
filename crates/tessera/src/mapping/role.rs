use std::fmt;

/// Identifies a part of the mapping model, e.g. `Animal.{discriminator}`.
///
/// Unlike a [`NavigablePath`](crate::sql_ast::NavigablePath), a role names
/// the mapping itself rather than one use of it in a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigableRole {
    full_path: String,
}

impl NavigableRole {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            full_path: root.into(),
        }
    }

    pub fn append(&self, name: &str) -> Self {
        Self {
            full_path: format!("{}.{}", self.full_path, name),
        }
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }
}

impl fmt::Display for NavigableRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path)
    }
}
