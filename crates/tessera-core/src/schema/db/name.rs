use std::fmt;

/// A database identifier, remembering whether it was explicitly quoted.
///
/// Names written between backticks in the mapping (`` `order` ``) are
/// quoted; the backticks are stripped and the dialect's own quote characters
/// are applied when the identifier is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    text: String,
    quoted: bool,
}

/// Catalog, schema and table name of a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedTableName {
    pub catalog: Option<Identifier>,
    pub schema: Option<Identifier>,
    pub table: Identifier,
}

impl Identifier {
    /// Parses a mapping name, treating a backtick-wrapped name as quoted.
    pub fn new(name: &str) -> Self {
        match name
            .strip_prefix('`')
            .and_then(|rest| rest.strip_suffix('`'))
        {
            Some(text) => Self::quoted(text),
            None => Self {
                text: name.to_string(),
                quoted: false,
            },
        }
    }

    pub fn quoted(text: &str) -> Self {
        Self {
            text: text.to_string(),
            quoted: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// The identifier in mapping syntax, backticks included when quoted.
    pub fn render(&self) -> String {
        if self.quoted {
            format!("`{}`", self.text)
        } else {
            self.text.clone()
        }
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::new(value)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.render())
    }
}

impl QualifiedTableName {
    pub fn new(table: impl Into<Identifier>) -> Self {
        Self {
            catalog: None,
            schema: None,
            table: table.into(),
        }
    }

    pub fn with_schema(mut self, schema: impl Into<Identifier>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_catalog(mut self, catalog: impl Into<Identifier>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    /// The present name parts, outermost first.
    pub fn parts(&self) -> impl Iterator<Item = &Identifier> + '_ {
        self.catalog
            .iter()
            .chain(self.schema.iter())
            .chain(std::iter::once(&self.table))
    }
}

impl fmt::Display for QualifiedTableName {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for part in self.parts() {
            write!(fmt, "{s}{part}")?;
            s = ".";
        }
        Ok(())
    }
}
