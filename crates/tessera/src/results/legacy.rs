/// A fetch declared in the legacy native-query style: the attribute
/// `fetchable_name` of the entity aliased `owner_table_alias` is loaded from
/// the columns of the table aliased `table_alias`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DynamicFetchBuilderLegacy {
    table_alias: String,
    owner_table_alias: String,
    fetchable_name: String,
    column_names: Vec<String>,
}

/// Legacy fetch builders of a result set mapping, looked up by owner alias
/// and attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LegacyFetchResolver {
    fetch_builders: Vec<DynamicFetchBuilderLegacy>,
}

impl DynamicFetchBuilderLegacy {
    pub fn new(
        table_alias: impl Into<String>,
        owner_table_alias: impl Into<String>,
        fetchable_name: impl Into<String>,
    ) -> Self {
        Self {
            table_alias: table_alias.into(),
            owner_table_alias: owner_table_alias.into(),
            fetchable_name: fetchable_name.into(),
            column_names: vec![],
        }
    }

    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.column_names.push(name.into());
        self
    }

    pub fn table_alias(&self) -> &str {
        &self.table_alias
    }

    pub fn owner_table_alias(&self) -> &str {
        &self.owner_table_alias
    }

    pub fn fetchable_name(&self) -> &str {
        &self.fetchable_name
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }
}

impl LegacyFetchResolver {
    /// Adds a fetch builder, replacing one already registered for the same
    /// owner alias and attribute.
    pub fn register(&mut self, fetch_builder: DynamicFetchBuilderLegacy) {
        match self.fetch_builders.iter_mut().find(|existing| {
            existing.owner_table_alias == fetch_builder.owner_table_alias
                && existing.fetchable_name == fetch_builder.fetchable_name
        }) {
            Some(existing) => *existing = fetch_builder,
            None => self.fetch_builders.push(fetch_builder),
        }
    }

    pub fn resolve(
        &self,
        owner_table_alias: &str,
        fetchable_name: &str,
    ) -> Option<&DynamicFetchBuilderLegacy> {
        self.fetch_builders.iter().find(|fetch_builder| {
            fetch_builder.owner_table_alias == owner_table_alias
                && fetch_builder.fetchable_name == fetchable_name
        })
    }

    pub fn len(&self) -> usize {
        self.fetch_builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fetch_builders.is_empty()
    }
}
