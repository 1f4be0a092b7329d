use std::fmt;

/// Location of a node in the query's domain graph, e.g. `Zoo.animals.owner`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigablePath {
    full_path: String,
}

impl NavigablePath {
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

    pub fn parent(&self) -> Option<Self> {
        let (parent, _) = self.full_path.rsplit_once('.')?;
        Some(Self::new(parent))
    }

    pub fn local_name(&self) -> &str {
        match self.full_path.rsplit_once('.') {
            Some((_, local)) => local,
            None => &self.full_path,
        }
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }
}

impl fmt::Display for NavigablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_parent() {
        let root = NavigablePath::new("Zoo");
        let path = root.append("animals").append("owner");

        assert_eq!(path.full_path(), "Zoo.animals.owner");
        assert_eq!(path.local_name(), "owner");
        assert_eq!(path.parent(), Some(root.append("animals")));
        assert_eq!(root.parent(), None);
        assert_eq!(root.local_name(), "Zoo");
    }
}
