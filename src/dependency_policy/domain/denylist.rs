use std::collections::HashMap;

/// Denylist value object: forbidden package identifiers keyed by their
/// case-folded form.
///
/// Built once per run from configuration and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Denylist {
    entries: HashMap<String, String>,
}

impl Denylist {
    /// Builds a denylist from configured package names.
    ///
    /// When two entries differ only by case, the first configured spelling is kept
    /// as the canonical one.
    pub fn new<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries = HashMap::new();
        for package in packages {
            let package = package.into();
            entries.entry(Self::fold(&package)).or_insert(package);
        }
        Self { entries }
    }

    /// Case folding applied to both configured names and dependency names
    pub fn fold(name: &str) -> String {
        name.to_lowercase()
    }

    pub fn contains(&self, package_name: &str) -> bool {
        self.entries.contains_key(&Self::fold(package_name))
    }

    /// Returns the configured spelling for a package name, if denylisted
    pub fn canonical_name(&self, package_name: &str) -> Option<&str> {
        self.entries
            .get(&Self::fold(package_name))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
