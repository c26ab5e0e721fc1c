/// Dependency entity: one package reference resolved for one target framework
///
/// The version is kept verbatim; it is never parsed or compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    name: String,
    resolved_version: String,
    is_transitive: bool,
    is_auto_referenced: bool,
}

impl Dependency {
    pub fn new(
        name: impl Into<String>,
        resolved_version: impl Into<String>,
        is_transitive: bool,
        is_auto_referenced: bool,
    ) -> Self {
        Self {
            name: name.into(),
            resolved_version: resolved_version.into(),
            is_transitive,
            is_auto_referenced,
        }
    }

    /// A package declared by the project itself
    pub fn direct(name: impl Into<String>, resolved_version: impl Into<String>) -> Self {
        Self::new(name, resolved_version, false, false)
    }

    /// A package pulled in through another package
    pub fn transitive(name: impl Into<String>, resolved_version: impl Into<String>) -> Self {
        Self::new(name, resolved_version, true, false)
    }

    /// A package implicitly added by the SDK
    pub fn auto_referenced(name: impl Into<String>, resolved_version: impl Into<String>) -> Self {
        Self::new(name, resolved_version, false, true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resolved_version(&self) -> &str {
        &self.resolved_version
    }

    pub fn is_transitive(&self) -> bool {
        self.is_transitive
    }

    pub fn is_auto_referenced(&self) -> bool {
        self.is_auto_referenced
    }
}

/// TargetFramework entity: the dependency set resolved for one moniker (e.g. `net8.0`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFramework {
    name: String,
    dependencies: Vec<Dependency>,
}

impl TargetFramework {
    pub fn new(name: impl Into<String>, dependencies: Vec<Dependency>) -> Self {
        Self {
            name: name.into(),
            dependencies,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }
}

/// Project aggregate as produced by graph resolution
///
/// Target frameworks keep the order the resolver reported them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    file_path: String,
    target_frameworks: Vec<TargetFramework>,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        file_path: impl Into<String>,
        target_frameworks: Vec<TargetFramework>,
    ) -> Self {
        Self {
            name: name.into(),
            file_path: file_path.into(),
            target_frameworks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn target_frameworks(&self) -> &[TargetFramework] {
        &self.target_frameworks
    }

    pub fn dependency_count(&self) -> usize {
        self.target_frameworks
            .iter()
            .map(|tf| tf.dependencies().len())
            .sum()
    }
}
