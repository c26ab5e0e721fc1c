use super::Dependency;

/// Read-only projection of a dependency that matched the denylist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedDependency {
    name: String,
    resolved_version: String,
    is_transitive: bool,
    description: String,
}

impl MatchedDependency {
    pub fn new(
        name: impl Into<String>,
        resolved_version: impl Into<String>,
        is_transitive: bool,
    ) -> Self {
        let name = name.into();
        let resolved_version = resolved_version.into();
        let description = Self::describe(&name, &resolved_version, is_transitive);
        Self {
            name,
            resolved_version,
            is_transitive,
            description,
        }
    }

    /// `> Name (1.2.3)` for direct references, indented and annotated for transitive ones
    fn describe(name: &str, version: &str, is_transitive: bool) -> String {
        if is_transitive {
            format!("  > {} ({}) (transitive)", name, version)
        } else {
            format!("> {} ({})", name, version)
        }
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

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl From<&Dependency> for MatchedDependency {
    fn from(dependency: &Dependency) -> Self {
        Self::new(
            dependency.name(),
            dependency.resolved_version(),
            dependency.is_transitive(),
        )
    }
}

/// A target framework holding at least one match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedTargetFramework {
    name: String,
    dependencies: Vec<MatchedDependency>,
}

impl AnalyzedTargetFramework {
    /// Returns `None` when there is nothing to report for this framework
    pub fn new(name: impl Into<String>, dependencies: Vec<MatchedDependency>) -> Option<Self> {
        if dependencies.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            dependencies,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dependencies(&self) -> &[MatchedDependency] {
        &self.dependencies
    }
}

/// A project holding at least one target framework with matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedProject {
    name: String,
    file_path: String,
    target_frameworks: Vec<AnalyzedTargetFramework>,
}

impl AnalyzedProject {
    /// Returns `None` when no target framework produced matches
    pub fn new(
        name: impl Into<String>,
        file_path: impl Into<String>,
        target_frameworks: Vec<AnalyzedTargetFramework>,
    ) -> Option<Self> {
        if target_frameworks.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            file_path: file_path.into(),
            target_frameworks,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn target_frameworks(&self) -> &[AnalyzedTargetFramework] {
        &self.target_frameworks
    }

    pub fn match_count(&self) -> usize {
        self.target_frameworks
            .iter()
            .map(|tf| tf.dependencies().len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_description() {
        let matched = MatchedDependency::new("Newtonsoft.Json", "13.0.3", false);
        assert_eq!(matched.description(), "> Newtonsoft.Json (13.0.3)");
    }

    #[test]
    fn test_transitive_description_is_distinguishable() {
        let matched = MatchedDependency::new("Newtonsoft.Json", "13.0.3", true);
        assert_eq!(
            matched.description(),
            "  > Newtonsoft.Json (13.0.3) (transitive)"
        );
        assert!(matched.description().contains("13.0.3"));
    }

    #[test]
    fn test_from_dependency_preserves_original_name() {
        let dependency = Dependency::transitive("foo.BAR", "1.0.0");
        let matched = MatchedDependency::from(&dependency);
        assert_eq!(matched.name(), "foo.BAR");
        assert_eq!(matched.resolved_version(), "1.0.0");
        assert!(matched.is_transitive());
    }

    #[test]
    fn test_empty_containers_are_never_built() {
        assert!(AnalyzedTargetFramework::new("net8.0", vec![]).is_none());
        assert!(AnalyzedProject::new("Api", "Api.csproj", vec![]).is_none());
    }

    #[test]
    fn test_analyzed_project_match_count() {
        let tf1 = AnalyzedTargetFramework::new(
            "net6.0",
            vec![
                MatchedDependency::new("A", "1.0.0", false),
                MatchedDependency::new("B", "1.0.0", true),
            ],
        )
        .unwrap();
        let tf2 =
            AnalyzedTargetFramework::new("net8.0", vec![MatchedDependency::new("A", "1.0.0", false)])
                .unwrap();
        let project = AnalyzedProject::new("Api", "Api.csproj", vec![tf1, tf2]).unwrap();
        assert_eq!(project.match_count(), 3);
        assert_eq!(project.file_path(), "Api.csproj");
    }
}
