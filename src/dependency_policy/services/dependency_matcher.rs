use crate::dependency_policy::domain::{
    AnalyzedProject, AnalyzedTargetFramework, Denylist, Dependency, MatchedDependency, Project,
    TargetFramework,
};

/// DependencyMatcher service for checking a resolved graph against the denylist
///
/// Pure and total: no I/O, no failure modes. Output keeps the input project
/// order and the input target framework order; only frameworks and projects
/// with at least one match are kept.
pub struct DependencyMatcher;

impl DependencyMatcher {
    /// Matches every project against the denylist
    ///
    /// # Arguments
    /// * `projects` - Resolved projects, in resolver order
    /// * `denylist` - Forbidden package identifiers
    ///
    /// # Returns
    /// One AnalyzedProject per project that contains a match
    pub fn match_projects(projects: &[Project], denylist: &Denylist) -> Vec<AnalyzedProject> {
        projects
            .iter()
            .filter_map(|project| Self::match_project(project, denylist))
            .collect()
    }

    fn match_project(project: &Project, denylist: &Denylist) -> Option<AnalyzedProject> {
        let target_frameworks = project
            .target_frameworks()
            .iter()
            .filter_map(|tf| Self::match_target_framework(tf, denylist))
            .collect();

        AnalyzedProject::new(project.name(), project.file_path(), target_frameworks)
    }

    fn match_target_framework(
        target_framework: &TargetFramework,
        denylist: &Denylist,
    ) -> Option<AnalyzedTargetFramework> {
        let matches = Self::eligible_in_scan_order(target_framework.dependencies())
            .into_iter()
            .filter(|dep| denylist.contains(dep.name()))
            .map(MatchedDependency::from)
            .collect();

        AnalyzedTargetFramework::new(target_framework.name(), matches)
    }

    /// Drops auto-referenced dependencies and orders the rest direct-first,
    /// then by name (ordinal, original casing). The sort is stable.
    fn eligible_in_scan_order(dependencies: &[Dependency]) -> Vec<&Dependency> {
        let mut eligible: Vec<&Dependency> = dependencies
            .iter()
            .filter(|dep| !dep.is_auto_referenced())
            .collect();

        eligible.sort_by(|a, b| {
            a.is_transitive()
                .cmp(&b.is_transitive())
                .then_with(|| a.name().cmp(b.name()))
        });

        eligible
    }
}
