use crate::dependency_policy::domain::{AnalyzedProject, MatchedDependency};

/// Marker in front of each project header line
pub const PROJECT_MARKER: &str = "»";

/// MatchReporter service for turning match results into report lines
///
/// The dependencies of each target framework are re-sorted by name here,
/// independently of the direct-first order the matcher produced.
pub struct MatchReporter;

impl MatchReporter {
    /// Renders the report, one entry per output line
    ///
    /// For every project: a `» Name` header, then per target framework a
    /// `[tfm]` header followed by one description line per dependency, and a
    /// blank line after the project's last framework.
    pub fn report(projects: &[AnalyzedProject]) -> Vec<String> {
        let mut lines = Vec::new();

        for project in projects {
            lines.push(format!("{} {}", PROJECT_MARKER, project.name()));

            for target_framework in project.target_frameworks() {
                lines.push(format!("[{}]", target_framework.name()));
                lines.extend(
                    Self::presentation_order(target_framework.dependencies())
                        .into_iter()
                        .map(|dep| dep.description().to_string()),
                );
            }

            lines.push(String::new());
        }

        lines
    }

    /// Dependencies sorted by display name only (stable, ordinal)
    pub fn presentation_order(dependencies: &[MatchedDependency]) -> Vec<&MatchedDependency> {
        let mut ordered: Vec<&MatchedDependency> = dependencies.iter().collect();
        ordered.sort_by(|a, b| a.name().cmp(b.name()));
        ordered
    }
}
