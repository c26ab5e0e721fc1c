//! Builder for constructing MatchReportReadModel from domain objects

use super::match_report_read_model::{
    DependencyView, MatchReportReadModel, ProjectView, SummaryView, TargetFrameworkView, ToolView,
};
use crate::dependency_policy::domain::{AnalyzedProject, AnalyzedTargetFramework};
use crate::dependency_policy::services::MatchReporter;
use chrono::{DateTime, SecondsFormat, Utc};

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builder for constructing MatchReportReadModel from analyzed projects
pub struct MatchReportReadModelBuilder;

impl MatchReportReadModelBuilder {
    /// Builds the read model stamped with the current time
    pub fn build(projects: &[AnalyzedProject]) -> MatchReportReadModel {
        Self::build_at(projects, Utc::now())
    }

    /// Builds the read model with an explicit timestamp
    ///
    /// # Arguments
    /// * `projects` - Matcher output, in project input order
    /// * `generated_at` - Time the scan ran
    pub fn build_at(projects: &[AnalyzedProject], generated_at: DateTime<Utc>) -> MatchReportReadModel {
        let project_views: Vec<ProjectView> = projects.iter().map(Self::build_project).collect();

        MatchReportReadModel {
            tool: ToolView {
                name: TOOL_NAME.to_string(),
                version: TOOL_VERSION.to_string(),
            },
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            summary: Self::build_summary(&project_views),
            projects: project_views,
            report_lines: MatchReporter::report(projects),
        }
    }

    fn build_project(project: &AnalyzedProject) -> ProjectView {
        ProjectView {
            name: project.name().to_string(),
            file_path: project.file_path().to_string(),
            target_frameworks: project
                .target_frameworks()
                .iter()
                .map(Self::build_target_framework)
                .collect(),
        }
    }

    fn build_target_framework(target_framework: &AnalyzedTargetFramework) -> TargetFrameworkView {
        TargetFrameworkView {
            name: target_framework.name().to_string(),
            dependencies: MatchReporter::presentation_order(target_framework.dependencies())
                .into_iter()
                .map(|dep| DependencyView {
                    name: dep.name().to_string(),
                    version: dep.resolved_version().to_string(),
                    transitive: dep.is_transitive(),
                    description: dep.description().to_string(),
                })
                .collect(),
        }
    }

    fn build_summary(projects: &[ProjectView]) -> SummaryView {
        let target_frameworks = projects.iter().map(|p| p.target_frameworks.len()).sum();
        let matches = projects
            .iter()
            .flat_map(|p| &p.target_frameworks)
            .map(|tf| tf.dependencies.len())
            .sum();

        SummaryView {
            projects: projects.len(),
            target_frameworks,
            matches,
        }
    }
}
