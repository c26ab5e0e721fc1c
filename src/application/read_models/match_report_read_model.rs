//! Match report read model
//!
//! Aggregates everything a formatter needs: tool metadata, a summary, the
//! per-project views and the rendered report lines.

use serde::Serialize;

/// Main read model for a scan that found denylisted dependencies
#[derive(Debug, Clone, Serialize)]
pub struct MatchReportReadModel {
    pub tool: ToolView,
    /// RFC 3339 timestamp of the scan
    pub generated_at: String,
    pub summary: SummaryView,
    pub projects: Vec<ProjectView>,
    /// Report lines in output order, as rendered by the match reporter
    #[serde(skip)]
    pub report_lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolView {
    pub name: String,
    pub version: String,
}

/// Counts of everything reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub projects: usize,
    pub target_frameworks: usize,
    pub matches: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub name: String,
    pub file_path: String,
    pub target_frameworks: Vec<TargetFrameworkView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetFrameworkView {
    pub name: String,
    /// Dependencies in presentation (alphabetical) order
    pub dependencies: Vec<DependencyView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DependencyView {
    pub name: String,
    pub version: String,
    pub transitive: bool,
    pub description: String,
}
