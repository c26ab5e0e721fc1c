use crate::dependency_policy::domain::AnalyzedProject;
use crate::shared::error::ExitCode;

/// How a scan ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The denylist is empty; the project was never inspected
    NothingToDo,
    /// The graph was checked and nothing matched
    NoMatches,
    /// At least one denylisted dependency was found, grouped per project
    MatchesFound(Vec<AnalyzedProject>),
}

/// ScanResponse - Internal response DTO from the dependency scan use case
#[derive(Debug, Clone)]
pub struct ScanResponse {
    pub outcome: ScanOutcome,
    /// Number of projects resolved (0 when the scan short-circuited)
    pub projects_scanned: usize,
}

impl ScanResponse {
    pub fn new(outcome: ScanOutcome, projects_scanned: usize) -> Self {
        Self {
            outcome,
            projects_scanned,
        }
    }

    pub fn analyzed_projects(&self) -> &[AnalyzedProject] {
        match &self.outcome {
            ScanOutcome::MatchesFound(projects) => projects.as_slice(),
            _ => &[],
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self.outcome {
            ScanOutcome::MatchesFound(_) => ExitCode::MatchesFound,
            ScanOutcome::NothingToDo | ScanOutcome::NoMatches => ExitCode::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_policy::domain::{AnalyzedTargetFramework, MatchedDependency};

    #[test]
    fn test_exit_code_per_outcome() {
        assert_eq!(
            ScanResponse::new(ScanOutcome::NothingToDo, 0).exit_code(),
            ExitCode::Success
        );
        assert_eq!(
            ScanResponse::new(ScanOutcome::NoMatches, 3).exit_code(),
            ExitCode::Success
        );

        let tf = AnalyzedTargetFramework::new(
            "net8.0",
            vec![MatchedDependency::new("Bad", "1.0.0", false)],
        )
        .unwrap();
        let project = AnalyzedProject::new("App", "App.csproj", vec![tf]).unwrap();
        let response = ScanResponse::new(ScanOutcome::MatchesFound(vec![project]), 1);
        assert_eq!(response.exit_code(), ExitCode::MatchesFound);
        assert_eq!(response.analyzed_projects().len(), 1);
    }

    #[test]
    fn test_analyzed_projects_empty_without_matches() {
        let response = ScanResponse::new(ScanOutcome::NoMatches, 2);
        assert!(response.analyzed_projects().is_empty());
    }
}
