use crate::application::dto::{ScanOutcome, ScanRequest, ScanResponse};
use crate::dependency_policy::domain::{AnalyzedProject, Denylist, Project};
use crate::dependency_policy::services::DependencyMatcher;
use crate::ports::outbound::{
    DependencyGraphResolver, PolicyConfigReader, ProgressReporter, ProjectLocator,
};
use crate::shared::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

#[cfg(test)]
mod tests;

/// Status line when the policy lists no packages
pub const NOTHING_TO_DO_MESSAGE: &str = "No denylisted packages configured, nothing to do";

/// Status line when the graph holds no denylisted package
pub const NO_MATCHES_MESSAGE: &str = "No denylisted dependencies were detected";

/// ScanDependenciesUseCase - Core use case for checking a project against the denylist
///
/// Orchestrates configuration loading, project discovery, graph resolution
/// and matching, using generic dependency injection for all infrastructure.
///
/// # Type Parameters
/// * `CR` - PolicyConfigReader implementation
/// * `PL` - ProjectLocator implementation
/// * `GR` - DependencyGraphResolver implementation
/// * `PR` - ProgressReporter implementation
pub struct ScanDependenciesUseCase<CR, PL, GR, PR> {
    config_reader: CR,
    project_locator: PL,
    graph_resolver: GR,
    progress_reporter: PR,
}

impl<CR, PL, GR, PR> ScanDependenciesUseCase<CR, PL, GR, PR>
where
    CR: PolicyConfigReader,
    PL: ProjectLocator,
    GR: DependencyGraphResolver,
    PR: ProgressReporter,
{
    /// Creates a new ScanDependenciesUseCase with injected dependencies
    pub fn new(
        config_reader: CR,
        project_locator: PL,
        graph_resolver: GR,
        progress_reporter: PR,
    ) -> Self {
        Self {
            config_reader,
            project_locator,
            graph_resolver,
            progress_reporter,
        }
    }

    /// Executes the scan
    ///
    /// # Returns
    /// The scan outcome; finding denylisted packages is an outcome, not an error
    ///
    /// # Errors
    /// Returns an error if the policy is missing or malformed, or if the
    /// project cannot be discovered or resolved
    pub async fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        // Step 1: Load policy
        let denylist = self.load_denylist(&request.config_path)?;

        if denylist.is_empty() {
            self.progress_reporter
                .report_completion(NOTHING_TO_DO_MESSAGE);
            return Ok(ScanResponse::new(ScanOutcome::NothingToDo, 0));
        }

        // Step 2: Find the solution or project to analyze
        let project_file = self.project_locator.discover(&request.project_path)?;

        // Step 3: Resolve its dependency graph
        let projects = self.resolve_with_progress(&project_file, &request).await?;

        // Step 4: Match against the denylist
        let analyzed = DependencyMatcher::match_projects(&projects, &denylist);

        Ok(self.build_response(analyzed, projects.len()))
    }

    /// Reads the policy file and builds the denylist, forwarding config warnings
    fn load_denylist(&self, config_path: &Path) -> Result<Denylist> {
        self.progress_reporter.report(&format!(
            "📖 Loading policy from: {}",
            config_path.display()
        ));

        let config = self.config_reader.read_policy(config_path)?;
        for warning in config.warnings() {
            self.progress_reporter.report_error(&warning);
        }

        let denylist = config.denylist();
        if !denylist.is_empty() {
            self.progress_reporter
                .report(&format!("🔒 {} package(s) denylisted", denylist.len()));
        }

        Ok(denylist)
    }

    /// Resolves the dependency graph while showing a spinner on stderr
    async fn resolve_with_progress(
        &self,
        project_file: &Path,
        request: &ScanRequest,
    ) -> Result<Vec<Project>> {
        self.progress_reporter.report(&format!(
            "🔍 Resolving dependencies for: {}",
            project_file.display()
        ));

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("   {spinner:.green} {msg} {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Reading project assets...");
        pb.enable_steady_tick(Duration::from_millis(100));

        let pb_callback = pb.clone();
        let on_progress = move |done: usize, total: usize| {
            pb_callback.set_length(total as u64);
            pb_callback.set_position(done as u64);
        };

        let result = self
            .graph_resolver
            .resolve(project_file, request.resolve_options, &on_progress)
            .await;
        pb.finish_and_clear();

        let projects = result?;
        self.progress_reporter
            .report(&format!(
                "✅ Resolved {} project(s) ({} dependency reference(s))",
                projects.len(),
                projects.iter().map(Project::dependency_count).sum::<usize>()
            ));

        Ok(projects)
    }

    fn build_response(&self, analyzed: Vec<AnalyzedProject>, projects_scanned: usize) -> ScanResponse {
        if analyzed.is_empty() {
            self.progress_reporter.report_completion(NO_MATCHES_MESSAGE);
            return ScanResponse::new(ScanOutcome::NoMatches, projects_scanned);
        }

        let match_count: usize = analyzed.iter().map(AnalyzedProject::match_count).sum();
        self.progress_reporter.report_completion(&format!(
            "❌ Detected {} denylisted dependency reference(s) in {} project(s)",
            match_count,
            analyzed.len()
        ));

        ScanResponse::new(ScanOutcome::MatchesFound(analyzed), projects_scanned)
    }
}
