use super::*;
use crate::config::PolicyConfig;
use crate::dependency_policy::domain::{Dependency, TargetFramework};
use crate::ports::outbound::{ProgressCallback, ResolveOptions};
use crate::shared::error::{DepguardError, ExitCode};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// Mock implementations for testing
struct MockConfigReader {
    packages: Option<Vec<String>>,
}

impl MockConfigReader {
    fn with_packages(packages: &[&str]) -> Self {
        Self {
            packages: Some(packages.iter().map(|p| p.to_string()).collect()),
        }
    }

    fn missing() -> Self {
        Self { packages: None }
    }
}

impl PolicyConfigReader for MockConfigReader {
    fn read_policy(&self, config_path: &Path) -> Result<PolicyConfig> {
        match &self.packages {
            Some(packages) => Ok(PolicyConfig {
                packages: packages.clone(),
                ..PolicyConfig::default()
            }),
            None => Err(DepguardError::ConfigurationMissing {
                path: config_path.to_path_buf(),
            }
            .into()),
        }
    }
}

struct MockProjectLocator;

impl ProjectLocator for MockProjectLocator {
    fn discover(&self, path: &Path) -> Result<PathBuf> {
        Ok(path.join("App.sln"))
    }
}

#[derive(Clone)]
struct MockGraphResolver {
    projects: Vec<Project>,
    calls: Arc<AtomicUsize>,
}

impl MockGraphResolver {
    fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl DependencyGraphResolver for MockGraphResolver {
    async fn resolve(
        &self,
        _project_path: &Path,
        _options: ResolveOptions,
        on_progress: &ProgressCallback,
    ) -> Result<Vec<Project>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        on_progress(self.projects.len(), self.projects.len());
        Ok(self.projects.clone())
    }
}

#[derive(Default, Clone)]
struct MockProgressReporter {
    completions: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<String>>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.completions.lock().unwrap().push(message.to_string());
    }
}

fn request() -> ScanRequest {
    ScanRequest::new(
        PathBuf::from("/work"),
        PathBuf::from("/work/.depguard.json"),
        ResolveOptions::default(),
    )
}

fn sample_projects() -> Vec<Project> {
    vec![
        Project::new(
            "Web",
            "/work/Web/Web.csproj",
            vec![TargetFramework::new(
                "net8.0",
                vec![
                    Dependency::direct("Serilog", "3.1.1"),
                    Dependency::transitive("newtonsoft.json", "13.0.1"),
                ],
            )],
        ),
        Project::new(
            "Core",
            "/work/Core/Core.csproj",
            vec![TargetFramework::new(
                "netstandard2.0",
                vec![Dependency::direct("Newtonsoft.Json", "12.0.3")],
            )],
        ),
    ]
}

#[tokio::test]
async fn test_execute_empty_denylist_short_circuits() {
    let resolver = MockGraphResolver::new(sample_projects());
    let calls = resolver.calls.clone();
    let reporter = MockProgressReporter::default();
    let use_case = ScanDependenciesUseCase::new(
        MockConfigReader::with_packages(&[]),
        MockProjectLocator,
        resolver,
        reporter.clone(),
    );

    let response = use_case.execute(request()).await.unwrap();

    assert_eq!(response.outcome, ScanOutcome::NothingToDo);
    assert_eq!(response.exit_code(), ExitCode::Success);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        *reporter.completions.lock().unwrap(),
        vec![NOTHING_TO_DO_MESSAGE.to_string()]
    );
}

#[tokio::test]
async fn test_execute_no_matches() {
    let reporter = MockProgressReporter::default();
    let use_case = ScanDependenciesUseCase::new(
        MockConfigReader::with_packages(&["log4net"]),
        MockProjectLocator,
        MockGraphResolver::new(sample_projects()),
        reporter.clone(),
    );

    let response = use_case.execute(request()).await.unwrap();

    assert_eq!(response.outcome, ScanOutcome::NoMatches);
    assert_eq!(response.projects_scanned, 2);
    assert_eq!(response.exit_code(), ExitCode::Success);
    assert!(response.analyzed_projects().is_empty());
    assert_eq!(
        *reporter.completions.lock().unwrap(),
        vec![NO_MATCHES_MESSAGE.to_string()]
    );
}

#[tokio::test]
async fn test_execute_matches_found() {
    let reporter = MockProgressReporter::default();
    let use_case = ScanDependenciesUseCase::new(
        MockConfigReader::with_packages(&["Newtonsoft.Json"]),
        MockProjectLocator,
        MockGraphResolver::new(sample_projects()),
        reporter.clone(),
    );

    let response = use_case.execute(request()).await.unwrap();

    assert_eq!(response.exit_code(), ExitCode::MatchesFound);
    let projects = response.analyzed_projects();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name(), "Web");
    assert_eq!(projects[1].name(), "Core");

    let web_deps = projects[0].target_frameworks()[0].dependencies();
    assert_eq!(web_deps.len(), 1);
    assert_eq!(web_deps[0].name(), "newtonsoft.json");
    assert!(web_deps[0].is_transitive());

    let completions = reporter.completions.lock().unwrap();
    assert_eq!(completions.len(), 1);
    assert!(completions[0].contains("2 denylisted dependency reference(s) in 2 project(s)"));
}

#[tokio::test]
async fn test_execute_missing_configuration() {
    let resolver = MockGraphResolver::new(sample_projects());
    let calls = resolver.calls.clone();
    let use_case = ScanDependenciesUseCase::new(
        MockConfigReader::missing(),
        MockProjectLocator,
        resolver,
        MockProgressReporter::default(),
    );

    let err = use_case.execute(request()).await.unwrap_err();

    assert_eq!(ExitCode::for_error(&err), ExitCode::ConfigurationMissing);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_execute_forwards_config_warnings() {
    let reporter = MockProgressReporter::default();
    let use_case = ScanDependenciesUseCase::new(
        MockConfigReader::with_packages(&["Log4Net", "log4net"]),
        MockProjectLocator,
        MockGraphResolver::new(vec![]),
        reporter.clone(),
    );

    let response = use_case.execute(request()).await.unwrap();

    assert_eq!(response.outcome, ScanOutcome::NoMatches);
    let errors = reporter.errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("duplicates"));
}
