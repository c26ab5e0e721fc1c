use async_trait::async_trait;
use nuget_depguard::ports::outbound::ProgressCallback;
use nuget_depguard::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DependencyGraphResolver returning a fixed set of projects
///
/// Records every call so tests can check what was (or was not) resolved.
#[derive(Clone)]
pub struct MockGraphResolver {
    projects: Vec<Project>,
    should_fail: bool,
    pub calls: Arc<Mutex<Vec<(PathBuf, ResolveOptions)>>>,
}

impl MockGraphResolver {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            should_fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DependencyGraphResolver for MockGraphResolver {
    async fn resolve(
        &self,
        project_path: &Path,
        options: ResolveOptions,
        on_progress: &ProgressCallback,
    ) -> Result<Vec<Project>> {
        self.calls
            .lock()
            .unwrap()
            .push((project_path.to_path_buf(), options));

        if self.should_fail {
            return Err(DepguardError::ResolutionFailed {
                path: project_path.to_path_buf(),
                details: "`dotnet restore` exited with exit status: 1".to_string(),
            }
            .into());
        }

        let total = self.projects.len();
        for done in 1..=total {
            on_progress(done, total);
        }
        Ok(self.projects.clone())
    }
}
