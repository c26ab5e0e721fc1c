use super::assets_file::parse_assets_file;
use super::dotnet_runner::DotNetRunner;
use super::restore_graph::{parse_restore_graph, RestoreProject};
use crate::dependency_policy::domain::Project;
use crate::ports::outbound::{DependencyGraphResolver, ProgressCallback, ResolveOptions};
use crate::shared::error::DepguardError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Maximum number of assets files parsed at once
const MAX_CONCURRENT_READS: usize = 4;

const RESTORE_GRAPH_FILENAME: &str = "graph.dg";

/// DotNetGraphResolver adapter resolving dependency graphs with the .NET SDK
///
/// The solution or project is restored once, its restore graph lists the
/// PackageReference projects, and each project's `project.assets.json` is
/// then read on the blocking pool. Projects come back in restore graph
/// order whatever order their reads finish in.
pub struct DotNetGraphResolver {
    runner: DotNetRunner,
}

impl DotNetGraphResolver {
    pub fn new() -> Self {
        Self::with_runner(DotNetRunner::new())
    }

    pub fn with_runner(runner: DotNetRunner) -> Self {
        Self { runner }
    }

    async fn list_projects(&self, project_path: &Path) -> Result<Vec<RestoreProject>> {
        let work_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let graph_path = work_dir.path().join(RESTORE_GRAPH_FILENAME);

        self.runner
            .generate_restore_graph(project_path, &graph_path)
            .await?;

        let content = read_regular_file(&graph_path, "restore graph")?;
        parse_restore_graph(&content).map_err(|e| {
            DepguardError::ResolutionFailed {
                path: project_path.to_path_buf(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }
}

impl Default for DotNetGraphResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads one project's assets file
fn load_project(project: &RestoreProject, transitive_depth: usize) -> Result<Project> {
    let assets_path = project.assets_path();
    if !assets_path.exists() {
        return Err(DepguardError::AssetsFileNotFound { path: assets_path }.into());
    }

    let content = read_regular_file(&assets_path, "assets file")?;
    parse_assets_file(&content, transitive_depth)
        .with_context(|| format!("Failed to read dependencies of {}", project.name))
}

#[async_trait]
impl DependencyGraphResolver for DotNetGraphResolver {
    async fn resolve(
        &self,
        project_path: &Path,
        options: ResolveOptions,
        on_progress: &ProgressCallback,
    ) -> Result<Vec<Project>> {
        if options.restore {
            self.runner.restore(project_path).await?;
        }

        let projects = self.list_projects(project_path).await?;
        let total = projects.len();
        let completed = AtomicUsize::new(0);
        let completed = &completed;

        stream::iter(projects)
            .map(|project| async move {
                let depth = options.transitive_depth;
                let loaded = tokio::task::spawn_blocking(move || load_project(&project, depth))
                    .await
                    .context("Assets file reader task failed")??;
                on_progress(completed.fetch_add(1, Ordering::SeqCst) + 1, total);
                Ok::<_, anyhow::Error>(loaded)
            })
            .buffered(MAX_CONCURRENT_READS)
            .try_collect()
            .await
    }
}
