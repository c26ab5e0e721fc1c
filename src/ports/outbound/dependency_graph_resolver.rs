use crate::dependency_policy::domain::Project;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// Default number of transitive levels collected below direct references
pub const DEFAULT_TRANSITIVE_DEPTH: usize = 1;

/// Options controlling dependency graph resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Run a package restore before reading the resolved graph
    pub restore: bool,
    /// Number of transitive levels to collect (0 keeps direct references only)
    pub transitive_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            restore: true,
            transitive_depth: DEFAULT_TRANSITIVE_DEPTH,
        }
    }
}

/// Callback receiving `(completed, total)` project counts during resolution
pub type ProgressCallback = dyn Fn(usize, usize) + Send + Sync;

/// DependencyGraphResolver port for producing the resolved dependency graph
///
/// Resolution usually shells out to a build tool and can take a while,
/// hence the async interface.
#[async_trait]
pub trait DependencyGraphResolver {
    /// Resolves every project reachable from a solution or project file
    ///
    /// # Arguments
    /// * `project_path` - The discovered solution or project file
    /// * `options` - Restore and transitive depth settings
    /// * `on_progress` - Invoked each time a project has been resolved
    ///
    /// # Returns
    /// The projects in resolver order, each with its target frameworks
    ///
    /// # Errors
    /// Returns an error if the build tool fails or its output cannot be read
    async fn resolve(
        &self,
        project_path: &Path,
        options: ResolveOptions,
        on_progress: &ProgressCallback,
    ) -> Result<Vec<Project>>;
}
