use crate::ports::outbound::ResolveOptions;
use std::path::PathBuf;

/// ScanRequest - Internal request DTO for the dependency scan use case
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Solution, project file or directory to analyze
    pub project_path: PathBuf,
    /// Location of the policy file
    pub config_path: PathBuf,
    /// Restore and transitive depth settings passed to the resolver
    pub resolve_options: ResolveOptions,
}

impl ScanRequest {
    pub fn new(project_path: PathBuf, config_path: PathBuf, resolve_options: ResolveOptions) -> Self {
        Self {
            project_path,
            config_path,
            resolve_options,
        }
    }
}
