use nuget_depguard::prelude::*;
use std::path::{Path, PathBuf};

/// Mock ProjectLocator that always finds a solution named `App.sln`
pub struct MockProjectLocator {
    should_fail: bool,
}

impl MockProjectLocator {
    pub fn new() -> Self {
        Self { should_fail: false }
    }

    pub fn failing() -> Self {
        Self { should_fail: true }
    }
}

impl ProjectLocator for MockProjectLocator {
    fn discover(&self, path: &Path) -> Result<PathBuf> {
        if self.should_fail {
            return Err(DepguardError::ProjectNotFound {
                path: path.to_path_buf(),
                reason: "Directory contains no solution or project file".to_string(),
            }
            .into());
        }
        Ok(path.join("App.sln"))
    }
}
