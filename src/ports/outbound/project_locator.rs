use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ProjectLocator port for finding the solution or project file to analyze
pub trait ProjectLocator {
    /// Resolves a user-supplied path to a single solution or project file
    ///
    /// # Arguments
    /// * `path` - A solution file, a project file, or a directory containing one
    ///
    /// # Returns
    /// The path of the solution or project file to analyze
    ///
    /// # Errors
    /// Returns an error if nothing suitable is found, or if a directory holds
    /// more than one candidate of the same kind
    fn discover(&self, path: &Path) -> Result<PathBuf>;
}
