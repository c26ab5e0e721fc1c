use crate::ports::outbound::ProjectLocator;
use crate::shared::error::DepguardError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Solution file extensions, checked before project files
const SOLUTION_EXTENSIONS: &[&str] = &["sln", "slnx"];

/// Project file extensions
const PROJECT_EXTENSIONS: &[&str] = &["csproj", "fsproj", "vbproj"];

/// FileSystemProjectLocator adapter for finding the solution or project to analyze
///
/// A file path is accepted as-is when it has a known extension. A directory
/// must hold exactly one solution, or failing that exactly one project file.
pub struct FileSystemProjectLocator;

impl FileSystemProjectLocator {
    pub fn new() -> Self {
        Self
    }

    fn has_extension(path: &Path, extensions: &[&str]) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
            .unwrap_or(false)
    }

    /// Files directly inside `dir` with one of the given extensions, sorted
    fn files_with_extensions(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| DepguardError::ProjectNotFound {
            path: dir.to_path_buf(),
            reason: format!("Failed to read directory: {}", e),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && Self::has_extension(&path, extensions) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn single_candidate(dir: &Path, kind: &str, candidates: Vec<PathBuf>) -> Result<Option<PathBuf>> {
        match candidates.len() {
            0 => Ok(None),
            1 => Ok(candidates.into_iter().next()),
            _ => {
                let names = candidates
                    .iter()
                    .filter_map(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(DepguardError::MultipleProjectsFound {
                    path: dir.to_path_buf(),
                    kind: kind.to_string(),
                    candidates: names,
                }
                .into())
            }
        }
    }

    fn discover_in_directory(&self, dir: &Path) -> Result<PathBuf> {
        let solutions = Self::files_with_extensions(dir, SOLUTION_EXTENSIONS)?;
        if let Some(solution) = Self::single_candidate(dir, "solution", solutions)? {
            return Ok(solution);
        }

        let projects = Self::files_with_extensions(dir, PROJECT_EXTENSIONS)?;
        if let Some(project) = Self::single_candidate(dir, "project", projects)? {
            return Ok(project);
        }

        Err(DepguardError::ProjectNotFound {
            path: dir.to_path_buf(),
            reason: "Directory contains no solution or project file".to_string(),
        }
        .into())
    }
}

impl Default for FileSystemProjectLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectLocator for FileSystemProjectLocator {
    fn discover(&self, path: &Path) -> Result<PathBuf> {
        if !path.exists() {
            return Err(DepguardError::ProjectNotFound {
                path: path.to_path_buf(),
                reason: "Path does not exist".to_string(),
            }
            .into());
        }

        validate_not_symlink(path, "project discovery").map_err(|e| {
            DepguardError::InvalidProjectPath {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        if path.is_dir() {
            return self.discover_in_directory(path);
        }

        if Self::has_extension(path, SOLUTION_EXTENSIONS)
            || Self::has_extension(path, PROJECT_EXTENSIONS)
        {
            return Ok(path.to_path_buf());
        }

        Err(DepguardError::ProjectNotFound {
            path: path.to_path_buf(),
            reason: "File is not a solution or project file".to_string(),
        }
        .into())
    }
}
