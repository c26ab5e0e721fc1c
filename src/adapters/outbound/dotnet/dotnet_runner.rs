use crate::shared::error::DepguardError;
use crate::shared::Result;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Lines of tool output kept in an error message
const OUTPUT_TAIL_LINES: usize = 20;

/// Thin wrapper over the `dotnet` CLI
#[derive(Debug, Clone)]
pub struct DotNetRunner {
    executable: PathBuf,
}

impl DotNetRunner {
    pub fn new() -> Self {
        Self::with_executable("dotnet")
    }

    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Writes the restore graph (dgspec) of a solution or project to `output_path`
    pub async fn generate_restore_graph(&self, project_path: &Path, output_path: &Path) -> Result<()> {
        let mut property = OsString::from("/p:RestoreGraphOutputPath=");
        property.push(output_path.as_os_str());

        self.run(
            project_path,
            &[
                OsStr::new("msbuild"),
                project_path.as_os_str(),
                OsStr::new("/t:GenerateRestoreGraphFile"),
                property.as_os_str(),
                OsStr::new("-nologo"),
                OsStr::new("-verbosity:quiet"),
            ],
        )
        .await
    }

    /// Restores the packages of a solution or project
    pub async fn restore(&self, project_path: &Path) -> Result<()> {
        self.run(
            project_path,
            &[
                OsStr::new("restore"),
                project_path.as_os_str(),
                OsStr::new("-nologo"),
                OsStr::new("-verbosity:quiet"),
            ],
        )
        .await
    }

    async fn run(&self, project_path: &Path, args: &[&OsStr]) -> Result<()> {
        let output = Command::new(&self.executable)
            .args(args)
            .env("DOTNET_NOLOGO", "1")
            .env("DOTNET_CLI_TELEMETRY_OPTOUT", "1")
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| DepguardError::ResolutionFailed {
                path: project_path.to_path_buf(),
                details: format!("Failed to start {}: {}", self.executable.display(), e),
            })?;

        if output.status.success() {
            return Ok(());
        }

        // MSBuild reports errors on stdout
        let mut details = format!(
            "`{} {}` exited with {}",
            self.executable.display(),
            args.first().map(|a| a.to_string_lossy()).unwrap_or_default(),
            output.status
        );
        for stream in [&output.stdout, &output.stderr] {
            let tail = tail_lines(&String::from_utf8_lossy(stream), OUTPUT_TAIL_LINES);
            if !tail.is_empty() {
                details.push('\n');
                details.push_str(&tail);
            }
        }

        Err(DepguardError::ResolutionFailed {
            path: project_path.to_path_buf(),
            details,
        }
        .into())
    }
}

impl Default for DotNetRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn tail_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n")
}
