use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to gate on denylisted packages while still
/// distinguishing a broken setup from a policy violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Nothing configured, or no denylisted dependency detected
    Success = 0,
    /// At least one denylisted dependency was detected and reported
    MatchesFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed config, discovery or restore failure, I/O error, etc.)
    ApplicationError = 3,
    /// The policy configuration file is missing or unreadable; nothing else ran
    ConfigurationMissing = -1,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error that escaped the use case
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<DepguardError>() {
            Some(DepguardError::ConfigurationMissing { .. })
            | Some(DepguardError::ConfigurationUnreadable { .. }) => ExitCode::ConfigurationMissing,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::MatchesFound => write!(f, "Matches Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::ConfigurationMissing => write!(f, "Configuration Missing (-1)"),
        }
    }
}

/// Application-specific errors raised at the boundaries of a scan.
///
/// The matching engine itself never fails; everything here comes from
/// configuration loading, project discovery, graph resolution or output.
#[derive(Debug, Error)]
pub enum DepguardError {
    #[error("Configuration file {path} does not exist\n\n💡 Hint: Create a .depguard.json file with a \"packages\" array, or pass --config")]
    ConfigurationMissing { path: PathBuf },

    #[error("Configuration file {path} cannot be read\nDetails: {details}\n\n💡 Hint: The policy must be a regular, readable file (not a directory or symbolic link)")]
    ConfigurationUnreadable { path: PathBuf, details: String },

    #[error("Failed to parse configuration file: {path}\nDetails: {details}\n\n💡 Hint: The file must be a JSON object such as {{\"packages\": [\"Some.Package\"]}}")]
    ConfigurationMalformed { path: PathBuf, details: String },

    #[error("No project found: {path}\nReason: {reason}\n\n💡 Hint: Pass a .sln, .csproj, .fsproj or .vbproj file, or a directory containing exactly one")]
    ProjectNotFound { path: PathBuf, reason: String },

    #[error("Multiple {kind} files found in {path}: {candidates}\n\n💡 Hint: Pass the file to analyze explicitly")]
    MultipleProjectsFound {
        path: PathBuf,
        kind: String,
        candidates: String,
    },

    #[error("Failed to resolve dependencies for {path}\nDetails: {details}\n\n💡 Hint: Verify that the .NET SDK is installed and that `dotnet restore` succeeds for this project")]
    ResolutionFailed { path: PathBuf, details: String },

    #[error("Assets file not found: {path}\n\n💡 Hint: Run `dotnet restore` first, or drop --no-restore")]
    AssetsFileNotFound { path: PathBuf },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid solution, project or directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
