use crate::config::PolicyConfig;
use crate::ports::outbound::PolicyConfigReader;
use crate::shared::error::DepguardError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading the policy file from disk
///
/// Implements the PolicyConfigReader port. Reads go through the shared
/// security checks (no symlinks, regular files only, size limit).
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyConfigReader for FileSystemReader {
    fn read_policy(&self, config_path: &Path) -> Result<PolicyConfig> {
        if !config_path.exists() {
            return Err(DepguardError::ConfigurationMissing {
                path: config_path.to_path_buf(),
            }
            .into());
        }

        let description = config_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "configuration file".to_string());

        let content = read_regular_file(config_path, &description).map_err(|e| {
            DepguardError::ConfigurationUnreadable {
                path: config_path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        PolicyConfig::parse(&content).map_err(|details| {
            DepguardError::ConfigurationMalformed {
                path: config_path.to_path_buf(),
                details,
            }
            .into()
        })
    }
}
