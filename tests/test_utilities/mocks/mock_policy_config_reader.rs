use nuget_depguard::prelude::*;
use std::path::Path;

/// Mock PolicyConfigReader serving an in-memory JSON document
pub struct MockPolicyConfigReader {
    content: Option<String>,
}

impl MockPolicyConfigReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
        }
    }

    /// Behaves as if the policy file did not exist
    pub fn missing() -> Self {
        Self { content: None }
    }
}

impl PolicyConfigReader for MockPolicyConfigReader {
    fn read_policy(&self, config_path: &Path) -> Result<PolicyConfig> {
        let content = self
            .content
            .as_deref()
            .ok_or_else(|| DepguardError::ConfigurationMissing {
                path: config_path.to_path_buf(),
            })?;

        PolicyConfig::parse(content).map_err(|details| {
            DepguardError::ConfigurationMalformed {
                path: config_path.to_path_buf(),
                details,
            }
            .into()
        })
    }
}
