use crate::config::PolicyConfig;
use crate::shared::Result;
use std::path::Path;

/// PolicyConfigReader port for loading the denylist configuration
///
/// This port abstracts where and how the policy document is stored.
pub trait PolicyConfigReader {
    /// Reads and decodes the policy configuration
    ///
    /// # Arguments
    /// * `config_path` - Location of the policy file (normally `.depguard.json`)
    ///
    /// # Returns
    /// The decoded and validated configuration
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist (`DepguardError::ConfigurationMissing`)
    /// - The file cannot be parsed or fails validation (`DepguardError::ConfigurationMalformed`)
    /// - The file cannot be read due to permissions or I/O errors
    fn read_policy(&self, config_path: &Path) -> Result<PolicyConfig>;
}
