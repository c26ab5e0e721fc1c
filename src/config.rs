//! Policy configuration for nuget-depguard.
//!
//! The policy lives in a JSON document (`.depguard.json` by default) with a
//! single recognized field, `packages`, listing the denylisted package ids.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};

use crate::dependency_policy::domain::Denylist;

/// Default policy file name, looked up in the current working directory
pub const CONFIG_FILENAME: &str = ".depguard.json";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct PolicyConfig {
    /// Denylisted package identifiers; a missing field means an empty policy
    #[serde(default)]
    pub packages: Vec<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl PolicyConfig {
    /// Decodes and validates a policy document
    ///
    /// Entries are trimmed. Returns a plain message on failure; the caller
    /// attaches the file path.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let mut config: PolicyConfig =
            serde_json::from_str(content).map_err(|e| e.to_string())?;

        for (i, package) in config.packages.iter_mut().enumerate() {
            let trimmed = package.trim();
            if trimmed.is_empty() {
                return Err(format!(
                    "packages[{}] must not be empty. Each entry must be a package id (e.g. \"Newtonsoft.Json\").",
                    i
                ));
            }
            if trimmed.len() != package.len() {
                *package = trimmed.to_string();
            }
        }

        Ok(config)
    }

    /// Warnings about fields that will be ignored or entries that collapse together
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings: Vec<String> = self
            .unknown_fields
            .keys()
            .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
            .collect();

        let denylist = self.denylist();
        let mut seen: HashSet<String> = HashSet::new();
        for package in &self.packages {
            if seen.insert(Denylist::fold(package)) {
                continue;
            }
            if let Some(canonical) = denylist.canonical_name(package) {
                warnings.push(format!(
                    "⚠️  Warning: Package '{}' duplicates '{}' (names are case-insensitive).",
                    package, canonical
                ));
            }
        }

        warnings
    }

    pub fn denylist(&self) -> Denylist {
        Denylist::new(self.packages.iter().cloned())
    }
}
