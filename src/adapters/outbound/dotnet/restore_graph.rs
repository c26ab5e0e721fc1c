//! Reader for the restore graph (dgspec) emitted by `GenerateRestoreGraphFile`.

use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Only SDK-style projects produce a `project.assets.json`
const PACKAGE_REFERENCE_STYLE: &str = "PackageReference";

/// A project listed in the restore graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreProject {
    pub name: String,
    pub project_path: PathBuf,
    /// The `obj/` directory holding the assets file
    pub output_path: PathBuf,
}

impl RestoreProject {
    pub fn assets_path(&self) -> PathBuf {
        self.output_path.join("project.assets.json")
    }
}

#[derive(Debug, Deserialize)]
struct RestoreGraphDocument {
    #[serde(default)]
    projects: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ProjectSpec {
    restore: RestoreMetadata,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RestoreMetadata {
    project_name: String,
    project_path: String,
    #[serde(default)]
    output_path: Option<String>,
    #[serde(default)]
    project_style: Option<String>,
}

/// Lists the PackageReference projects of a restore graph, in document order
pub fn parse_restore_graph(content: &str) -> Result<Vec<RestoreProject>> {
    let document: RestoreGraphDocument =
        serde_json::from_str(content).context("Failed to parse restore graph")?;

    let mut projects = Vec::new();
    for (key, value) in document.projects {
        let spec: ProjectSpec = serde_json::from_value(value)
            .with_context(|| format!("Invalid restore graph entry for {}", key))?;
        let restore = spec.restore;

        let is_package_reference = restore
            .project_style
            .as_deref()
            .map(|style| style.eq_ignore_ascii_case(PACKAGE_REFERENCE_STYLE))
            .unwrap_or(false);
        if !is_package_reference {
            continue;
        }

        let output_path = restore
            .output_path
            .with_context(|| format!("Restore graph entry for {} has no outputPath", key))?;

        projects.push(RestoreProject {
            name: restore.project_name,
            project_path: PathBuf::from(restore.project_path),
            output_path: PathBuf::from(output_path),
        });
    }

    Ok(projects)
}
