//! Reader for NuGet's `project.assets.json`.
//!
//! Direct references come from `project.frameworks[tfm].dependencies`;
//! resolved versions and the transitive closure come from `targets[tfm]`,
//! whose keys look like `Package.Name/1.2.3`.

use crate::dependency_policy::domain::{Denylist, Dependency, Project, TargetFramework};
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Deserialize)]
struct AssetsDocument {
    #[serde(default)]
    targets: Map<String, Value>,
    project: AssetsProject,
}

#[derive(Debug, Deserialize)]
struct AssetsProject {
    restore: AssetsRestore,
    #[serde(default)]
    frameworks: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssetsRestore {
    project_name: String,
    project_path: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrameworkSpec {
    #[serde(default)]
    target_alias: Option<String>,
    #[serde(default)]
    dependencies: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DependencySpec {
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    auto_referenced: bool,
}

#[derive(Debug, Deserialize)]
struct TargetLibrary {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    dependencies: Map<String, Value>,
}

/// A package resolved for one target
#[derive(Debug)]
struct ResolvedPackage {
    name: String,
    version: String,
    dependencies: Vec<String>,
}

/// The `package` entries of one `targets` section, indexed by folded name
#[derive(Debug, Default)]
struct ResolvedTarget {
    packages: Vec<ResolvedPackage>,
    index: HashMap<String, usize>,
}

impl ResolvedTarget {
    fn parse(section: &Value) -> Result<Self> {
        let libraries: Map<String, Value> =
            serde_json::from_value(section.clone()).context("Invalid targets section")?;

        let mut target = ResolvedTarget::default();
        for (key, value) in libraries {
            let Some((name, version)) = key.split_once('/') else {
                continue;
            };
            let library: TargetLibrary = serde_json::from_value(value)
                .with_context(|| format!("Invalid target library {}", key))?;
            if !library
                .kind
                .as_deref()
                .map(|kind| kind.eq_ignore_ascii_case("package"))
                .unwrap_or(false)
            {
                continue;
            }

            target
                .index
                .insert(Denylist::fold(name), target.packages.len());
            target.packages.push(ResolvedPackage {
                name: name.to_string(),
                version: version.to_string(),
                dependencies: library.dependencies.keys().cloned().collect(),
            });
        }

        Ok(target)
    }

    fn package(&self, name: &str) -> Option<&ResolvedPackage> {
        self.index
            .get(&Denylist::fold(name))
            .map(|&i| &self.packages[i])
    }
}

/// Builds a Project from the contents of a `project.assets.json` file
///
/// # Arguments
/// * `content` - Raw JSON of the assets file
/// * `transitive_depth` - Levels of transitive packages to collect below
///   the direct references (0 keeps direct references only)
pub fn parse_assets_file(content: &str, transitive_depth: usize) -> Result<Project> {
    let document: AssetsDocument =
        serde_json::from_str(content).context("Failed to parse project.assets.json")?;

    // RID-specific sections (`net8.0/linux-x64`) repeat their RID-less parent
    let rid_less_targets: Vec<(&String, &Value)> = document
        .targets
        .iter()
        .filter(|(key, _)| !key.contains('/'))
        .collect();

    let mut target_frameworks = Vec::new();
    for (position, (framework_name, spec_value)) in document.project.frameworks.iter().enumerate() {
        let spec: FrameworkSpec = serde_json::from_value(spec_value.clone())
            .with_context(|| format!("Invalid framework section {}", framework_name))?;

        let alias = spec.target_alias.as_deref().unwrap_or(framework_name);
        let section = rid_less_targets
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(alias) || key.eq_ignore_ascii_case(framework_name))
            .or_else(|| rid_less_targets.get(position))
            .map(|(_, value)| *value);
        let resolved = match section {
            Some(value) => ResolvedTarget::parse(value)?,
            None => ResolvedTarget::default(),
        };

        let dependencies = collect_dependencies(&spec, &resolved, transitive_depth)?;
        target_frameworks.push(TargetFramework::new(framework_name.as_str(), dependencies));
    }

    Ok(Project::new(
        document.project.restore.project_name,
        document.project.restore.project_path,
        target_frameworks,
    ))
}

fn collect_dependencies(
    spec: &FrameworkSpec,
    resolved: &ResolvedTarget,
    transitive_depth: usize,
) -> Result<Vec<Dependency>> {
    let mut dependencies = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut frontier: Vec<String> = Vec::new();

    for (name, value) in &spec.dependencies {
        let declared: DependencySpec = match value {
            // Old assets files store the bare version range
            Value::String(range) => DependencySpec {
                version: Some(range.clone()),
                ..DependencySpec::default()
            },
            other => serde_json::from_value(other.clone())
                .with_context(|| format!("Invalid dependency entry {}", name))?,
        };

        let is_package = declared
            .target
            .as_deref()
            .map(|target| target.eq_ignore_ascii_case("package"))
            .unwrap_or(true);
        if !is_package || !seen.insert(Denylist::fold(name)) {
            continue;
        }

        let version = resolved
            .package(name)
            .map(|pkg| pkg.version.clone())
            .or(declared.version)
            .unwrap_or_default();

        dependencies.push(Dependency::new(
            name.as_str(),
            version,
            false,
            declared.auto_referenced,
        ));
        frontier.push(name.clone());
    }

    for _ in 0..transitive_depth {
        let mut next = Vec::new();
        for parent in &frontier {
            let Some(package) = resolved.package(parent) else {
                continue;
            };
            for child in &package.dependencies {
                if !seen.insert(Denylist::fold(child)) {
                    continue;
                }
                if let Some(resolved_child) = resolved.package(child) {
                    dependencies.push(Dependency::transitive(
                        resolved_child.name.as_str(),
                        resolved_child.version.as_str(),
                    ));
                    next.push(resolved_child.name.clone());
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    Ok(dependencies)
}
