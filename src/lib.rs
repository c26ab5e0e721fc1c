//! nuget-depguard - Dependency policy scanner for .NET projects
//!
//! This library checks the resolved NuGet dependency graph of a solution or
//! project against a denylist of package names and reports every match,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_policy`): Entities, the denylist, the matcher and the reporter
//! - **Application Layer** (`application`): Use cases, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use nuget_depguard::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! // Create use case with concrete adapters
//! let use_case = ScanDependenciesUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemProjectLocator::new(),
//!     DotNetGraphResolver::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = ScanRequest::new(
//!     PathBuf::from("."),
//!     PathBuf::from(".depguard.json"),
//!     ResolveOptions::default(),
//! );
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let read_model = MatchReportReadModelBuilder::build(response.analyzed_projects());
//! let output = TextFormatter::new().format(&read_model)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_policy;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::dotnet::DotNetGraphResolver;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemProjectLocator, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{OutputFormat, ScanOutcome, ScanRequest, ScanResponse};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::read_models::{MatchReportReadModel, MatchReportReadModelBuilder};
    pub use crate::application::use_cases::ScanDependenciesUseCase;
    pub use crate::config::PolicyConfig;
    pub use crate::dependency_policy::domain::{
        AnalyzedProject, AnalyzedTargetFramework, Denylist, Dependency, MatchedDependency,
        Project, TargetFramework,
    };
    pub use crate::dependency_policy::services::{DependencyMatcher, MatchReporter};
    pub use crate::ports::outbound::{
        DependencyGraphResolver, MatchReportFormatter, OutputPresenter, PolicyConfigReader,
        ProgressReporter, ProjectLocator, ResolveOptions,
    };
    pub use crate::shared::error::{DepguardError, ExitCode};
    pub use crate::shared::Result;
}
