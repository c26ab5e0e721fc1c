/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, dotnet CLI, console, etc.).
pub mod dependency_graph_resolver;
pub mod formatter;
pub mod output_presenter;
pub mod policy_config_reader;
pub mod progress_reporter;
pub mod project_locator;

pub use dependency_graph_resolver::{
    DependencyGraphResolver, ProgressCallback, ResolveOptions, DEFAULT_TRANSITIVE_DEPTH,
};
pub use formatter::MatchReportFormatter;
pub use output_presenter::OutputPresenter;
pub use policy_config_reader::PolicyConfigReader;
pub use progress_reporter::ProgressReporter;
pub use project_locator::ProjectLocator;
