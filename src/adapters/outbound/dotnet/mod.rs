//! .NET SDK adapter: restore, restore graph listing and assets file reading

mod assets_file;
mod dotnet_runner;
mod graph_resolver;
mod restore_graph;

pub use assets_file::parse_assets_file;
pub use dotnet_runner::DotNetRunner;
pub use graph_resolver::DotNetGraphResolver;
pub use restore_graph::{parse_restore_graph, RestoreProject};
