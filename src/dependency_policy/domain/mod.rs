pub mod analyzed;
pub mod denylist;
pub mod project;

pub use analyzed::{AnalyzedProject, AnalyzedTargetFramework, MatchedDependency};
pub use denylist::Denylist;
pub use project::{Dependency, Project, TargetFramework};
