mod dependency_matcher;
mod match_reporter;

pub use dependency_matcher::DependencyMatcher;
pub use match_reporter::{MatchReporter, PROJECT_MARKER};
