/// Mock implementations for testing
mod mock_graph_resolver;
mod mock_policy_config_reader;
mod mock_progress_reporter;
mod mock_project_locator;

pub use mock_graph_resolver::MockGraphResolver;
pub use mock_policy_config_reader::MockPolicyConfigReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_locator::MockProjectLocator;
