/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
mod project_locator;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use project_locator::FileSystemProjectLocator;
