/// Console adapters for progress and status reporting
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
