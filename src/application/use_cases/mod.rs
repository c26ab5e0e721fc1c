/// Use cases module containing application business logic orchestration
mod scan_dependencies;

pub use scan_dependencies::ScanDependenciesUseCase;
