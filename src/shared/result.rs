/// Type alias for Result with anyhow::Error as the error type.
/// Domain-level failures are `DepguardError` values wrapped in `anyhow::Error`
/// so the process boundary can downcast them to pick an exit code.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
