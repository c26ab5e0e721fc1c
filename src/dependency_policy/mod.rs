/// Domain layer - the resolved dependency graph model, the denylist and the
/// pure matching and reporting services.
///
/// Nothing in this module performs I/O.
pub mod domain;
pub mod services;
