/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the interfaces the scan use case relies
/// on to reach configuration, the filesystem, the .NET toolchain and the console.
pub mod outbound;
