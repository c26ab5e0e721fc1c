/// ProgressReporter port for reporting progress and status during a scan
///
/// Implementations write to a side channel (e.g. stderr) so the report
/// itself stays alone on stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports the final status of the scan
    fn report_completion(&self, message: &str);
}
