use crate::application::read_models::MatchReportReadModel;
use crate::shared::Result;

/// MatchReportFormatter port for rendering scan results
///
/// This port abstracts the formatting logic for the different output
/// formats (plain text lines, JSON).
pub trait MatchReportFormatter {
    /// Formats the report read model
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &MatchReportReadModel) -> Result<String>;
}
