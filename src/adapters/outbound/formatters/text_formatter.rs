use crate::application::read_models::MatchReportReadModel;
use crate::ports::outbound::MatchReportFormatter;
use crate::shared::Result;

/// TextFormatter adapter emitting the report lines, one per line
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchReportFormatter for TextFormatter {
    fn format(&self, model: &MatchReportReadModel) -> Result<String> {
        let mut output = String::new();
        for line in &model.report_lines {
            output.push_str(line);
            output.push('\n');
        }
        Ok(output)
    }
}
