use crate::application::read_models::MatchReportReadModel;
use crate::ports::outbound::MatchReportFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter serializing the read model as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchReportFormatter for JsonFormatter {
    fn format(&self, model: &MatchReportReadModel) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(model).context("Failed to serialize match report")?;
        json.push('\n');
        Ok(json)
    }
}
