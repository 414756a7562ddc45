//! JSON format report generation

use serde::Serialize;

use super::ReportGenerator;
use crate::error::NetworkError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Serialize + ?Sized> ReportGenerator<T> for JsonReportGenerator {
    fn generate_report(&self, data: &T) -> Result<String, NetworkError> {
        let mut report = serde_json::to_string_pretty(data).map_err(NetworkError::Json)?;
        report.push('\n');
        Ok(report)
    }
}
