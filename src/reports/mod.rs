//! Report generation for command results
//!
//! - human: styled console output
//! - json: pretty-printed JSON for programmatic use
//!
//! Each generator implements [`ReportGenerator`] once per result type, so a
//! command only has to pick the generator matching `--format`.

pub mod human;
pub mod json;

use crate::cli::OutputFormat;
use crate::error::NetworkError;

/// Common trait for all report generators
pub trait ReportGenerator<T: ?Sized> {
    /// Render `data` as a complete report
    fn generate_report(&self, data: &T) -> Result<String, NetworkError>;
}

pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;

/// Render `data` with the generator for `format`
pub fn render<T: ?Sized>(format: OutputFormat, data: &T) -> Result<String, NetworkError>
where
    HumanReportGenerator: ReportGenerator<T>,
    JsonReportGenerator: ReportGenerator<T>,
{
    match format {
        OutputFormat::Human => HumanReportGenerator::new().generate_report(data),
        OutputFormat::Json => JsonReportGenerator::new().generate_report(data),
    }
}
