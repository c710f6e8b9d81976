use crate::error::ExportError;
use crate::path_report::PathReport;
use std::io::Write;

/// A sink-agnostic serializer for path reports.
///
/// Implementations decide the byte format; callers decide the destination.
/// This keeps the CLI, file output and tests on the exact same code path.
pub trait ReportExporter {
    /// Writes the whole report to `writer` in the exporter's format.
    fn export(&self, report: &PathReport, writer: &mut dyn Write) -> Result<(), ExportError>;
}

/// Exports a report as pretty-printed JSON, terminated by a newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ReportExporter for JsonExporter {
    fn export(&self, report: &PathReport, writer: &mut dyn Write) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
