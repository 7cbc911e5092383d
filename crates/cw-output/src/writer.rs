//! The `ReportWriter` trait implemented by all backend writers.

use cw_sim::SimulationResult;

use crate::{OutputResult, ReportRow};

/// Trait implemented by the table, CSV, and JSON writers.
pub trait ReportWriter {
    /// Write whatever precedes the first row (column titles, opening tokens).
    fn write_header(&mut self) -> OutputResult<()>;

    /// Write one row.
    fn write_row(&mut self, row: &ReportRow) -> OutputResult<()>;

    /// Flush the underlying sink.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Render `results` in order through `writer`.
pub fn write_report<W: ReportWriter>(
    writer:  &mut W,
    results: &[SimulationResult],
) -> OutputResult<()> {
    writer.write_header()?;
    for result in results {
        writer.write_row(&ReportRow::from(result))?;
    }
    writer.finish()
}
