//! JSON output backend.

use std::io::Write;

use crate::{OutputResult, ReportRow};
use crate::writer::ReportWriter;

/// Buffers rows and writes them as one pretty-printed JSON array on
/// [`finish`][ReportWriter::finish].
pub struct JsonReportWriter<W: Write> {
    out:      W,
    rows:     Vec<ReportRow>,
    finished: bool,
}

impl<W: Write> JsonReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, rows: Vec::new(), finished: false }
    }
}

impl<W: Write> ReportWriter for JsonReportWriter<W> {
    fn write_header(&mut self) -> OutputResult<()> {
        Ok(())
    }

    fn write_row(&mut self, row: &ReportRow) -> OutputResult<()> {
        self.rows.push(*row);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        serde_json::to_writer_pretty(&mut self.out, &self.rows)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
