//! CSV output backend.
//!
//! Columns: `time_minutes,cars_washed,average_wait,longest_wait`.

use std::io::Write;

use csv::{Writer, WriterBuilder};

use crate::{OutputResult, ReportRow};
use crate::writer::ReportWriter;

/// Column names, in [`ReportRow`] field order.
const HEADER: [&str; 4] = ["time_minutes", "cars_washed", "average_wait", "longest_wait"];

/// Writes the sweep as CSV.  The header record is written by
/// [`write_header`][ReportWriter::write_header], so an empty sweep still
/// produces one.
pub struct CsvReportWriter<W: Write> {
    out:      Writer<W>,
    finished: bool,
}

impl<W: Write> CsvReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out:      WriterBuilder::new().has_headers(false).from_writer(out),
            finished: false,
        }
    }
}

impl<W: Write> ReportWriter for CsvReportWriter<W> {
    fn write_header(&mut self) -> OutputResult<()> {
        self.out.write_record(HEADER)?;
        Ok(())
    }

    fn write_row(&mut self, row: &ReportRow) -> OutputResult<()> {
        self.out.serialize(row)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
