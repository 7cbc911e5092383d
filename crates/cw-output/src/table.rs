//! Fixed-width text table.
//!
//! ```text
//!  Time (minutes)    Cars Washed   Average Wait   Longest Wait
//! ------------------------------------------------------------
//!              30             22           0.59              3
//! ```

use std::io::Write;

use crate::{OutputResult, ReportRow};
use crate::writer::ReportWriter;

const COLUMN_WIDTH: usize = 15;
const RULE_WIDTH:   usize = 60;

/// Writes the sweep as a right-aligned table.
pub struct TableWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }
}

impl<W: Write> ReportWriter for TableWriter<W> {
    fn write_header(&mut self) -> OutputResult<()> {
        writeln!(
            self.out,
            "{:>w$}{:>w$}{:>w$}{:>w$}",
            "Time (minutes)",
            "Cars Washed",
            "Average Wait",
            "Longest Wait",
            w = COLUMN_WIDTH,
        )?;
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
        Ok(())
    }

    fn write_row(&mut self, row: &ReportRow) -> OutputResult<()> {
        writeln!(
            self.out,
            "{:>w$}{:>w$}{:>w$.2}{:>w$}",
            row.time_minutes,
            row.cars_washed,
            row.average_wait,
            row.longest_wait,
            w = COLUMN_WIDTH,
        )?;
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
