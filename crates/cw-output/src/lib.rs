//! `cw-output` — report writers for a sweep's result sequence.
//!
//! Three backends are provided:
//!
//! | Writer               | Output                                               |
//! |----------------------|------------------------------------------------------|
//! | [`TableWriter`]      | Fixed-width text table (four 15-wide columns)        |
//! | [`CsvReportWriter`]  | CSV with a header record                             |
//! | [`JsonReportWriter`] | One JSON array of row objects                        |
//!
//! All backends implement [`ReportWriter`] and are driven by
//! [`write_report`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use cw_output::{TableWriter, write_report};
//!
//! let results = sim.run_all(43_200);
//! let mut writer = TableWriter::new(std::io::stdout().lock());
//! write_report(&mut writer, &results)?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod row;
pub mod table;
pub mod writer;


pub use csv::CsvReportWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonReportWriter;
pub use row::ReportRow;
pub use table::TableWriter;
pub use writer::{ReportWriter, write_report};
