//! NDJSON (newline-delimited JSON) sink.
//!
//! Each row is serialized straight into the buffered writer, one per line.
//!
//! ```
//! use railyard_boundary::sink::ndjson::NdjsonSink;
//! use railyard_boundary::RecordReport;
//! use railyard_core::Error;
//!
//! let mut buf = Vec::new();
//! let mut sink = NdjsonSink::new(&mut buf);
//! sink.write_record(&RecordReport::from_outcome(1, Ok::<_, Error>("ok"))).unwrap();
//! assert_eq!(sink.finish().unwrap(), 1);
//! ```

use super::SummaryRow;
use crate::report::RecordReport;
use serde::Serialize;
use std::io::{self, BufWriter, Write};

/// Buffered NDJSON writer.
pub struct NdjsonSink<W: Write> {
    writer: BufWriter<W>,
    rows_written: usize,
}

impl NdjsonSink<io::Stdout> {
    /// Write NDJSON to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> NdjsonSink<W> {
    /// Create a sink wrapping any writer (file, `Vec<u8>`, etc.).
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(64 * 1024, writer),
            rows_written: 0,
        }
    }

    /// Write one batch summary row.
    pub fn write_summary(&mut self, row: &SummaryRow) -> io::Result<()> {
        self.write_row(row)
    }

    /// Write one record row.
    pub fn write_record<T: Serialize>(&mut self, row: &RecordReport<T>) -> io::Result<()> {
        self.write_row(row)
    }

    /// Write all record rows.
    pub fn write_records<T: Serialize>(&mut self, rows: &[RecordReport<T>]) -> io::Result<()> {
        rows.iter().try_for_each(|row| self.write_row(row))
    }

    /// Flush and return how many rows were written.
    pub fn finish(mut self) -> io::Result<usize> {
        self.writer.flush()?;
        Ok(self.rows_written)
    }

    /// Number of rows written so far.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    fn write_row<R: Serialize + ?Sized>(&mut self, row: &R) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, row).map_err(io::Error::other)?;
        self.writer.write_all(b"\n")?;
        self.rows_written += 1;
        Ok(())
    }
}
