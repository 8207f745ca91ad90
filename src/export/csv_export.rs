use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::ExportError;
use crate::models::{format_amount, BudgetRecord};

pub(crate) const HEADER: [&str; 9] = [
    "Date",
    "Income",
    "Food",
    "Rent",
    "Travel",
    "Study",
    "Entertainment",
    "Total Expenses",
    "Savings",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExportOutcome {
    /// There were no records, so nothing was written.
    NothingToExport,
    Written { rows: usize, bytes: u64 },
}

/// Counts bytes on their way to the sink.
struct CountingWriter<W> {
    inner: W,
    bytes: u64,
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Write `records` as CSV in the order given.
pub(crate) fn export<W: Write>(
    records: &[BudgetRecord],
    sink: W,
) -> Result<ExportOutcome, ExportError> {
    if records.is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }

    // The importer splits on bare commas, so dates go out unquoted.
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(CountingWriter {
            inner: sink,
            bytes: 0,
        });

    wtr.write_record(HEADER)?;
    for record in records {
        let a = record.amounts();
        wtr.write_record([
            record.date().to_string(),
            format_amount(a.income),
            format_amount(a.food),
            format_amount(a.rent),
            format_amount(a.travel),
            format_amount(a.study),
            format_amount(a.entertainment),
            format_amount(record.total_expenses()),
            format_amount(record.savings()),
        ])?;
    }
    wtr.flush()?;

    let bytes = wtr.get_ref().bytes;
    tracing::debug!(rows = records.len(), bytes, "Exported budget records");
    Ok(ExportOutcome::Written {
        rows: records.len(),
        bytes,
    })
}

/// Export to a file, replacing it if present. No file is created when there
/// is nothing to export.
pub(crate) fn export_path(
    records: &[BudgetRecord],
    path: &Path,
) -> Result<ExportOutcome, ExportError> {
    if records.is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }
    let file = File::create(path)?;
    export(records, io::BufWriter::new(file))
}

#[cfg(test)]
#[path = "csv_export_tests.rs"]
mod tests;
