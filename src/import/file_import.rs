use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::line_parser::parse_lines;
use crate::error::ImportError;
use crate::models::BudgetRecord;

/// Records read from a stream, in source order, plus how many lines were
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ImportOutcome {
    pub(crate) records: Vec<BudgetRecord>,
    pub(crate) skipped: usize,
}

/// Read every line of `reader` into records.
///
/// Malformed lines are logged and counted, never returned as errors. A read
/// or decode failure aborts the whole import and discards anything parsed so
/// far.
pub(crate) fn import<R: BufRead>(reader: R) -> Result<ImportOutcome, ImportError> {
    let mut outcome = ImportOutcome::default();
    for parsed in parse_lines(reader) {
        let parsed = parsed?;
        match parsed.result {
            Ok(record) => outcome.records.push(record),
            Err(reason) => {
                tracing::warn!(
                    line = parsed.line_number,
                    "Skipping invalid line ({reason}): {}",
                    parsed.line
                );
                outcome.skipped += 1;
            }
        }
    }
    tracing::debug!(
        records = outcome.records.len(),
        skipped = outcome.skipped,
        "Import finished"
    );
    Ok(outcome)
}

/// Open `path` and import it. The file is closed before this returns.
pub(crate) fn import_path(path: &Path) -> Result<ImportOutcome, ImportError> {
    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    import(BufReader::new(file))
}

#[cfg(test)]
#[path = "file_import_tests.rs"]
mod tests;
