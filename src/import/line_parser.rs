use rust_decimal::Decimal;
use std::io::{self, BufRead};
use std::str::FromStr;

use crate::models::{BudgetAmounts, BudgetRecord};

/// Number of leading fields a budget line must carry.
pub(crate) const FIELD_COUNT: usize = 7;

const AMOUNT_FIELDS: [&str; 6] = ["income", "food", "rent", "travel", "study", "entertainment"];

/// Why a line was left out of an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SkipReason {
    TooFewFields { found: usize },
    EmptyDate,
    InvalidAmount { field: &'static str, value: String },
    AmountOutOfRange,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewFields { found } => {
                write!(f, "expected {FIELD_COUNT} fields, found {found}")
            }
            Self::EmptyDate => write!(f, "date is empty"),
            Self::InvalidAmount { field, value } => {
                write!(f, "{field} is not a number: '{value}'")
            }
            Self::AmountOutOfRange => write!(f, "totals overflow the amount range"),
        }
    }
}

/// The result of reading one non-blank, non-comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineOutcome {
    /// 1-based line number in the source.
    pub(crate) line_number: usize,
    pub(crate) line: String,
    pub(crate) result: Result<BudgetRecord, SkipReason>,
}

/// Parse a single line. Returns `None` for blank and `#` comment lines.
pub(crate) fn parse_line(line: &str) -> Option<Result<BudgetRecord, SkipReason>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < FIELD_COUNT {
        return Some(Err(SkipReason::TooFewFields { found: parts.len() }));
    }

    let date = parts[0].trim();
    if date.is_empty() {
        return Some(Err(SkipReason::EmptyDate));
    }

    let mut values = [Decimal::ZERO; 6];
    for (i, (slot, field)) in values.iter_mut().zip(AMOUNT_FIELDS).enumerate() {
        let raw = parts[i + 1].trim();
        match Decimal::from_str(raw) {
            Ok(v) => *slot = v,
            Err(_) => {
                return Some(Err(SkipReason::InvalidAmount {
                    field,
                    value: raw.to_string(),
                }))
            }
        }
    }

    let [income, food, rent, travel, study, entertainment] = values;
    let amounts = BudgetAmounts {
        income,
        food,
        rent,
        travel,
        study,
        entertainment,
    };
    Some(BudgetRecord::with_date(date, amounts).map_err(|_| SkipReason::AmountOutOfRange))
}

/// Lazily parses a line-oriented reader. Yields one outcome per
/// significant line; I/O errors are passed through unchanged.
///
/// Over an in-memory buffer (`text.as_bytes()`) the parse can be rerun from
/// the start as often as needed.
pub(crate) struct ParsedLines<R> {
    lines: io::Lines<R>,
    line_number: usize,
}

pub(crate) fn parse_lines<R: BufRead>(reader: R) -> ParsedLines<R> {
    ParsedLines {
        lines: reader.lines(),
        line_number: 0,
    }
}

impl<R: BufRead> Iterator for ParsedLines<R> {
    type Item = io::Result<LineOutcome>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            self.line_number += 1;
            if let Some(result) = parse_line(&line) {
                return Some(Ok(LineOutcome {
                    line_number: self.line_number,
                    line,
                    result,
                }));
            }
        }
    }
}

#[cfg(test)]
#[path = "line_parser_tests.rs"]
mod tests;
