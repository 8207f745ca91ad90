#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::import::import;
use crate::models::BudgetAmounts;

fn record(date: &str, income: Decimal, expenses: [Decimal; 5]) -> BudgetRecord {
    let [food, rent, travel, study, entertainment] = expenses;
    BudgetRecord::with_date(
        date,
        BudgetAmounts {
            income,
            food,
            rent,
            travel,
            study,
            entertainment,
        },
    )
    .unwrap()
}

fn sample_records() -> Vec<BudgetRecord> {
    vec![
        record(
            "2024-01-15",
            dec!(3000),
            [dec!(500), dec!(1200), dec!(200), dec!(300), dec!(400)],
        ),
        record(
            "2024-02-15",
            dec!(1000),
            [dec!(400), dec!(700), dec!(0), dec!(0), dec!(0)],
        ),
    ]
}

struct FullDisk;

impl Write for FullDisk {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "no space left"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_export_exact_output() {
    let mut out = Vec::new();
    let outcome = export(&sample_records(), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "Date,Income,Food,Rent,Travel,Study,Entertainment,Total Expenses,Savings\n\
         2024-01-15,3000.00,500.00,1200.00,200.00,300.00,400.00,2600.00,400.00\n\
         2024-02-15,1000.00,400.00,700.00,0.00,0.00,0.00,1100.00,-100.00\n"
    );
    assert_eq!(
        outcome,
        ExportOutcome::Written {
            rows: 2,
            bytes: text.len() as u64,
        }
    );
}

#[test]
fn test_export_empty_is_noop() {
    let mut out = Vec::new();
    let outcome = export(&[], &mut out).unwrap();
    assert_eq!(outcome, ExportOutcome::NothingToExport);
    assert!(out.is_empty());
}

#[test]
fn test_export_rounds_to_cents() {
    let records = vec![record(
        "2024-05-01",
        dec!(100.005),
        [dec!(33.333), dec!(0), dec!(0), dec!(0), dec!(0)],
    )];
    let mut out = Vec::new();
    export(&records, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let row = text.lines().nth(1).unwrap();
    assert_eq!(row, "2024-05-01,100.01,33.33,0.00,0.00,0.00,0.00,33.33,66.67");
}

#[test]
fn test_export_keeps_insertion_order() {
    let records = vec![
        record("2024-03-01", dec!(1), [Decimal::ZERO; 5]),
        record("2024-01-01", dec!(2), [Decimal::ZERO; 5]),
    ];
    let mut out = Vec::new();
    export(&records, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let dates: Vec<&str> = text
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(dates, ["2024-03-01", "2024-01-01"]);
}

#[test]
fn test_export_write_failure() {
    let err = export(&sample_records(), FullDisk).unwrap_err();
    assert!(matches!(err, ExportError::Csv(_) | ExportError::Io(_)));
}

#[test]
fn test_export_then_import_roundtrip() {
    let records = vec![
        record(
            "2024-01-15",
            dec!(3000.00),
            [dec!(500.25), dec!(1200), dec!(199.99), dec!(300), dec!(400.10)],
        ),
        record(
            "2024-02-15",
            dec!(1234.567),
            [dec!(0.004), dec!(0), dec!(10), dec!(-5), dec!(0)],
        ),
        record(
            "2024\"Q1",
            dec!(10),
            [dec!(1), dec!(2), dec!(0), dec!(0), dec!(0)],
        ),
    ];
    let mut out = Vec::new();
    export(&records, &mut out).unwrap();
    assert!(String::from_utf8(out.clone())
        .unwrap()
        .contains("\n2024\"Q1,10.00,"));

    let outcome = import(out.as_slice()).unwrap();
    // The header row does not parse as amounts.
    assert_eq!(outcome.skipped, 1);
    assert_eq!(outcome.records.len(), records.len());

    for (original, reparsed) in records.iter().zip(&outcome.records) {
        assert_eq!(reparsed.date(), original.date());
        let (a, b) = (original.amounts(), reparsed.amounts());
        assert_eq!(format_amount(b.income), format_amount(a.income));
        assert_eq!(format_amount(b.food), format_amount(a.food));
        assert_eq!(format_amount(b.rent), format_amount(a.rent));
        assert_eq!(format_amount(b.travel), format_amount(a.travel));
        assert_eq!(format_amount(b.study), format_amount(a.study));
        assert_eq!(format_amount(b.entertainment), format_amount(a.entertainment));
    }
}

#[test]
fn test_export_path_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("budget_data.csv");
    let outcome = export_path(&sample_records(), &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("Date,Income,"));
    assert_eq!(written.lines().count(), 3);
    assert_eq!(
        outcome,
        ExportOutcome::Written {
            rows: 2,
            bytes: written.len() as u64,
        }
    );
}

#[test]
fn test_export_path_empty_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("budget_data.csv");
    let outcome = export_path(&[], &path).unwrap();
    assert_eq!(outcome, ExportOutcome::NothingToExport);
    assert!(!path.exists());
}

#[test]
fn test_export_path_bad_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("budget_data.csv");
    let err = export_path(&sample_records(), &path).unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
}
