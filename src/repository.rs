use rust_decimal::Decimal;

use crate::models::BudgetRecord;

/// The records entered or imported during this session, in insertion order.
#[derive(Debug, Default)]
pub(crate) struct RecordRepository {
    records: Vec<BudgetRecord>,
}

/// Figures shown on the dashboard for the most recent record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) latest_savings: Decimal,
    pub(crate) latest_total_expenses: Decimal,
    pub(crate) latest_income: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecentActivity {
    pub(crate) last_date: String,
    pub(crate) record_count: usize,
}

impl RecordRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, record: BudgetRecord) {
        self.records.push(record);
    }

    /// Merge a completed import, keeping its order.
    pub(crate) fn extend(&mut self, records: impl IntoIterator<Item = BudgetRecord>) {
        self.records.extend(records);
    }

    pub(crate) fn all(&self) -> &[BudgetRecord] {
        &self.records
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn latest(&self) -> Option<&BudgetRecord> {
        self.records.last()
    }

    pub(crate) fn summary(&self) -> Option<Summary> {
        self.latest().map(|r| Summary {
            latest_savings: r.savings(),
            latest_total_expenses: r.total_expenses(),
            latest_income: r.income(),
        })
    }

    pub(crate) fn recent_activity(&self) -> Option<RecentActivity> {
        self.latest().map(|r| RecentActivity {
            last_date: r.date().to_string(),
            record_count: self.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::BudgetAmounts;
    use rust_decimal_macros::dec;

    fn record(date: &str, income: Decimal, food: Decimal) -> BudgetRecord {
        BudgetRecord::with_date(
            date,
            BudgetAmounts {
                income,
                food,
                ..BudgetAmounts::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_empty_repository() {
        let repo = RecordRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.len(), 0);
        assert!(repo.latest().is_none());
        assert!(repo.summary().is_none());
        assert!(repo.recent_activity().is_none());
        assert!(repo.all().is_empty());
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut repo = RecordRepository::new();
        repo.append(record("2024-02-01", dec!(10), dec!(1)));
        repo.append(record("2024-01-01", dec!(20), dec!(2)));
        repo.append(record("2024-02-01", dec!(10), dec!(1)));

        let dates: Vec<&str> = repo.all().iter().map(|r| r.date()).collect();
        assert_eq!(dates, ["2024-02-01", "2024-01-01", "2024-02-01"]);
        assert_eq!(repo.len(), 3);
        assert!(!repo.is_empty());
    }

    #[test]
    fn test_latest_and_summary() {
        let mut repo = RecordRepository::new();
        repo.append(record("2024-01-01", dec!(3000), dec!(2600)));
        repo.append(record("2024-02-01", dec!(1000), dec!(1100)));

        assert_eq!(repo.latest().map(|r| r.date()), Some("2024-02-01"));
        assert_eq!(
            repo.summary(),
            Some(Summary {
                latest_savings: dec!(-100),
                latest_total_expenses: dec!(1100),
                latest_income: dec!(1000),
            })
        );
        assert_eq!(
            repo.recent_activity(),
            Some(RecentActivity {
                last_date: "2024-02-01".into(),
                record_count: 2,
            })
        );
    }

    #[test]
    fn test_extend_appends_after_existing() {
        let mut repo = RecordRepository::new();
        repo.append(record("2024-01-01", dec!(1), dec!(0)));
        repo.extend(vec![
            record("2024-03-01", dec!(3), dec!(0)),
            record("2024-02-01", dec!(2), dec!(0)),
        ]);
        let dates: Vec<&str> = repo.all().iter().map(|r| r.date()).collect();
        assert_eq!(dates, ["2024-01-01", "2024-03-01", "2024-02-01"]);
    }
}
