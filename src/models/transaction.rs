use rust_decimal::Decimal;

/// Category label used for the income row of a persisted budget.
pub(crate) const INCOME_CATEGORY: &str = "Income";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One category/amount row as it sits in the store.
#[derive(Debug, Clone)]
pub(crate) struct StoredTransaction {
    pub(crate) id: i64,
    pub(crate) user_id: i64,
    pub(crate) category: String,
    pub(crate) amount: Decimal,
    pub(crate) kind: EntryKind,
    pub(crate) transaction_date: String,
}
