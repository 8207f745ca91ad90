#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ExpenseCategory {
    Food,
    Rent,
    Travel,
    Study,
    Entertainment,
}

impl ExpenseCategory {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Travel => "Travel",
            Self::Study => "Study",
            Self::Entertainment => "Entertainment",
        }
    }

    /// Categories in entry-form and column order.
    pub(crate) fn all() -> &'static [ExpenseCategory] {
        &[
            Self::Food,
            Self::Rent,
            Self::Travel,
            Self::Study,
            Self::Entertainment,
        ]
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
