use rust_decimal::Decimal;
use std::str::FromStr;

use super::ExpenseCategory;
use crate::error::InputError;

/// The six values a user enters for one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct BudgetAmounts {
    pub(crate) income: Decimal,
    pub(crate) food: Decimal,
    pub(crate) rent: Decimal,
    pub(crate) travel: Decimal,
    pub(crate) study: Decimal,
    pub(crate) entertainment: Decimal,
}

impl BudgetAmounts {
    /// Parse the entry-form fields, in the order income, food, rent, travel,
    /// study, entertainment. Blank fields count as zero.
    pub(crate) fn parse_inputs(fields: [&str; 6]) -> Result<Self, InputError> {
        let [income, food, rent, travel, study, entertainment] = fields;
        Ok(Self {
            income: parse_input("Income", income)?,
            food: parse_input("Food", food)?,
            rent: parse_input("Rent", rent)?,
            travel: parse_input("Travel", travel)?,
            study: parse_input("Study", study)?,
            entertainment: parse_input("Entertainment", entertainment)?,
        })
    }

    pub(crate) fn expense(&self, category: ExpenseCategory) -> Decimal {
        match category {
            ExpenseCategory::Food => self.food,
            ExpenseCategory::Rent => self.rent,
            ExpenseCategory::Travel => self.travel,
            ExpenseCategory::Study => self.study,
            ExpenseCategory::Entertainment => self.entertainment,
        }
    }

    /// Expense amounts paired with their category, in column order.
    pub(crate) fn expenses(&self) -> impl Iterator<Item = (ExpenseCategory, Decimal)> + '_ {
        ExpenseCategory::all()
            .iter()
            .map(move |&category| (category, self.expense(category)))
    }
}

fn parse_input(field: &'static str, text: &str) -> Result<Decimal, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(trimmed).map_err(|_| InputError::NotANumber {
        field,
        value: text.to_string(),
    })
}

/// Total expenses and savings for a set of amounts, or `None` when either
/// falls outside the `Decimal` range.
pub(crate) fn derive_totals(amounts: &BudgetAmounts) -> Option<(Decimal, Decimal)> {
    let total_expenses = amounts
        .expenses()
        .try_fold(Decimal::ZERO, |total, (_, amount)| total.checked_add(amount))?;
    let savings = amounts.income.checked_sub(total_expenses)?;
    Some((total_expenses, savings))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SavingsStatus {
    Saving,
    Overspending,
}

impl SavingsStatus {
    pub(crate) fn message(&self) -> &'static str {
        match self {
            Self::Saving => "Great job! You're saving money!",
            Self::Overspending => "You're overspending! Consider reducing expenses.",
        }
    }
}

/// One period's budget entry. Derived totals are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetRecord {
    date: String,
    amounts: BudgetAmounts,
    total_expenses: Decimal,
    savings: Decimal,
}

impl BudgetRecord {
    /// A record dated today, as created from the entry form.
    pub(crate) fn new(amounts: BudgetAmounts) -> Result<Self, InputError> {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        Self::with_date(today, amounts)
    }

    /// A record with an explicit date, as read from an import file.
    pub(crate) fn with_date(
        date: impl Into<String>,
        amounts: BudgetAmounts,
    ) -> Result<Self, InputError> {
        let (total_expenses, savings) =
            derive_totals(&amounts).ok_or(InputError::TotalOutOfRange)?;
        Ok(Self {
            date: date.into(),
            amounts,
            total_expenses,
            savings,
        })
    }

    pub(crate) fn date(&self) -> &str {
        &self.date
    }

    pub(crate) fn amounts(&self) -> &BudgetAmounts {
        &self.amounts
    }

    pub(crate) fn income(&self) -> Decimal {
        self.amounts.income
    }

    pub(crate) fn total_expenses(&self) -> Decimal {
        self.total_expenses
    }

    pub(crate) fn savings(&self) -> Decimal {
        self.savings
    }

    /// Zero savings counts as overspending.
    pub(crate) fn status(&self) -> SavingsStatus {
        if self.savings > Decimal::ZERO {
            SavingsStatus::Saving
        } else {
            SavingsStatus::Overspending
        }
    }
}
