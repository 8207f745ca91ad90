mod category;
mod money;
mod record;
mod transaction;

pub(crate) use category::ExpenseCategory;
pub(crate) use money::format_amount;
pub(crate) use record::{BudgetAmounts, BudgetRecord};
pub(crate) use transaction::{EntryKind, StoredTransaction, INCOME_CATEGORY};
